//! Command-line interface for paneup.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options.

use crate::loader::DEFAULT_CONFIG_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for paneup.
///
/// # Examples
///
/// ```bash
/// # Show the plan for session "dev" without running it
/// paneup dryUp dev
///
/// # Build the session after confirming, using another config file
/// paneup -c stack.yaml up dev
///
/// # Print the parsed config
/// paneup config
/// ```
#[derive(Parser, Debug)]
#[command(name = "paneup")]
#[command(version)]
#[command(about = "Spin up a tmux session running docker compose services")]
#[command(long_about = "Paneup reads a window/service config and builds a tmux session\n\
    with one pane per window, each running a docker compose command.")]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Shell used to run the plan on `up`.
    #[arg(long, global = true, value_name = "PROGRAM", default_value = "bash")]
    pub shell: String,

    /// Show debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Paneup subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Print the configuration file.
    Config,

    /// Print the commands that would create the session.
    #[command(name = "dryUp")]
    DryUp {
        /// Target tmux session.
        session: Option<String>,
    },

    /// Create the tmux session and run the compose commands.
    Up {
        /// Target tmux session.
        session: Option<String>,
    },
}

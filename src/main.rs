//! Paneup CLI entry point.
//!
//! This binary provides the `paneup` command for turning a window/service
//! config into a tmux session running docker compose.

use clap::Parser;
use paneup::cli::{Cli, Commands};
use paneup::error::Result;
use paneup::gate::{self, StdinConfirmation};
use paneup::plan::{self, PlanSettings};
use paneup::runner::ShellRunner;
use paneup::{loader, Config};
use tracing::Level;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so plan output on stdout stays clean.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = loader::load_config(&cli.config)?;
    let settings = PlanSettings::default();

    match &cli.command {
        Commands::Config => print_config(&config),
        Commands::DryUp { session } => {
            let session = settings.session_name(session.as_deref());
            print!("{}", plan::compile(&settings, session, &config));
            Ok(())
        }
        Commands::Up { session } => {
            let session = settings.session_name(session.as_deref());
            let plan = plan::compile(&settings, session, &config).render();
            gate::confirm_and_run(
                &plan,
                &mut StdinConfirmation::stdin(),
                &mut ShellRunner::new(cli.shell.as_str()),
                &mut std::io::stdout(),
            )
        }
    }
}

/// Print the config as canonical YAML.
fn print_config(config: &Config) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}

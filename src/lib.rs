//! # Paneup
//!
//! Builds a tmux session with one pane per configured window, each running a
//! `docker compose` command.
//!
//! Paneup compiles a config into a plan of tmux commands, shows it, and on
//! confirmation runs it through a shell. `dryUp` prints the plan only.
//!
//! ## Quick Example
//!
//! ```yaml
//! # config.yaml
//! windows:
//!   api:
//!     services: [api, db]
//!     command: up
//!   web:
//!     services: [web]
//!     command: up
//!     command_options: [--build]
//! ```
//!
//! `paneup dryUp dev` prints:
//!
//! ```text
//! tmux new-session -d -s dev -n Window
//! tmux send-keys -t dev:Window.1 "docker compose up api db  " C-m
//! tmux split-window -h -p 50 -t dev
//! tmux send-keys -t dev:Window.2 "docker compose up web --build " C-m
//! ```
//!
//! ## Architecture
//!
//! - [`config`]: Config data structures (YAML or TOML)
//! - [`cli`]: Command-line argument parsing with clap
//! - [`loader`]: Config file loading
//! - [`tmux`]: Typed tmux command records
//! - [`plan`]: Plan compilation and formatting
//! - [`gate`]: Confirmation prompt
//! - [`runner`]: Shell execution
//! - [`error`]: Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod loader;
pub mod plan;
pub mod runner;
pub mod tmux;

pub use config::{Config, WindowSpec};
pub use error::{PaneupError, Result};
pub use plan::{ExecutionPlan, PlanSettings};

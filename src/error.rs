//! Error types for paneup.
//!
//! All errors in paneup are represented by [`PaneupError`], which covers
//! configuration loading and plan execution failures. A declined
//! confirmation is not an error.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors that can occur in paneup.
#[derive(Error, Debug)]
pub enum PaneupError {
    /// Config file does not exist at the given path.
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Failed to read a file from disk.
    #[error("Failed to read config: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failed.
    #[error("Failed to parse config: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing failed.
    #[error("Failed to parse config: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The generated plan could not be spawned or exited non-zero.
    #[error("error while running command: {0}")]
    ExecutionError(String),
}

/// Convenient Result type alias for paneup operations.
pub type Result<T> = std::result::Result<T, PaneupError>;

//! Config file loading.
//!
//! The config path comes from the `--config` flag (default `config.yaml`).
//! Files ending in `.toml` are parsed as TOML; everything else is YAML.

use crate::config::Config;
use crate::error::{PaneupError, Result};
use std::path::Path;
use tracing::debug;

/// Config path used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Load and parse a config file from the given path.
///
/// # Errors
///
/// - [`PaneupError::ConfigNotFound`] if the file doesn't exist
/// - [`PaneupError::IoError`] if reading fails
/// - [`PaneupError::YamlError`] or [`PaneupError::TomlError`] if parsing fails
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(PaneupError::ConfigNotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;

    let config = if is_toml(path) {
        Config::from_toml(&contents)?
    } else {
        Config::from_yaml(&contents)?
    };

    debug!(path = %path.display(), windows = ?config.list_windows(), "loaded config");
    Ok(config)
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

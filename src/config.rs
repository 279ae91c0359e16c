//! Configuration types for paneup.
//!
//! The config has a single top-level key, `windows`, mapping a window name to
//! the compose invocation that should run in that window's pane.
//!
//! # Config Format
//!
//! ```yaml
//! windows:
//!   api:
//!     services: [api, db]
//!     command: up
//!     command_options: [--build]
//!   web:
//!     services: [web]
//!     command: up
//! ```
//!
//! Windows are kept in a [`BTreeMap`], so they are always visited in
//! lexicographic order of their names regardless of declaration order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single window entry: one compose invocation in one pane.
///
/// # Example
///
/// ```yaml
/// api:
///   services: [api, db]
///   command: up
///   command_options: [-d]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WindowSpec {
    /// Compose services to target. May be empty.
    #[serde(default)]
    pub services: Vec<String>,
    /// Compose subcommand, e.g. `up` or `logs`. Empty when omitted.
    #[serde(default)]
    pub command: String,
    /// Extra flags appended after the services.
    #[serde(default)]
    pub command_options: Vec<String>,
}

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Window name -> window spec, ordered by name.
    #[serde(default)]
    pub windows: BTreeMap<String, WindowSpec>,
}

impl Config {
    /// Parse config from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns `serde_yaml::Error` if the YAML is malformed or doesn't match
    /// the expected structure.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse config from a TOML string with the same shape as the YAML form.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Re-emit the config as canonical YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// List all window names in visiting order.
    pub fn list_windows(&self) -> Vec<&str> {
        self.windows.keys().map(String::as_str).collect()
    }
}

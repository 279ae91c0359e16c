//! Shell execution of a formatted plan.
//!
//! The runner hands a single `;`-separated command string to a shell and
//! blocks until it exits. The child inherits stdout and stderr, so tmux and
//! compose output goes straight to the terminal.

use crate::error::{PaneupError, Result};
use std::process::Command;
use tracing::info;

/// Something that can run a shell command string to completion.
pub trait ProcessRunner {
    /// Run `command`, returning an error if it can't be spawned or exits non-zero.
    fn run(&mut self, command: &str) -> Result<()>;
}

/// Runs commands through `<shell> -c`.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    /// Create a runner using the given shell program.
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new("bash")
    }
}

impl ProcessRunner for ShellRunner {
    fn run(&mut self, command: &str) -> Result<()> {
        info!(shell = %self.shell, "running plan");
        let status = Command::new(&self.shell)
            .args(["-c", command])
            .status()
            .map_err(|e| PaneupError::ExecutionError(e.to_string()))?;

        if !status.success() {
            return Err(PaneupError::ExecutionError(status.to_string()));
        }

        Ok(())
    }
}

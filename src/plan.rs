//! Execution plan compilation and formatting.
//!
//! [`compile`] turns a [`Config`] into an [`ExecutionPlan`]: one detached
//! session, then one pane per window, each running a `docker compose`
//! invocation. Windows after the first get a 50/50 horizontal split.
//!
//! # Example
//!
//! ```
//! use paneup::config::Config;
//! use paneup::plan::{compile, PlanSettings};
//!
//! let config = Config::from_yaml(
//!     "windows:\n  a:\n    services: [web]\n    command: up\n    command_options: [-d]\n",
//! )
//! .unwrap();
//!
//! let plan = compile(&PlanSettings::default(), "test", &config);
//! assert_eq!(
//!     plan.render(),
//!     "tmux new-session -d -s test -n Window\n\
//!      tmux send-keys -t test:Window.1 \"docker compose up web -d \" C-m\n"
//! );
//! ```

use crate::config::{Config, WindowSpec};
use crate::tmux::Step;
use std::fmt;
use tracing::debug;

/// Fixed values the compiler needs.
///
/// Passed explicitly to [`compile`] so it stays a pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSettings {
    /// Session name used when none is given on the command line.
    pub default_session: String,
    /// Name of the single tmux window all panes live in.
    pub window_name: String,
    /// Size of each new pane, in percent.
    pub split_percent: u8,
    /// Compose program prefix.
    pub compose: String,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            default_session: "defaultSessionName".into(),
            window_name: "Window".into(),
            split_percent: 50,
            compose: "docker compose".into(),
        }
    }
}

impl PlanSettings {
    /// Pick the session name, falling back to [`PlanSettings::default_session`].
    pub fn session_name<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.default_session)
    }
}

/// Ordered tmux steps. Immutable once compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    steps: Vec<Step>,
}

impl ExecutionPlan {
    /// The compiled steps, in execution order.
    #[cfg(test)]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Render as text, one command per line, each terminated by `\n`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExecutionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}

/// Build the compose command typed into a pane.
///
/// Each section is followed by a space, so empty services or options leave
/// extra whitespace rather than dropping the separator.
pub fn compose_command(settings: &PlanSettings, spec: &WindowSpec) -> String {
    format!(
        "{} {} {} {} ",
        settings.compose,
        spec.command,
        spec.services.join(" "),
        spec.command_options.join(" ")
    )
}

/// Compile a config into an execution plan for `session`.
///
/// Windows are visited in name order; pane indices start at 1.
pub fn compile(settings: &PlanSettings, session: &str, config: &Config) -> ExecutionPlan {
    let mut steps = vec![Step::NewSession {
        session: session.to_string(),
        window: settings.window_name.clone(),
    }];

    for (pane, (name, spec)) in (1u32..).zip(&config.windows) {
        if pane > 1 {
            steps.push(Step::SplitWindow {
                session: session.to_string(),
                percent: settings.split_percent,
            });
        }
        debug!(window = %name, pane, "compiling window");
        steps.push(Step::SendKeys {
            session: session.to_string(),
            window: settings.window_name.clone(),
            pane,
            keys: compose_command(settings, spec),
        });
    }

    ExecutionPlan { steps }
}

/// Join a multi-line plan into a single `;`-separated shell statement list.
pub fn format_plan(plan: &str) -> String {
    plan.replace('\n', ";")
}

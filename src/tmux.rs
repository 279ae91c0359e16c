//! Tmux command records.
//!
//! A plan is built from [`Step`] values rather than raw strings. Each step
//! renders to exactly one `tmux` command line via its [`Display`] impl, which
//! is the only place shell text is produced.
//!
//! # Pane Indices
//!
//! Pane targets are written as `session:window.pane` with 1-based pane
//! numbers, matching the order in which panes are split off.
//!
//! # Quoting
//!
//! Session and window names are emitted bare when they are plain shell words
//! and single-quoted otherwise. The send-keys payload is always double-quoted.

use std::borrow::Cow;
use std::fmt;

/// One tmux command in an execution plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `tmux new-session -d -s <session> -n <window>`
    NewSession {
        /// Session to create.
        session: String,
        /// Name of the initial window.
        window: String,
    },
    /// `tmux split-window -h -p <percent> -t <session>`
    SplitWindow {
        /// Session whose active pane is split.
        session: String,
        /// Size of the new pane, in percent.
        percent: u8,
    },
    /// `tmux send-keys -t <session>:<window>.<pane> "<keys>" C-m`
    SendKeys {
        /// Target session.
        session: String,
        /// Target window name.
        window: String,
        /// 1-based pane index.
        pane: u32,
        /// Keystrokes to type before pressing Enter.
        keys: String,
    },
}

impl Step {
    /// Pane targeted by a `send-keys` step, if this is one.
    #[cfg(test)]
    pub fn pane(&self) -> Option<u32> {
        match self {
            Step::SendKeys { pane, .. } => Some(*pane),
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::NewSession { session, window } => {
                write!(
                    f,
                    "tmux new-session -d -s {} -n {}",
                    shell_word(session),
                    shell_word(window)
                )
            }
            Step::SplitWindow { session, percent } => {
                write!(
                    f,
                    "tmux split-window -h -p {} -t {}",
                    percent,
                    shell_word(session)
                )
            }
            Step::SendKeys {
                session,
                window,
                pane,
                keys,
            } => write!(
                f,
                "tmux send-keys -t {} \"{}\" C-m",
                shell_word(&format!("{}:{}.{}", session, window, pane)),
                escape_double_quoted(keys)
            ),
        }
    }
}

/// Single-quote `s` unless every character is safe to pass to a shell bare.
pub fn shell_word(s: &str) -> Cow<'_, str> {
    let bare = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-.:/@%+=,".contains(c));
    if bare {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("'{}'", s.replace('\'', r"'\''")))
    }
}

/// Escape characters that keep their meaning inside shell double quotes.
pub fn escape_double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

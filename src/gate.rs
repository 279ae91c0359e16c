//! Confirmation before running a plan.
//!
//! The gate shows the plan, asks once, and only on a `Y`/`y` answer formats
//! the plan and hands it to a [`ProcessRunner`]. Any other answer, including
//! an empty line or a failed read, returns `Ok(())` without side effects.

use crate::error::{PaneupError, Result};
use crate::plan::format_plan;
use crate::runner::ProcessRunner;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Source of the yes/no answer.
pub trait ConfirmationSource {
    /// Read one raw answer line.
    fn answer(&mut self) -> io::Result<String>;
}

/// Reads the answer from a buffered reader, normally standard input.
pub struct StdinConfirmation<R> {
    reader: R,
}

impl StdinConfirmation<io::StdinLock<'static>> {
    /// Answer from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> StdinConfirmation<R> {
    /// Answer from an arbitrary reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> ConfirmationSource for StdinConfirmation<R> {
    fn answer(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no answer on input",
            ));
        }
        Ok(line)
    }
}

/// True for `Y` or `y` once the line terminator is stripped.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim_end_matches(['\r', '\n']), "Y" | "y")
}

/// Show `plan`, ask for confirmation, and run it on approval.
///
/// # Errors
///
/// - [`PaneupError::ExecutionError`] if writing the prompt fails
/// - whatever the runner returns when the plan fails to execute
pub fn confirm_and_run<C, P, W>(plan: &str, source: &mut C, runner: &mut P, out: &mut W) -> Result<()>
where
    C: ConfirmationSource + ?Sized,
    P: ProcessRunner + ?Sized,
    W: Write + ?Sized,
{
    show_prompt(plan, out).map_err(|e| PaneupError::ExecutionError(e.to_string()))?;

    let answer = match source.answer() {
        Ok(answer) => answer,
        Err(e) => {
            warn!(error = %e, "could not read confirmation, not running");
            return Ok(());
        }
    };

    if !is_affirmative(&answer) {
        info!("declined, not running");
        return Ok(());
    }

    runner.run(&format_plan(plan))
}

fn show_prompt<W: Write + ?Sized>(plan: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "You are about to run this command")?;
    writeln!(out, "{}", plan)?;
    writeln!(out, "Do you want to continue?[Y/n]")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const PLAN: &str = "tmux new-session -d -s t -n Window\n\
                        tmux send-keys -t t:Window.1 \"docker compose up web -d \" C-m\n";

    #[derive(Default)]
    struct RecordingRunner {
        calls: Vec<String>,
        fail: bool,
    }

    impl ProcessRunner for RecordingRunner {
        fn run(&mut self, command: &str) -> Result<()> {
            self.calls.push(command.to_string());
            if self.fail {
                Err(PaneupError::ExecutionError("exit status: 1".into()))
            } else {
                Ok(())
            }
        }
    }

    struct FailingSource;

    impl ConfirmationSource for FailingSource {
        fn answer(&mut self) -> io::Result<String> {
            Err(io::Error::other("stream closed"))
        }
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn answering(text: &str) -> StdinConfirmation<Cursor<Vec<u8>>> {
        StdinConfirmation::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("Y\r\n"));
        assert!(is_affirmative("y"));
        assert!(!is_affirmative("yes\n"));
        assert!(!is_affirmative("n\n"));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative(" y\n"));
    }

    #[test]
    fn test_declined_never_runs() {
        let mut runner = RecordingRunner::default();
        let mut out = Vec::new();

        confirm_and_run(PLAN, &mut answering("n\n"), &mut runner, &mut out).unwrap();
        assert!(runner.calls.is_empty());

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.starts_with("You are about to run this command\n"));
        assert!(shown.contains(PLAN));
        assert!(shown.ends_with("Do you want to continue?[Y/n]\n"));
    }

    #[test]
    fn test_empty_input_declines() {
        let mut runner = RecordingRunner::default();
        confirm_and_run(PLAN, &mut answering(""), &mut runner, &mut io::sink()).unwrap();
        assert!(runner.calls.is_empty());
    }

    #[test]
    fn test_read_failure_declines() {
        let mut runner = RecordingRunner::default();
        confirm_and_run(PLAN, &mut FailingSource, &mut runner, &mut io::sink()).unwrap();
        assert!(runner.calls.is_empty());
    }

    #[test]
    fn test_confirmed_runs_formatted_plan() {
        let mut runner = RecordingRunner::default();
        confirm_and_run(PLAN, &mut answering("y\n"), &mut runner, &mut io::sink()).unwrap();

        assert_eq!(runner.calls.len(), 1);
        assert_eq!(runner.calls[0], format_plan(PLAN));
        assert!(!runner.calls[0].contains('\n'));
    }

    #[test]
    fn test_runner_failure_propagates() {
        let mut runner = RecordingRunner {
            fail: true,
            ..RecordingRunner::default()
        };
        let err = confirm_and_run(PLAN, &mut answering("Y\n"), &mut runner, &mut io::sink())
            .unwrap_err();

        assert_eq!(runner.calls.len(), 1);
        assert_eq!(err.to_string(), "error while running command: exit status: 1");
    }

    #[test]
    fn test_prompt_write_failure_is_execution_error() {
        let mut runner = RecordingRunner::default();
        let err = confirm_and_run(PLAN, &mut answering("y\n"), &mut runner, &mut ClosedOutput)
            .unwrap_err();

        assert!(runner.calls.is_empty());
        assert!(matches!(err, PaneupError::ExecutionError(_)));
        assert_eq!(err.to_string(), "error while running command: stdout closed");
    }
}

use crate::diagnostics;
use crate::error::ShellError;
use crate::exec::{run_foreground, spawn_background};
use crate::parser::parse_command_line;

const EXIT_KEYWORD: &str = "exit";

/// What a single input line amounted to, as seen by the REPL's counter and
/// loop condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank or rejected input; nothing ran, nothing is counted.
    Skipped,
    /// A command was launched (successfully or not).
    Executed,
    /// The exit keyword; the loop terminates without counting it.
    Exit,
}

pub struct Shell {
    pub last_status: i32,
}

impl Shell {
    pub fn new() -> Self {
        Self { last_status: 0 }
    }

    /// Runs one input line: parse, check for `exit`, then launch in the
    /// requested mode. Per-command failures are reported and absorbed; only
    /// a failed reap propagates, which aborts the interpreter.
    pub fn run_line(&mut self, line: &str) -> Result<LineOutcome, ShellError> {
        let cmd = match parse_command_line(line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return Ok(LineOutcome::Skipped),
            Err(e) => {
                diagnostics::print_error(&e);
                self.last_status = 1;
                return Ok(LineOutcome::Skipped);
            }
        };

        // Checked after the `&` strip, so `exit &` terminates just like
        // `exit`.
        if cmd.argv[0] == EXIT_KEYWORD {
            return Ok(LineOutcome::Exit);
        }

        let program = &cmd.argv[0];
        let args = &cmd.argv[1..];

        if cmd.background {
            match spawn_background(program, args) {
                Ok(pid) => {
                    println!("Process ID of Child: {}", pid);
                    self.last_status = 0;
                }
                Err(e) => {
                    diagnostics::print_error(&e);
                    self.last_status = launch_failure_status(&e);
                }
            }
        } else {
            match run_foreground(program, args) {
                Ok(code) => self.last_status = code,
                Err(e @ ShellError::WaitFailed { .. }) => return Err(e),
                Err(e) => {
                    diagnostics::print_error(&e);
                    self.last_status = launch_failure_status(&e);
                }
            }
        }

        Ok(LineOutcome::Executed)
    }
}

fn launch_failure_status(err: &ShellError) -> i32 {
    match err {
        ShellError::CommandNotFound { .. } => 127,
        _ => 126,
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::MAX_LINE_LEN;

    use super::{LineOutcome, Shell};

    #[test]
    fn exit_terminates_without_spawning() {
        let mut shell = Shell::new();
        assert_eq!(shell.run_line("exit").unwrap(), LineOutcome::Exit);
    }

    #[test]
    fn exit_with_background_marker_still_exits() {
        let mut shell = Shell::new();
        assert_eq!(shell.run_line("exit &").unwrap(), LineOutcome::Exit);
        assert_eq!(shell.run_line("exit&").unwrap(), LineOutcome::Exit);
    }

    #[test]
    fn blank_line_is_a_noop() {
        let mut shell = Shell::new();
        assert_eq!(shell.run_line("").unwrap(), LineOutcome::Skipped);
        assert_eq!(shell.run_line("   ").unwrap(), LineOutcome::Skipped);
        assert_eq!(shell.last_status, 0);
    }

    #[test]
    fn foreground_status_is_captured() {
        let mut shell = Shell::new();
        assert_eq!(shell.run_line("true").unwrap(), LineOutcome::Executed);
        assert_eq!(shell.last_status, 0);
        assert_eq!(shell.run_line("false").unwrap(), LineOutcome::Executed);
        assert_eq!(shell.last_status, 1);
    }

    #[test]
    fn unknown_command_is_absorbed_and_counted() {
        let mut shell = Shell::new();
        assert_eq!(
            shell.run_line("notarealcommand123").unwrap(),
            LineOutcome::Executed
        );
        assert_eq!(shell.last_status, 127);
        // The loop keeps going; the next command still runs.
        assert_eq!(shell.run_line("true").unwrap(), LineOutcome::Executed);
        assert_eq!(shell.last_status, 0);
    }

    #[test]
    fn background_launch_does_not_block() {
        let mut shell = Shell::new();
        assert_eq!(shell.run_line("sleep 0 &").unwrap(), LineOutcome::Executed);
        assert_eq!(shell.last_status, 0);
    }

    #[test]
    fn overlong_line_is_skipped() {
        let mut shell = Shell::new();
        let line = "y".repeat(MAX_LINE_LEN + 1);
        assert_eq!(shell.run_line(&line).unwrap(), LineOutcome::Skipped);
        assert_eq!(shell.last_status, 1);
    }
}

use std::env;
use std::io::ErrorKind;
use std::process::{Command, Stdio};

use crate::error::ShellError;

fn build_command(program: &str, args: &[String]) -> Command {
    let mut command = Command::new(program);
    command.args(args);
    command.envs(env::vars());
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());
    command
}

/// Spawns the program and blocks until that child terminates.
///
/// A spawn failure is recoverable and reported as `CommandNotFound` or
/// `LaunchFailed`; a failure while reaping the child is `WaitFailed`, which
/// callers treat as fatal.
pub fn run_foreground(program: &str, args: &[String]) -> Result<i32, ShellError> {
    let mut child = build_command(program, args)
        .spawn()
        .map_err(|e| spawn_error(program, e))?;
    match child.wait() {
        Ok(status) => Ok(status.code().unwrap_or(1)),
        Err(e) => Err(ShellError::WaitFailed {
            program: program.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Spawns the program without waiting and returns its pid. The child handle
/// is dropped: the process runs detached and is never reaped here.
pub fn spawn_background(program: &str, args: &[String]) -> Result<u32, ShellError> {
    let child = build_command(program, args)
        .spawn()
        .map_err(|e| spawn_error(program, e))?;
    Ok(child.id())
}

fn spawn_error(program: &str, e: std::io::Error) -> ShellError {
    match e.kind() {
        ErrorKind::NotFound => ShellError::CommandNotFound {
            program: program.to_string(),
        },
        _ => ShellError::LaunchFailed {
            program: program.to_string(),
            message: e.to_string(),
        },
    }
}

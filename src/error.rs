use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    LineEditor(String),
    LineTooLong { length: usize, limit: usize },
    CommandNotFound { program: String },
    LaunchFailed { program: String, message: String },
    WaitFailed { program: String, message: String },
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ShellError::Io(e) => write!(f, "{}", e),
            ShellError::LineEditor(e) => write!(f, "{}", e),
            ShellError::LineTooLong { length, limit } => {
                write!(f, "line too long: {} bytes (limit {})", length, limit)
            }
            ShellError::CommandNotFound { program } => write!(f, "command not found: {}", program),
            ShellError::LaunchFailed { program, message } => write!(f, "{}: {}", program, message),
            ShellError::WaitFailed { program, message } => {
                write!(f, "wait for {} failed: {}", program, message)
            }
        }
    }
}

impl From<std::io::Error> for ShellError {
    fn from(value: std::io::Error) -> Self {
        ShellError::Io(value)
    }
}

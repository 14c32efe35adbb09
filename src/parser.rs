use crate::error::ShellError;

/// Upper bound on an input line, in bytes. Longer lines are rejected with a
/// defined error rather than truncated.
pub const MAX_LINE_LEN: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub argv: Vec<String>,
    pub background: bool,
}

/// Tokenizes one input line and detects the trailing `&` background marker.
///
/// Only the literal space character separates tokens; there is no quoting,
/// so a token containing a space cannot be expressed. Returns `Ok(None)` for
/// a blank line (or a line that becomes blank once a lone `&` is stripped).
pub fn parse_command_line(input: &str) -> Result<Option<CommandLine>, ShellError> {
    if input.len() > MAX_LINE_LEN {
        return Err(ShellError::LineTooLong {
            length: input.len(),
            limit: MAX_LINE_LEN,
        });
    }

    let mut argv = tokenize(input);
    let background = strip_background_marker(&mut argv);
    if argv.is_empty() {
        return Ok(None);
    }

    Ok(Some(CommandLine { argv, background }))
}

fn tokenize(input: &str) -> Vec<String> {
    input
        .split(' ')
        .filter(|tok| !tok.is_empty())
        .map(str::to_string)
        .collect()
}

/// The marker is only recognized as the last character of the last token.
/// It is removed in place; a token emptied by the removal is dropped.
fn strip_background_marker(argv: &mut Vec<String>) -> bool {
    let Some(last) = argv.last_mut() else {
        return false;
    };
    if !last.ends_with('&') {
        return false;
    }
    last.pop();
    if last.is_empty() {
        argv.pop();
    }
    true
}

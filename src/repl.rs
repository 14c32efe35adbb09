use std::env;

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::error::ShellError;
use crate::shell::{LineOutcome, Shell};

/// Drives the read-tokenize-launch loop until `exit` or end of input, then
/// reports how many commands were run. The counter lives here, local to the
/// loop; `exit` itself and blank lines are not counted.
pub fn run_repl() -> Result<(), ShellError> {
    let mut rl = DefaultEditor::new().map_err(|e| ShellError::LineEditor(e.to_string()))?;
    let mut shell = Shell::new();
    let mut commands_run: u64 = 0;

    loop {
        let prompt_text = prompt(shell.last_status);
        match rl.readline(&prompt_text) {
            Ok(line) => match shell.run_line(&line)? {
                LineOutcome::Skipped => {}
                LineOutcome::Executed => commands_run += 1,
                LineOutcome::Exit => break,
            },
            Err(ReadlineError::Interrupted) => {
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(e) => return Err(ShellError::LineEditor(e.to_string())),
        }
    }

    println!("Number of Commands: {}", commands_run);
    Ok(())
}

fn prompt(last_status: i32) -> String {
    let user = env::var("USER").unwrap_or_else(|_| String::from("user"));
    let host = hostname().unwrap_or_else(|| String::from("host"));
    let cwd = current_dir_path().unwrap_or_else(|| String::from("?"));
    let arrow = if last_status == 0 {
        "❯".bright_green()
    } else {
        "❯".bright_red()
    };
    format!(
        "{} {} {} ",
        format!("{}@{}", user, host).bright_black(),
        cwd.truecolor(140, 180, 255),
        arrow
    )
}

fn current_dir_path() -> Option<String> {
    let cwd = env::current_dir().ok()?;
    let path = cwd.to_string_lossy().to_string();
    if let Ok(home_dir) = env::var("HOME") {
        if path == home_dir {
            return Some(String::from("~"));
        }
        if let Some(rest) = path.strip_prefix(&home_dir) {
            let mut collapsed = String::from("~");
            collapsed.push_str(rest);
            return Some(collapsed);
        }
    }
    Some(path)
}

fn hostname() -> Option<String> {
    if let Ok(h) = env::var("HOSTNAME") {
        if !h.is_empty() {
            return Some(h);
        }
    }
    match std::fs::read_to_string("/proc/sys/kernel/hostname") {
        Ok(s) => Some(s.trim().to_string()),
        Err(_) => None,
    }
}

use colored::Colorize;

use crate::error::ShellError;

/// Prints a user-facing report for a per-command error.
///
/// Launch failures keep the fixed `Error: Command Does Not Exist` line on
/// stdout; everything beyond that line goes to stderr.
pub fn print_error(err: &ShellError) {
    match err {
        ShellError::CommandNotFound { program } => {
            println!("Error: Command Does Not Exist");
            if which::which(program).is_err() {
                let suggestions = top_suggestions(program, 3);
                if !suggestions.is_empty() {
                    let list = suggestions.join(", ");
                    eprintln!(
                        "{} did you mean {}",
                        "help:".truecolor(180, 160, 255),
                        list.truecolor(200, 150, 255).bold()
                    );
                }
            }
        }
        ShellError::LaunchFailed { program, message } => {
            println!("Error: Command Does Not Exist");
            eprintln!(
                "{} {}",
                "error:".truecolor(255, 120, 180).bold(),
                format!("{}: {}", program, message).truecolor(255, 150, 200)
            );
        }
        other => {
            eprintln!(
                "{} {}",
                "error:".truecolor(255, 120, 180).bold(),
                other.to_string().truecolor(255, 150, 200)
            );
        }
    }
}

fn top_suggestions(input: &str, max_n: usize) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    if let Ok(path_var) = std::env::var("PATH") {
        for dir in path_var.split(':') {
            if let Ok(entries) = std::fs::read_dir(dir) {
                for entry in entries.flatten() {
                    if let Some(name) = entry.file_name().to_str() {
                        candidates.push(name.to_string());
                    }
                }
            }
        }
    }
    candidates.sort();
    candidates.dedup();

    let mut scored: Vec<(usize, String)> = candidates
        .into_iter()
        .map(|c| (edit_distance(input, &c), c))
        .filter(|(d, _)| *d <= 2)
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
    scored.into_iter().take(max_n).map(|(_, s)| s).collect()
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_chars.len()]
}

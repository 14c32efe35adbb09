mod diagnostics;
mod error;
mod exec;
mod parser;
mod repl;
mod shell;

use crate::repl::run_repl;

fn main() {
    if let Err(err) = run_repl() {
        eprintln!("msh: {}", err);
        std::process::exit(1);
    }
}

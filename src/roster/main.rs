//! # Roster CLI
//!
//! The binary is intentionally thin: the interactive menu lives in `src/roster/cli/`,
//! and this file only invokes `cli::run()` and handles process termination.
//!
//! Everything the menu does to the roster goes through the library's command layer
//! (`roster::commands`), which in turn drives the Record Store
//! (`roster::service::StudentService`). The CLI owns all terminal concerns:
//! argument parsing, logging setup, colors, prompts and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

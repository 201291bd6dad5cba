//! # CLI Behavior
//!
//! This is **one possible UI client** for roster: a numbered text menu read from
//! stdin. It is the only place that knows about terminal I/O, exit codes, and output
//! formatting.
//!
//! ## The Menu
//!
//! ```text
//!
//! === Student Management ===
//! 1 - Add Student
//! 2 - Update Student
//! 3 - Delete Student
//! 4 - Show All Students
//! 5 - Exit
//! Choose an option:
//! ```
//!
//! Numeric fields (age, id) are re-prompted with `Please enter a valid number: `
//! until they parse. Closing stdin ends the session like choosing Exit, minus the
//! goodbye line.
//!
//! ## Module Structure
//!
//! - `commands`: Process wiring: config, logging, colors, shell startup
//! - `menu`: Menu choices and their labels
//! - `render`: Output formatting (menu, messages, student listing)
//! - `setup`: Argument parsing via clap
//! - `shell`: The interactive loop

mod commands;
mod menu;
mod render;
pub mod setup;
mod shell;

pub use commands::run;

/// Strip leading and trailing control characters and ASCII spaces. Other
/// Unicode whitespace is kept as typed.
pub(crate) fn trim_input(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

//! # Roster Architecture
//!
//! Roster is a small **UI-agnostic student roster library** with an interactive
//! terminal menu built on top of it. The menu is one client of the library, not the
//! library itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, integer re-prompting                 │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per menu action                               │
//! │  - Returns structured `CmdResult` values with messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (service.rs)                                  │
//! │  - Owns the records and the next-identifier counter         │
//! │  - create / update / delete / list_all / find_by_id         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `DataStore` trait, `InMemoryStore` implementation        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `commands` inward, code takes plain Rust arguments and returns plain Rust
//! values. "Not found" is a `bool` or an `Option`, never an error. Nothing below the
//! CLI layer writes to stdout or reads from stdin.
//!
//! ## Module Overview
//!
//! - [`service`]: The Record Store (`StudentService`)
//! - [`commands`]: Menu actions returning `CmdResult`
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: The `Student` record
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types for the I/O edges
//! - `cli`: Menu loop, argument parsing and rendering for the binary (not part of the lib API)

pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod store;

//! # Command Layer
//!
//! One submodule per menu action. Each `run` function calls the Record Store and
//! packages the outcome as a [`CmdResult`]: the students touched, the students to
//! display, and leveled messages. The CLI decides how any of it looks.
//!
//! Commands never prompt, print, or exit. "Student not found." is a warning
//! message in the result, not an error.
//!
//! ## Command Modules
//!
//! - [`add`]: Create a student
//! - [`update`]: Rename / re-age a student
//! - [`delete`]: Remove a student
//! - [`list`]: Snapshot of the whole roster

use crate::model::Student;

pub mod add;
pub mod delete;
pub mod list;
pub mod update;

pub const NOT_FOUND: &str = "Student not found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_students: Vec<Student>,
    pub listed_students: Vec<Student>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_students(mut self, students: Vec<Student>) -> Self {
        self.listed_students = students;
        self
    }
}

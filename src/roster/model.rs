//! # Domain Model
//!
//! A [`Student`] is the `{id, name, age}` tuple held by the Record Store.
//!
//! - `id` is assigned by [`crate::service::StudentService`] and never changes afterwards.
//! - `name` and `age` are stored exactly as given: empty names, negative ages and
//!   non-ASCII text are all valid.
//!
//! The `Display` form, `Student{id=1, name='Alice', age=22}`, is the text contract
//! of the interactive menu and must stay byte-for-byte stable.

use std::fmt;

pub type StudentId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i32,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student{{id={}, name='{}', age={}}}",
            self.id, self.name, self.age
        )
    }
}

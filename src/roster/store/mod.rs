//! # Storage Layer
//!
//! The [`DataStore`] trait is the raw record container behind the Record Store.
//! It holds students in insertion order and answers lookups by id; it does not
//! assign identifiers or enforce any invariant beyond ordering. That is the job of
//! [`crate::service::StudentService`].
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a plain vector, the only backend. Records live for
//!   the lifetime of the process.
//!
//! Every operation is total: a missing id is `None`, never an error.

use crate::model::{Student, StudentId};

pub mod memory;

/// Abstract interface for student storage.
pub trait DataStore {
    /// Append a record at the end of the insertion order
    fn insert(&mut self, student: Student);

    /// Copy of the record with the given id
    fn get(&self, id: StudentId) -> Option<Student>;

    /// Mutable access to the record with the given id, in place
    fn get_mut(&mut self, id: StudentId) -> Option<&mut Student>;

    /// Remove the record with the given id, returning it
    fn remove(&mut self, id: StudentId) -> Option<Student>;

    /// Snapshot of every record in insertion order
    fn list(&self) -> Vec<Student>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! # Record Store
//!
//! [`StudentService`] is the single owner of the roster. It assigns identifiers and
//! performs every create/read/update/delete; nothing else holds a handle into its
//! records. Callers always receive owned copies.
//!
//! ## Identifiers
//!
//! Ids start at 1 and grow by one for each successful [`StudentService::create`].
//! They are never reused, even after the student holding one is deleted. The
//! counter wraps past `i32::MAX` to `i32::MIN`, like a 32-bit int.
//!
//! ## Not Found
//!
//! Missing ids are a normal outcome: `update` and `delete` return `false`,
//! `find_by_id` returns `None`. No operation here can fail.
//!
//! ## Generic Over DataStore
//!
//! `StudentService<S: DataStore>` defaults to [`InMemoryStore`]. The service is
//! single-threaded; sharing it across threads would need one lock around the
//! store and the counter together.

use crate::model::{Student, StudentId};
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;
use tracing::debug;

const FIRST_ID: StudentId = 1;

#[derive(Debug)]
pub struct StudentService<S: DataStore = InMemoryStore> {
    store: S,
    next_id: StudentId,
}

impl StudentService {
    pub fn new() -> Self {
        Self::with_store(InMemoryStore::new())
    }
}

impl Default for StudentService {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DataStore> StudentService<S> {
    /// Wrap an existing store. The counter resumes after the highest id already
    /// present so new records never collide with old ones.
    pub fn with_store(store: S) -> Self {
        let next_id = store
            .list()
            .iter()
            .map(|s| s.id)
            .max()
            .map_or(FIRST_ID, |max| max.max(0).wrapping_add(1));
        Self { store, next_id }
    }

    pub fn create(&mut self, name: impl Into<String>, age: i32) -> Student {
        let student = Student::new(self.next_id, name, age);
        self.next_id = self.next_id.wrapping_add(1);
        self.store.insert(student.clone());
        debug!(id = student.id, "student created");
        student
    }

    /// Overwrite name and age of the student with `id`. Position and id are kept.
    pub fn update(&mut self, id: StudentId, new_name: impl Into<String>, new_age: i32) -> bool {
        match self.store.get_mut(id) {
            Some(student) => {
                student.name = new_name.into();
                student.age = new_age;
                debug!(id, "student updated");
                true
            }
            None => {
                debug!(id, "update skipped, student not found");
                false
            }
        }
    }

    pub fn delete(&mut self, id: StudentId) -> bool {
        let removed = self.store.remove(id).is_some();
        debug!(id, removed, "student delete");
        removed
    }

    /// Independent copy of every record in insertion order.
    pub fn list_all(&self) -> Vec<Student> {
        self.store.list()
    }

    pub fn find_by_id(&self, id: StudentId) -> Option<Student> {
        self.store.get(id)
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> StudentId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct ServiceFixture {
        pub service: StudentService,
    }

    impl Default for ServiceFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ServiceFixture {
        pub fn new() -> Self {
            Self {
                service: StudentService::new(),
            }
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Student {}", i + 1);
                self.service.create(name, 18 + i as i32);
            }
            self
        }

        pub fn with_student(mut self, name: &str, age: i32) -> Self {
            self.service.create(name, age);
            self
        }
    }
}

use super::DataStore;
use crate::model::{Student, StudentId};

/// In-memory storage. Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    students: Vec<Student>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: StudentId) -> Option<usize> {
        self.students.iter().position(|s| s.id == id)
    }
}

impl DataStore for InMemoryStore {
    fn insert(&mut self, student: Student) {
        self.students.push(student);
    }

    fn get(&self, id: StudentId) -> Option<Student> {
        self.students.iter().find(|s| s.id == id).cloned()
    }

    fn get_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    fn remove(&mut self, id: StudentId) -> Option<Student> {
        // `Vec::remove` keeps the relative order of the remaining records
        self.position(id).map(|idx| self.students.remove(idx))
    }

    fn list(&self) -> Vec<Student> {
        self.students.clone()
    }

    fn len(&self) -> usize {
        self.students.len()
    }
}

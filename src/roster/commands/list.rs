use crate::commands::{CmdMessage, CmdResult};
use crate::service::StudentService;
use crate::store::DataStore;

pub fn run<S: DataStore>(service: &StudentService<S>) -> CmdResult {
    let students = service.list_all();
    let mut result = CmdResult::default();
    if students.is_empty() {
        result.add_message(CmdMessage::info("No students found."));
    }
    result.with_listed_students(students)
}

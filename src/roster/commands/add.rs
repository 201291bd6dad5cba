use crate::commands::{CmdMessage, CmdResult};
use crate::service::StudentService;
use crate::store::DataStore;

pub fn run<S: DataStore>(service: &mut StudentService<S>, name: String, age: i32) -> CmdResult {
    let student = service.create(name, age);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added successfully: {}",
        student
    )));
    result.affected_students.push(student);
    result
}

use crate::commands::{CmdMessage, CmdResult, NOT_FOUND};
use crate::model::StudentId;
use crate::service::StudentService;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    service: &mut StudentService<S>,
    id: StudentId,
    new_name: String,
    new_age: i32,
) -> CmdResult {
    let mut result = CmdResult::default();

    if !service.update(id, new_name, new_age) {
        result.add_message(CmdMessage::warning(NOT_FOUND));
        return result;
    }

    result.add_message(CmdMessage::success("Student updated successfully."));
    if let Some(student) = service.find_by_id(id) {
        result.affected_students.push(student);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Student;
    use crate::service::fixtures::ServiceFixture;

    #[test]
    fn updates_existing_student() {
        let mut service = ServiceFixture::new().with_student("Bob", 25).service;
        let result = run(&mut service, 1, "Bob Updated".into(), 26);

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Student updated successfully.");
        assert_eq!(
            result.affected_students,
            vec![Student::new(1, "Bob Updated", 26)]
        );
        assert_eq!(
            service.find_by_id(1),
            Some(Student::new(1, "Bob Updated", 26))
        );
    }

    #[test]
    fn missing_student_is_a_warning() {
        let mut service = ServiceFixture::new().with_student("Alice", 22).service;
        let result = run(&mut service, 999, "Name".into(), 25);

        assert_eq!(result.messages, vec![CmdMessage::warning(NOT_FOUND)]);
        assert!(result.affected_students.is_empty());
        assert_eq!(service.list_all(), vec![Student::new(1, "Alice", 22)]);
    }
}

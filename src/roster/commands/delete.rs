use crate::commands::{CmdMessage, CmdResult, NOT_FOUND};
use crate::model::StudentId;
use crate::service::StudentService;
use crate::store::DataStore;

pub fn run<S: DataStore>(service: &mut StudentService<S>, id: StudentId) -> CmdResult {
    let mut result = CmdResult::default();
    let snapshot = service.find_by_id(id);

    if !service.delete(id) {
        result.add_message(CmdMessage::warning(NOT_FOUND));
        return result;
    }

    result.add_message(CmdMessage::success("Student deleted successfully."));
    result.affected_students.extend(snapshot);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::model::Student;
    use crate::service::fixtures::ServiceFixture;

    #[test]
    fn deletes_existing_student() {
        let mut service = ServiceFixture::new()
            .with_student("Alice", 22)
            .with_student("Bob", 25)
            .service;

        let result = run(&mut service, 1);

        assert_eq!(
            result.messages,
            vec![CmdMessage::success("Student deleted successfully.")]
        );
        assert_eq!(result.affected_students, vec![Student::new(1, "Alice", 22)]);

        let remaining = list::run(&service).listed_students;
        assert_eq!(remaining, vec![Student::new(2, "Bob", 25)]);
    }

    #[test]
    fn second_delete_reports_not_found() {
        let mut service = ServiceFixture::new().with_student("To Delete", 25).service;
        run(&mut service, 1);
        let again = run(&mut service, 1);

        assert_eq!(again.messages, vec![CmdMessage::warning(NOT_FOUND)]);
        assert!(again.affected_students.is_empty());
        assert!(service.is_empty());
    }
}

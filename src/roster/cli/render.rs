use super::menu::MenuChoice;
use colored::Colorize;
use roster::commands::{CmdMessage, MessageLevel};
use roster::model::Student;
use std::io::{self, Write};

const MENU_TITLE: &str = "=== Student Management ===";
const LIST_TITLE: &str = "=== All Students ===";

pub(super) fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", MENU_TITLE.bold())?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}", choice)?;
    }
    Ok(())
}

/// Write a prompt without a trailing newline and flush so it shows before input is read
pub(super) fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Listing block. Writes nothing for an empty roster, the caller's messages cover it.
pub(super) fn render_students<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    if students.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{}", LIST_TITLE.bold())?;
    for student in students {
        writeln!(out, "{}", student)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn menu_lists_every_option_in_order() {
        let text = render(|out| render_menu(out));
        assert!(text.starts_with('\n'));
        assert!(text.contains(MENU_TITLE));

        let add = text.find("1 - Add Student").unwrap();
        let update = text.find("2 - Update Student").unwrap();
        let delete = text.find("3 - Delete Student").unwrap();
        let show = text.find("4 - Show All Students").unwrap();
        let exit = text.find("5 - Exit").unwrap();
        assert!(add < update && update < delete && delete < show && show < exit);
    }

    #[test]
    fn prompt_has_no_newline() {
        let text = render(|out| prompt(out, "Name: "));
        assert_eq!(text, "Name: ");
    }

    #[test]
    fn messages_one_per_line() {
        let text = render(|out| {
            print_messages(
                out,
                &[
                    CmdMessage::success("Student updated successfully."),
                    CmdMessage::warning("Student not found."),
                ],
            )
        });
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Student updated successfully."));
        assert!(lines[1].contains("Student not found."));
    }

    #[test]
    fn students_use_display_format() {
        let students = vec![
            Student::new(1, "Alice", 22),
            Student::new(2, "Bob Updated", 25),
        ];
        let text = render(|out| render_students(out, &students));

        assert!(text.starts_with('\n'));
        assert!(text.contains(LIST_TITLE));
        assert!(text.ends_with(
            "Student{id=1, name='Alice', age=22}\nStudent{id=2, name='Bob Updated', age=25}\n"
        ));
    }

    #[test]
    fn empty_listing_writes_nothing() {
        let text = render(|out| render_students(out, &[]));
        assert!(text.is_empty());
    }
}

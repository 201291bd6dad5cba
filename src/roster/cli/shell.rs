use super::menu::MenuChoice;
use super::render::{print_messages, prompt, render_menu, render_students};
use super::trim_input;
use roster::commands::{self, CmdMessage, CmdResult};
use roster::error::{Result, RosterError};
use roster::service::StudentService;
use std::io::{BufRead, Write};
use tracing::debug;

const INVALID_NUMBER: &str = "Please enter a valid number: ";

enum Flow {
    Continue,
    Exit,
}

/// The interactive menu loop. Owns the roster for the whole session and reads
/// line-oriented input from any `BufRead`, so tests can script a session.
pub struct Shell<R, W> {
    input: R,
    output: W,
    service: StudentService,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, service: StudentService) -> Self {
        Self {
            input,
            output,
            service,
        }
    }

    /// Run until the user picks Exit or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(RosterError::InputClosed) => {
                    debug!("input closed, ending session");
                    writeln!(self.output)?;
                    self.output.flush()?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        debug!(
            students = self.service.len(),
            next_id = self.service.next_id(),
            "roster discarded"
        );
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        render_menu(&mut self.output)?;
        let choice = self.ask_line("Choose an option: ")?;

        let result = match choice.parse::<MenuChoice>() {
            Ok(MenuChoice::Add) => self.add_student()?,
            Ok(MenuChoice::Update) => self.update_student()?,
            Ok(MenuChoice::Delete) => self.delete_student()?,
            Ok(MenuChoice::ShowAll) => commands::list::run(&self.service),
            Ok(MenuChoice::Exit) => {
                print_messages(&mut self.output, &[CmdMessage::info("Exiting. Goodbye.")])?;
                return Ok(Flow::Exit);
            }
            Err(e) => {
                debug!(error = %e, "menu choice rejected");
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error("Invalid option."));
                result
            }
        };

        self.show(&result)?;
        Ok(Flow::Continue)
    }

    fn add_student(&mut self) -> Result<CmdResult> {
        let name = self.ask_line("Name: ")?;
        let age = self.ask_int("Age: ")?;
        Ok(commands::add::run(&mut self.service, name, age))
    }

    fn update_student(&mut self) -> Result<CmdResult> {
        let id = self.ask_int("Student ID to update: ")?;
        let name = self.ask_line("New Name: ")?;
        let age = self.ask_int("New Age: ")?;
        Ok(commands::update::run(&mut self.service, id, name, age))
    }

    fn delete_student(&mut self) -> Result<CmdResult> {
        let id = self.ask_int("Student ID to delete: ")?;
        Ok(commands::delete::run(&mut self.service, id))
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        render_students(&mut self.output, &result.listed_students)?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn ask_line(&mut self, text: &str) -> Result<String> {
        prompt(&mut self.output, text)?;
        self.read_line()
    }

    fn ask_int(&mut self, text: &str) -> Result<i32> {
        prompt(&mut self.output, text)?;
        self.read_int()
    }

    /// Next input line, trimmed. Invalid UTF-8 becomes U+FFFD.
    fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(RosterError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(trim_input(&line).to_string())
    }

    /// Re-prompts until a line parses as an `i32`.
    fn read_int(&mut self) -> Result<i32> {
        loop {
            let line = self.read_line()?;
            match line.parse::<i32>() {
                Ok(n) => return Ok(n),
                Err(e) => {
                    debug!(input = %line, error = %e, "numeric input rejected");
                    prompt(&mut self.output, INVALID_NUMBER)?;
                }
            }
        }
    }

    #[cfg(test)]
    fn service(&self) -> &StudentService {
        &self.service
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.output
    }
}

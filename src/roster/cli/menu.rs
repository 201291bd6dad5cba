use super::trim_input;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Delete,
    ShowAll,
    Exit,
}

impl MenuChoice {
    /// Display order of the menu
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::ShowAll,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::Add => "1",
            MenuChoice::Update => "2",
            MenuChoice::Delete => "3",
            MenuChoice::ShowAll => "4",
            MenuChoice::Exit => "5",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Student",
            MenuChoice::Update => "Update Student",
            MenuChoice::Delete => "Delete Student",
            MenuChoice::ShowAll => "Show All Students",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.key(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = trim_input(s);
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.key() == s)
            .ok_or_else(|| format!("Unknown menu option: {}", s))
    }
}

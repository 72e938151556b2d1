//! LinkHarvest - Commands module
//!
//! User commands and their handlers

pub mod handlers;

pub use handlers::{copy_all_links, get_link_count, get_links, reset_links, CommandResult};

/// Command typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Copy all links to the clipboard
    CopyAll,
    /// Clear accumulated links
    Reset,
    /// Show accumulated links
    List,
    /// Show the number of accumulated links
    Count,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Case and surrounding whitespace are ignored.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "copy" | "c" => Some(Command::CopyAll),
            "reset" | "r" => Some(Command::Reset),
            "list" | "l" => Some(Command::List),
            "count" | "n" => Some(Command::Count),
            "help" | "h" | "?" => Some(Command::Help),
            "quit" | "q" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    /// Non-blank line that is not a command
    Unknown(String),
}

impl Input {
    /// Classify a line; blank lines yield `None`
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match Command::parse(trimmed) {
            Some(cmd) => Input::Command(cmd),
            None => Input::Unknown(trimmed.to_string()),
        })
    }
}

//! Typed command parsing for the terminal front end.
//!
//! # Invariants
//! - Parsing never touches the model; a parse error means no mutation.
//! - Row numbers are 1-based positions in the rendered display order.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// One user intent read from a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Put text into the input box and submit it.
    Add(String),
    /// Flip completion of the task at this row.
    Toggle(usize),
    /// Delete the task at this row.
    Remove(usize),
    /// Flip the sort-completed-to-bottom mode.
    ToggleSort,
    /// Print the command list.
    Help,
    /// Leave the session.
    Quit,
    /// Blank line; re-render only.
    Refresh,
}

/// Why a line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First word is not a known command or alias.
    UnknownVerb(String),
    /// Row-taking command given without a row; carries the canonical verb.
    MissingRow(&'static str),
    /// Row argument is not a positive integer.
    InvalidRow(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVerb(verb) => write!(f, "unknown command `{verb}`; type `help`"),
            Self::MissingRow(verb) => write!(f, "`{verb}` needs a row number"),
            Self::InvalidRow(value) => {
                write!(f, "`{value}` is not a row number (rows start at 1)")
            }
        }
    }
}

impl Error for CommandError {}

/// Parses one input line.
///
/// The `add` argument is trimmed but otherwise passed through unchecked, so
/// `add` with no text still parses and ends up as a no-op add in the model.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Refresh);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "add" | "a" => Ok(Command::Add(rest.to_string())),
        "toggle" | "t" | "x" => parse_row("toggle", rest).map(Command::Toggle),
        "remove" | "rm" | "d" => parse_row("remove", rest).map(Command::Remove),
        "sort" | "s" => Ok(Command::ToggleSort),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => Err(CommandError::UnknownVerb(verb.to_string())),
    }
}

fn parse_row(verb: &'static str, value: &str) -> Result<usize, CommandError> {
    if value.is_empty() {
        return Err(CommandError::MissingRow(verb));
    }
    match value.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row),
        _ => Err(CommandError::InvalidRow(value.to_string())),
    }
}

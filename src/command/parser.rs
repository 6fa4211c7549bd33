//! Parse a line of console input into a command

use std::str::FromStr;

use crate::core::error::InvalidCommand;

/// Commands understood by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    PrintDestroyed,
    PrintRemaining,
}

impl FromStr for Command {
    type Err = InvalidCommand;

    /// Surrounding whitespace is ignored and matching is case-insensitive.
    /// Inner whitespace must be a single space.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("exit") {
            Ok(Command::Exit)
        } else if input.eq_ignore_ascii_case("print destroyed ships") {
            Ok(Command::PrintDestroyed)
        } else if input.eq_ignore_ascii_case("print remaining ships") {
            Ok(Command::PrintRemaining)
        } else {
            Err(InvalidCommand(input.to_string()))
        }
    }
}

//! Interactive report console
//!
//! Reads one command per line and answers from an already computed
//! [`Schedule`]. Nothing here can modify the schedule.

use std::io::{BufRead, Write};

use crate::command::parser::Command;
use crate::fleet::report::{destroyed_report, remaining_report};
use crate::fleet::scheduler::Schedule;

pub const HELP_TEXT: &str = "Unknown command. Use:\n\
- 'print destroyed ships' to show destroyed ships\n\
- 'print remaining ships' to show surviving ships\n\
- 'exit' to quit";

/// Line-oriented console over any reader/writer pair
pub struct Console<'a, R, W> {
    schedule: &'a Schedule,
    input: R,
    output: W,
    prompt: Option<String>,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(schedule: &'a Schedule, input: R, output: W) -> Self {
        Self {
            schedule,
            input,
            output,
            prompt: None,
        }
    }

    pub fn with_prompt(mut self, prompt: Option<String>) -> Self {
        self.prompt = prompt;
        self
    }

    /// Run until `exit` or end of input
    pub fn run(&mut self) -> std::io::Result<()> {
        let mut line = String::new();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.output, "{}", prompt)?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("end of input, leaving console");
                break;
            }

            match line.parse::<Command>() {
                Ok(Command::Exit) => break,
                Ok(command) => self.dispatch(command)?,
                Err(invalid) => {
                    tracing::debug!(%invalid, "unrecognised command");
                    writeln!(self.output, "{}", HELP_TEXT)?;
                }
            }
        }
        self.output.flush()
    }

    /// Write the response to a single report command
    pub fn dispatch(&mut self, command: Command) -> std::io::Result<()> {
        let targets = self.schedule.targets();
        match command {
            Command::PrintDestroyed => writeln!(self.output, "{}", destroyed_report(targets)),
            Command::PrintRemaining => writeln!(self.output, "{}", remaining_report(targets)),
            Command::Exit => Ok(()),
        }
    }
}

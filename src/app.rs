//! Load, schedule and serve reports for one fleet document
//!
//! Kept apart from `main` so the whole command-line flow runs against
//! in-memory readers and writers.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use crate::command::Console;
use crate::fleet::{load_fleet_file, schedule};

pub const USAGE: &str = "Usage: strike-planner <input.xml>";

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// No input document was given; usage was printed
    Usage,
    /// The document could not be loaded; nothing was scheduled
    LoadFailed,
    /// The console ran until `exit` or end of input
    Completed,
}

impl RunStatus {
    pub fn is_success(self) -> bool {
        !matches!(self, RunStatus::LoadFailed)
    }

    pub fn exit_code(self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Run the planner against `input`, answering commands read from `stdin`
pub fn run<R: BufRead, W: Write, E: Write>(
    input: Option<&Path>,
    prompt: Option<String>,
    stdin: R,
    mut stdout: W,
    mut stderr: E,
) -> io::Result<RunStatus> {
    let Some(input) = input else {
        writeln!(stdout, "{}", USAGE)?;
        return Ok(RunStatus::Usage);
    };

    let fleet = match load_fleet_file(input) {
        Ok(fleet) => fleet,
        Err(e) => {
            tracing::error!(path = %input.display(), error = %e, "failed to load fleet");
            writeln!(stderr, "Error reading XML: {}", e)?;
            return Ok(RunStatus::LoadFailed);
        }
    };

    tracing::info!(path = %input.display(), "scheduling strikes");
    let schedule = schedule(fleet.units, fleet.targets);

    Console::new(&schedule, stdin, stdout)
        .with_prompt(prompt)
        .run()?;

    Ok(RunStatus::Completed)
}

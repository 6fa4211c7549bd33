//! Read-only command loop over a finished schedule
//!
//! Input line -> Command (parser) -> report (console)

pub mod console;
pub mod parser;

pub use console::{Console, HELP_TEXT};
pub use parser::Command;

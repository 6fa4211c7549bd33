pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{InvalidCommand, InvalidValue, LoadError, Result, StrikeError};
pub use types::{TargetId, Tick, UnitId};

use thiserror::Error;

use crate::core::types::TargetId;

/// Errors raised while reading a fleet document
///
/// Any of these aborts the run before scheduling starts.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    XmlError(#[from] roxmltree::Error),

    #[error("<{parent}> is missing required element <{element}>")]
    MissingElement {
        parent: &'static str,
        element: &'static str,
    },

    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("For input string: \"{value}\" ({field} is not an integer)")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: String },

    #[error("Duplicate ship id: {0}")]
    DuplicateTarget(TargetId),

    #[error(transparent)]
    InvalidValue(#[from] InvalidValue),
}

/// A unit or target built with a zero rate, strength or time limit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} must be positive, got {value}")]
pub struct InvalidValue {
    pub field: &'static str,
    pub value: u64,
}

#[derive(Error, Debug)]
pub enum StrikeError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Input on the command loop that matched no known command
///
/// Not fatal: the loop prints usage help and keeps reading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown command: {0:?}")]
pub struct InvalidCommand(pub String);

pub type Result<T> = std::result::Result<T, StrikeError>;

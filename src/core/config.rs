//! Runtime configuration for the planner binary
//!
//! Everything here is optional. Without a config file the binary behaves
//! like a plain read-eval loop with no prompt and `info` level logging.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::error::{Result, StrikeError};

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "strike_planner=info";

/// Configuration for the command-line front end
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset
    ///
    /// Logs go to stderr, so raising this to `debug` prints one line per
    /// engagement without disturbing report output.
    pub log_filter: String,

    /// Text printed (without newline) before each command is read
    ///
    /// `None` keeps the loop silent, which is what scripted callers expect.
    pub prompt: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            prompt: None,
        }
    }
}

impl AppConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(StrikeError::Config("log_filter must not be empty".into()));
        }

        if let Some(prompt) = &self.prompt {
            if prompt.contains('\n') {
                return Err(StrikeError::Config(
                    "prompt must fit on a single line".into(),
                ));
            }
        }

        Ok(())
    }
}

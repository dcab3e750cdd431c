//! Calculator configuration

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration document
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Calculator configuration
///
/// Every field has a default, so a config document only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Text shown in place of a result when dividing by zero
    pub error_text: String,
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Show the key help line in the terminal front end
    pub show_help: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            error_text: Self::DEFAULT_ERROR_TEXT.to_string(),
            log_filter: "warn".to_string(),
            show_help: true,
        }
    }
}

impl CalculatorConfig {
    /// Message shown for a division by zero unless overridden
    pub const DEFAULT_ERROR_TEXT: &'static str = "Cannot divide by zero";

    /// Environment variable naming a JSON config file
    pub const PATH_ENV: &'static str = "KEYPAD_CALC_CONFIG";

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the division-by-zero text
    #[must_use]
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Set the fallback log filter
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set whether the help line is shown
    #[must_use]
    pub const fn with_show_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Parses a JSON document
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes to pretty JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Loads from the file named by [`Self::PATH_ENV`], or defaults when unset
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var_os(Self::PATH_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

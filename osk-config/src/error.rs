//! Unified error types for osk-config
//!
//! Every failure of loading a key set or the resolve settings ends up here, with the file and
//! the offending field where they are known.

use std::fmt;

use thiserror::Error;

/// Format of a key set document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "JSON"),
            DocumentFormat::Toml => write!(f, "TOML"),
        }
    }
}

/// Unified error type for osk-config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read key set file '{path}': {message}")]
    FileRead { path: String, message: String },
    /// Decoding error, the message names the offending field
    #[error("Failed to parse {format} key set '{path}': {message}")]
    Parse {
        path: String,
        format: DocumentFormat,
        message: String,
    },
    /// The file extension doesn't tell the document format
    #[error("Unsupported key set file '{path}', expected a `.json` or `.toml` file")]
    UnsupportedFormat { path: String },
    /// Validation error with context
    #[error("Validation error in '{field}': {message}")]
    Validation { field: String, message: String },
    /// Resolve settings couldn't be loaded or merged
    #[error("Failed to load settings: {0}")]
    Settings(#[from] config::ConfigError),
}

impl ConfigError {
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

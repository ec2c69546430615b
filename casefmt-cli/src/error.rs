//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
///
/// Only the non-interactive surfaces can fail; the interactive session always
/// degrades to passthrough instead of erroring.
#[derive(Debug)]
pub enum CliError {
    /// Configuration error
    ConfigError(String),
    /// Input source could not be read
    InputError(String),
    /// Unknown format name
    UnknownFormat(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InputError(msg) => write!(f, "Input error: {msg}"),
            CliError::UnknownFormat(name) => write!(f, "Unknown format: {name}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

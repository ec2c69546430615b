//! Error types for strategy selection

use thiserror::Error;

/// Error type for selection operations
///
/// Formatting itself is infallible; the only failure mode is naming a format
/// that does not exist.
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown format name
    #[error("Unknown format: {0} (expected one of: upper, lower, title)")]
    UnknownFormat(String),
}

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_format_display() {
        let error = Error::UnknownFormat("camel".to_string());
        assert_eq!(
            error.to_string(),
            "Unknown format: camel (expected one of: upper, lower, title)"
        );
    }

    #[test]
    fn error_trait_implementation() {
        let error = Error::UnknownFormat("snake".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("UnknownFormat"));
        assert!(debug_str.contains("snake"));
    }
}

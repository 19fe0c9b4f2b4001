//! Error handling module for the staxt CLI.
//!
//! Tokenizing itself never fails; everything here comes from the
//! surroundings: reading input, loading configuration, and writing output.

use stax_util::DiagnosticError;
use thiserror::Error;

/// Main error type for the staxt CLI application.
#[derive(Error, Debug)]
pub enum StaxtError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when a command-line or configuration value is invalid.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a diagnostic code cannot be parsed.
    #[error("Diagnostic error: {0}")]
    Diagnostic(#[from] DiagnosticError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using StaxtError.
pub type Result<T> = std::result::Result<T, StaxtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = StaxtError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = StaxtError::FileOperation("permission denied".to_string());
        assert_eq!(err.to_string(), "File operation failed: permission denied");
    }

    #[test]
    fn test_validation_error_display() {
        let err = StaxtError::Validation("unknown format".to_string());
        assert_eq!(err.to_string(), "Validation error: unknown format");
    }

    #[test]
    fn test_diagnostic_error_conversion() {
        let parse_err = "Q9".parse::<stax_util::DiagnosticCode>().unwrap_err();
        let err: StaxtError = parse_err.into();
        assert!(matches!(err, StaxtError::Diagnostic(_)));
        assert!(err.to_string().contains("Q9"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StaxtError = io_err.into();
        assert!(matches!(err, StaxtError::Io(_)));
    }
}

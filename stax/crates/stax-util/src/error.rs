//! Core error types for stax-util
//!
//! Nothing in the lexing pipeline fails on input; the errors here cover
//! values that arrive from outside, such as diagnostic codes named in a
//! configuration file.

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// Text that does not name a diagnostic code
    #[error("Invalid diagnostic code: {0:?}")]
    InvalidCode(String),

    /// Failed to format diagnostic
    #[error("Failed to format diagnostic: {0}")]
    FormatFailed(String),
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_code_display() {
        let err = DiagnosticError::InvalidCode("X12".to_string());
        assert_eq!(err.to_string(), "Invalid diagnostic code: \"X12\"");
    }

    #[test]
    fn test_format_failed_display() {
        let err = DiagnosticError::FormatFailed("snippet out of range".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to format diagnostic: snippet out of range"
        );
    }
}

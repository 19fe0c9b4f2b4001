//! Diagnostic codes.
//!
//! Codes are a one-letter prefix plus a four-digit number (`W1001`).
//! The 1xxx range belongs to the lexer.

use std::fmt;
use std::str::FromStr;

use crate::error::DiagnosticError;

/// Identifier attached to a diagnostic so tools and users can refer to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for errors, "W" for warnings)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use stax_util::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("W", 1001);
    /// assert_eq!(code, DiagnosticCode::W_LEXER_UNRECOGNIZED_CHAR);
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g. "W1001")
    ///
    /// # Examples
    ///
    /// ```
    /// use stax_util::DiagnosticCode;
    ///
    /// assert_eq!(DiagnosticCode::W_LEXER_INCOMPLETE_ARROW.as_str(), "W1002");
    /// ```
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// W1001: Lexer - character with no token class, skipped
    pub const W_LEXER_UNRECOGNIZED_CHAR: Self = Self::new("W", 1001);
    /// W1002: Lexer - `<` not followed by `-`, dropped
    pub const W_LEXER_INCOMPLETE_ARROW: Self = Self::new("W", 1002);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl FromStr for DiagnosticCode {
    type Err = DiagnosticError;

    /// Parses `"E0042"`/`"W1001"` style text. Prefixes are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DiagnosticError::InvalidCode(s.to_string());
        let trimmed = s.trim();

        let mut chars = trimmed.chars();
        let prefix = match chars.next() {
            Some('E') | Some('e') => "E",
            Some('W') | Some('w') => "W",
            _ => return Err(invalid()),
        };

        let digits = chars.as_str();
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let number = digits.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self::new(prefix, number))
    }
}

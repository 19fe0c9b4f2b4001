//! stax-lex - Lexical Analyzer for the stax language
//!
//! This crate turns a line of stax text into a flat sequence of tokens for
//! the parser. stax is a small stack-oriented array language; at the
//! lexical level it has only seven token classes.
//!
//! # Example Usage
//!
//! ```
//! use stax_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("v <- [1.5, 2] sum");
//!
//! let kinds: Vec<_> = tokens.kinds().collect();
//! assert_eq!(kinds, vec![
//!     TokenKind::Identifier,
//!     TokenKind::LeftArrow,
//!     TokenKind::LeftBracket,
//!     TokenKind::Number,
//!     TokenKind::Comma,
//!     TokenKind::Number,
//!     TokenKind::RightBracket,
//!     TokenKind::Identifier,
//! ]);
//! assert_eq!(tokens[3].lexeme(), "1.5");
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Persistent character cursor over the input
//! - [`token`] - Token, TokenKind and the Tokens sequence
//! - [`lexer`] - The scanning state machine
//! - [`unicode`] - Character classes
//!
//! # Token Classes
//!
//! | Input | Token |
//! |---|---|
//! | `[` `]` | `LeftBracket`, `RightBracket` |
//! | `.` `,` | `Dot`, `Comma` |
//! | `<-` | `LeftArrow` |
//! | alphabetic run | `Identifier` |
//! | digit run with at most one `.` | `Number` |
//!
//! # Dropped Input
//!
//! Tokenizing never fails. Whitespace, characters outside the table above,
//! and a `<` not followed by `-` are skipped without producing a token.
//! [`tokenize_with_diagnostics`] produces the same tokens and also reports
//! each non-whitespace dropped fragment to a [`Handler`] as a warning.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use stax_util::Handler;
pub use token::{Token, TokenKind, Tokens};

static_assertions::assert_impl_all!(Cursor<'static>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Token<'static>: Copy, Send, Sync);

/// Tokenizes `input`, silently dropping anything that is not a token.
///
/// ```
/// use stax_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("1.2.3");
/// let pairs: Vec<_> = tokens.iter().map(|t| (t.kind(), t.lexeme())).collect();
/// assert_eq!(pairs, vec![
///     (TokenKind::Number, "1.2"),
///     (TokenKind::Dot, "."),
///     (TokenKind::Number, "3"),
/// ]);
/// ```
pub fn tokenize(input: &str) -> Tokens<'_> {
    Lexer::new(input).run()
}

/// Tokenizes `input` exactly like [`tokenize`], reporting each dropped
/// non-whitespace fragment to `handler`.
///
/// ```
/// use stax_lex::{tokenize_with_diagnostics, Handler};
///
/// let handler = Handler::new();
/// let tokens = tokenize_with_diagnostics("1 2 3 |", &handler);
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(handler.warning_count(), 1);
/// ```
pub fn tokenize_with_diagnostics<'a>(input: &'a str, handler: &'a Handler) -> Tokens<'a> {
    Lexer::with_handler(input, handler).run()
}

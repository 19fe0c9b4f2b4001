//! stax-util - Shared foundation types for the stax toolchain
//!
//! This crate holds the pieces every other stax crate agrees on:
//!
//! - [`span`] - byte ranges with line/column information
//! - [`diagnostic`] - warnings and errors, their codes, and the [`Handler`]
//!   that collects them
//! - [`error`] - error types for the few fallible operations in this crate
//!
//! The lexer never fails on input. It can, however, describe what it
//! dropped through a [`Handler`], and the command-line front end renders
//! those descriptions for the user.
//!
//! # Example
//!
//! ```
//! use stax_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("unrecognized character '|'")
//!     .code(DiagnosticCode::W_LEXER_UNRECOGNIZED_CHAR)
//!     .span(Span::new(6, 7, 1, 7))
//!     .emit(&handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;

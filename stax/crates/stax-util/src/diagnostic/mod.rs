//! Diagnostic reporting.
//!
//! A [`Diagnostic`] is a leveled message with a [`Span`], an optional
//! [`DiagnosticCode`], and any number of notes, help lines and source
//! snippets. Diagnostics are collected by a [`Handler`]; producers only
//! ever need a shared reference to it.
//!
//! # Examples
//!
//! ```
//! use stax_util::{Diagnostic, Handler, Span};
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::warning("lone '<' dropped", Span::new(0, 1, 1, 1)));
//!
//! assert!(!handler.has_errors());
//! assert_eq!(handler.warning_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Severity of a diagnostic
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Something that prevents further processing
    Error,
    /// Something suspicious that processing recovered from
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A single reported problem.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

impl fmt::Display for Diagnostic {
    /// Renders as
    ///
    /// ```text
    /// warning[W1001]: unrecognized character '|' at 1:7
    ///     1 | 1 2 3 |
    ///       |       ^
    ///   = help: remove the character
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {} at {}", self.message, self.span)?;

        for snippet in &self.snippets {
            write!(f, "\n{}", snippet.format())?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Collects diagnostics emitted during a run.
///
/// Emission goes through `&self`, so a lexer can hold a shared reference
/// while the caller keeps ownership and reads the results afterwards.
/// Diagnostics whose code appears in the allow-list are dropped on emit.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    allowed: Vec<DiagnosticCode>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler that discards diagnostics carrying any of `codes`
    ///
    /// # Examples
    ///
    /// ```
    /// use stax_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
    ///
    /// let handler = Handler::with_allowed([DiagnosticCode::W_LEXER_UNRECOGNIZED_CHAR]);
    /// DiagnosticBuilder::warning("unrecognized character ' '")
    ///     .code(DiagnosticCode::W_LEXER_UNRECOGNIZED_CHAR)
    ///     .span(Span::DUMMY)
    ///     .emit(&handler);
    ///
    /// assert!(handler.is_empty());
    /// ```
    pub fn with_allowed(codes: impl IntoIterator<Item = DiagnosticCode>) -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            allowed: codes.into_iter().collect(),
        }
    }

    /// Returns true if diagnostics with `code` are dropped by this handler
    pub fn is_allowed(&self, code: DiagnosticCode) -> bool {
        self.allowed.contains(&code)
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if let Some(code) = diagnostic.code {
            if self.is_allowed(code) {
                return;
            }
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for a warning at `span`
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Create a diagnostic builder for an error at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.count_level(Level::Error) > 0
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count_level(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count_level(Level::Warning)
    }

    /// Returns true if nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Get a copy of all reported diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all reported diagnostics
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    fn count_level(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }
}

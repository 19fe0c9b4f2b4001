//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing the
//! offending line under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler, Level, Span};
use crate::error::{DiagnosticError, DiagnosticResult};

/// A source line with a highlighted column range.
///
/// # Examples
///
/// ```
/// use stax_util::{SourceSnippet, Span};
///
/// let snippet = SourceSnippet::for_span("1 2 3 |", Span::new(6, 7, 1, 7)).unwrap();
/// assert_eq!(snippet.start_column, 7);
/// assert!(snippet.format().ends_with('^'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content, without its line terminator
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the highlight starts (1-based)
    pub start_column: usize,
    /// Column where the highlight ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display after the carets
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Cut the line containing `span` out of `source`.
    ///
    /// Fails with [`DiagnosticError::FormatFailed`] when the span does not
    /// lie on character boundaries inside `source`.
    pub fn for_span(source: &str, span: Span) -> DiagnosticResult<Self> {
        if span.start > span.end
            || span.end > source.len()
            || !source.is_char_boundary(span.start)
            || !source.is_char_boundary(span.end)
        {
            return Err(DiagnosticError::FormatFailed(format!(
                "span {}..{} is outside a {}-byte source",
                span.start,
                span.end,
                source.len()
            )));
        }

        let line_start = source[..span.start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[span.start..]
            .find('\n')
            .map_or(source.len(), |i| span.start + i);

        let line = source[line_start..line_end].trim_end_matches('\r');
        let line_number = source[..span.start].matches('\n').count() + 1;
        let start_column = source[line_start..span.start].chars().count() + 1;
        let highlighted = source[span.start..span.end.min(line_end)].chars().count();

        Ok(Self {
            line: line.to_string(),
            line_number,
            start_column,
            end_column: start_column + highlighted,
            label: None,
        })
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Render the snippet as two lines: the source line and a caret line.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(label) = &self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }
}

/// Fluent constructor for [`Diagnostic`]s.
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Start a diagnostic at the given level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_snippet_new() {
        let snippet = SourceSnippet::new("[1 2] <- x", 1, 7, 9, Some("assignment"));
        assert_eq!(snippet.line, "[1 2] <- x");
        assert_eq!(snippet.line_number, 1);
        assert_eq!(snippet.start_column, 7);
        assert_eq!(snippet.end_column, 9);
        assert_eq!(snippet.label, Some("assignment".to_string()));
    }

    #[test]
    fn test_source_snippet_format() {
        let snippet = SourceSnippet::new("1 2 3 |", 1, 7, 8, Some("here"));
        assert_eq!(snippet.format(), "  1 | 1 2 3 |\n    |       ^ here");
    }

    #[test]
    fn test_for_span_picks_the_right_line() {
        let source = "a b\nc < d\r\ne";
        let span = Span::new(6, 7, 2, 3);
        let snippet = SourceSnippet::for_span(source, span).unwrap();
        assert_eq!(snippet.line, "c < d");
        assert_eq!(snippet.line_number, 2);
        assert_eq!(snippet.start_column, 3);
        assert_eq!(snippet.end_column, 4);
    }

    #[test]
    fn test_for_span_counts_characters_not_bytes() {
        let source = "αβ |";
        let span = Span::new(5, 6, 1, 4);
        let snippet = SourceSnippet::for_span(source, span).unwrap();
        assert_eq!(snippet.start_column, 4);
    }

    #[test]
    fn test_for_span_at_end_of_input() {
        let snippet = SourceSnippet::for_span("<", Span::new(0, 1, 1, 1)).unwrap();
        assert_eq!(snippet.line, "<");
        assert_eq!(snippet.format(), "  1 | <\n    | ^");
    }

    #[test]
    fn test_for_span_out_of_range() {
        let result = SourceSnippet::for_span("abc", Span::new(2, 9, 1, 3));
        assert!(matches!(result, Err(DiagnosticError::FormatFailed(_))));
    }

    #[test]
    fn test_for_span_inside_a_character() {
        let result = SourceSnippet::for_span("α", Span::new(1, 2, 1, 1));
        assert!(matches!(result, Err(DiagnosticError::FormatFailed(_))));
    }

    #[test]
    fn test_builder_warning() {
        let diag = DiagnosticBuilder::warning("lone '<'")
            .code(DiagnosticCode::W_LEXER_INCOMPLETE_ARROW)
            .span(Span::new(0, 1, 1, 1))
            .note("note")
            .help("help")
            .build();

        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.span, Span::new(0, 1, 1, 1));
        assert_eq!(diag.notes, vec!["note".to_string()]);
        assert_eq!(diag.helps, vec!["help".to_string()]);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("something went wrong")
            .span(Span::DUMMY)
            .emit(&handler);
        assert!(handler.has_errors());
    }
}

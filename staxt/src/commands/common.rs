//! Common types and utilities for staxt commands.
//!
//! Both `tokens` and `repl` scan some text and print the result the same
//! way; the shared pieces live here.

use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use stax_lex::{tokenize, tokenize_with_diagnostics, Token, Tokens};
use stax_util::{Diagnostic, DiagnosticCode, Handler, SourceSnippet};

use crate::error::{Result, StaxtError};

// ============================================================================
// Output Format
// ============================================================================

/// How tokens are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `Kind "lexeme"` line per token
    #[default]
    Text,
    /// A JSON array of token records
    Json,
}

impl FromStr for OutputFormat {
    type Err = StaxtError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(StaxtError::Validation(format!(
                "{} {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

// ============================================================================
// Scanning and Rendering
// ============================================================================

/// Options shared by every command that prints tokens.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Append `@line:column` to text output.
    pub spans: bool,
    /// Report dropped fragments on the error stream.
    pub diagnostics: bool,
    /// Codes suppressed when diagnostics are on.
    pub allowed: Vec<DiagnosticCode>,
}

/// A token as written in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
    start: usize,
    end: usize,
    line: u32,
    column: u32,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        let span = token.span();
        Self {
            kind: token.kind().name(),
            lexeme: token.lexeme(),
            start: span.start,
            end: span.end,
            line: span.line,
            column: span.column,
        }
    }
}

/// Scans `source`, writes its tokens to `out` and any warnings to `err`.
///
/// Returns the number of tokens written.
pub fn scan_and_render(
    source: &str,
    options: &RenderOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<usize> {
    let handler = Handler::with_allowed(options.allowed.iter().copied());
    let tokens = if options.diagnostics {
        tokenize_with_diagnostics(source, &handler)
    } else {
        tokenize(source)
    };

    for diagnostic in handler.take_diagnostics() {
        writeln!(err, "{}", render_diagnostic(source, diagnostic))?;
    }

    out.write_all(render_tokens(&tokens, options)?.as_bytes())?;
    out.flush()?;

    tracing::debug!(tokens = tokens.len(), "rendered tokens");
    Ok(tokens.len())
}

/// Renders tokens in the requested format. Text output ends with a newline
/// per token; JSON output is a single line.
pub fn render_tokens(tokens: &Tokens<'_>, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Text => {
            let mut rendered = String::new();
            for token in tokens.iter() {
                rendered.push_str(&token.to_string());
                if options.spans {
                    rendered.push_str(&format!(" @{}", token.span()));
                }
                rendered.push('\n');
            }
            Ok(rendered)
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            let mut rendered = serde_json::to_string(&records)?;
            rendered.push('\n');
            Ok(rendered)
        },
    }
}

/// Attaches the offending source line to a diagnostic and renders it.
fn render_diagnostic(source: &str, diagnostic: Diagnostic) -> String {
    match SourceSnippet::for_span(source, diagnostic.span) {
        Ok(snippet) => diagnostic.with_snippet(snippet).to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "could not attach source snippet");
            diagnostic.to_string()
        },
    }
}

// ============================================================================
// Input
// ============================================================================

/// Picks the text to scan: an inline expression, a file, or stdin.
pub fn read_input(file: Option<&Path>, expr: Option<&str>, stdin: &mut impl Read) -> Result<String> {
    if let Some(expr) = expr {
        return Ok(expr.to_string());
    }

    match file {
        Some(path) if path.as_os_str() != "-" => {
            if !path.is_file() {
                return Err(StaxtError::Validation(format!(
                    "{} {}",
                    error_messages::INPUT_PATH_NOT_FILE,
                    path.display()
                )));
            }
            std::fs::read_to_string(path).map_err(|e| {
                StaxtError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
            })
        },
        _ => {
            let mut buffer = String::new();
            stdin.read_to_string(&mut buffer)?;
            Ok(buffer)
        },
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message prefixes.
pub mod error_messages {
    /// Error when input path is not a readable file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when a file would be overwritten without `--force`.
    pub const FILE_EXISTS: &str = "File already exists (use --force to overwrite):";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";
}

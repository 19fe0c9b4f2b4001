//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the scan loop and the dispatch
//! state. The identifier and number sub-scanners hand control back here by
//! returning `State::Dispatch` with the cursor left on the character that
//! ended their run, so that character is classified afresh.

use stax_util::{DiagnosticBuilder, DiagnosticCode, Handler};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind, Tokens};
use crate::unicode::{is_identifier_char, is_number_digit};

/// Where the scan loop goes next.
///
/// The sub-scanner states carry the cursor at which their lexeme began;
/// the lexeme itself is the slice from there to the current cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State<'a> {
    Dispatch,
    Identifier { start: Cursor<'a> },
    Number { start: Cursor<'a>, dot_seen: bool },
    Done,
}

/// Lexer for stax input.
///
/// Every step of the loop consumes at most two characters and returns the
/// next `State`, so a scan of any length runs in constant stack space.
///
/// # Example
///
/// ```
/// use stax_lex::{Lexer, TokenKind};
///
/// let tokens = Lexer::new("x <- [1, 2]").run();
/// assert_eq!(tokens[1].kind(), TokenKind::LeftArrow);
/// assert_eq!(tokens.len(), 7);
/// ```
pub struct Lexer<'a> {
    /// Position of the next unclassified character.
    pub(crate) cursor: Cursor<'a>,

    /// Tokens recognized so far.
    tokens: Tokens<'a>,

    /// Receives a warning for each dropped fragment, when present.
    handler: Option<&'a Handler>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer that drops unrecognized input silently.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Tokens::new(),
            handler: None,
        }
    }

    /// Creates a lexer that reports dropped input to `handler`.
    ///
    /// The token output is identical to [`Lexer::new`].
    pub fn with_handler(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            handler: Some(handler),
            ..Self::new(source)
        }
    }

    /// Scans the whole input and returns its tokens.
    pub fn run(mut self) -> Tokens<'a> {
        let mut state = State::Dispatch;

        loop {
            state = match state {
                State::Dispatch => self.dispatch(),
                State::Identifier { start } => self.lex_identifier(start),
                State::Number { start, dot_seen } => self.lex_number(start, dot_seen),
                State::Done => break,
            };
        }

        debug!(
            tokens = self.tokens.len(),
            bytes = self.cursor.source().len(),
            "scan finished"
        );
        self.tokens
    }

    /// Classifies the character under the cursor.
    fn dispatch(&mut self) -> State<'a> {
        let start = self.cursor;
        let Some(c) = start.head() else {
            return State::Done;
        };

        match c {
            '[' => self.lex_single(TokenKind::LeftBracket, start),
            ']' => self.lex_single(TokenKind::RightBracket, start),
            '.' => self.lex_single(TokenKind::Dot, start),
            ',' => self.lex_single(TokenKind::Comma, start),
            '<' => self.lex_less(start),
            c if is_identifier_char(c) => {
                self.cursor = start.advance();
                State::Identifier { start }
            },
            c if is_number_digit(c) => {
                self.cursor = start.advance();
                State::Number {
                    start,
                    dot_seen: false,
                }
            },
            c => {
                self.cursor = start.advance();
                if !c.is_whitespace() {
                    self.report_dropped(
                        DiagnosticCode::W_LEXER_UNRECOGNIZED_CHAR,
                        format!("unrecognized character {:?}", c),
                        start,
                    );
                }
                State::Dispatch
            },
        }
    }

    /// Consumes one character and emits it as a `kind` token.
    fn lex_single(&mut self, kind: TokenKind, start: Cursor<'a>) -> State<'a> {
        self.cursor = start.advance();
        self.emit(kind, start);
        State::Dispatch
    }

    /// Appends a token spanning `start` up to the current cursor.
    pub(crate) fn emit(&mut self, kind: TokenKind, start: Cursor<'a>) {
        let lexeme = self.cursor.slice_from(&start);
        let span = self.cursor.span_from(&start);
        self.tokens.push(Token::new(kind, lexeme, span));
    }

    /// Records that the text between `start` and the cursor produced no
    /// token.
    pub(crate) fn report_dropped(
        &mut self,
        code: DiagnosticCode,
        message: String,
        start: Cursor<'a>,
    ) {
        let span = self.cursor.span_from(&start);
        trace!(%code, line = span.line, column = span.column, "{}", message);

        if let Some(handler) = self.handler {
            DiagnosticBuilder::warning(message)
                .code(code)
                .span(span)
                .note("the fragment was skipped and produced no token")
                .emit(handler);
        }
    }
}

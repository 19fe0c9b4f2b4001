//! Operator lexing.
//!
//! `<-` is the only multi-character operator. Recognizing it takes one
//! character of lookahead past the `<`.

use stax_util::DiagnosticCode;

use super::core::State;
use crate::cursor::Cursor;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `<` or `<-`.
    ///
    /// `start` sits on the `<`. If a `-` follows, both characters become a
    /// `LeftArrow` token. Otherwise only the `<` is consumed and no token
    /// is produced; whatever followed it is dispatched normally.
    pub(crate) fn lex_less(&mut self, start: Cursor<'a>) -> State<'a> {
        let after_less = start.advance();

        if after_less.head() == Some('-') {
            self.cursor = after_less.advance();
            self.emit(TokenKind::LeftArrow, start);
        } else {
            self.cursor = after_less;
            self.report_dropped(
                DiagnosticCode::W_LEXER_INCOMPLETE_ARROW,
                "expected '-' after '<'".to_string(),
                start,
            );
        }

        State::Dispatch
    }
}

//! Identifier lexing.
//!
//! Identifiers are maximal runs of alphabetic characters. There are no
//! keywords at this level; `dup` and `x` are both plain identifiers.

use super::core::State;
use crate::cursor::Cursor;
use crate::token::TokenKind;
use crate::unicode::is_identifier_char;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// One step of the identifier sub-scanner.
    ///
    /// `start` is the cursor at the first character of the identifier; the
    /// cursor is somewhere inside the run. Extends the run by one character,
    /// or emits the identifier and returns to dispatch without consuming
    /// the character that ended it.
    pub(crate) fn lex_identifier(&mut self, start: Cursor<'a>) -> State<'a> {
        match self.cursor.head() {
            Some(c) if is_identifier_char(c) => {
                self.cursor = self.cursor.advance();
                State::Identifier { start }
            },
            Some(_) => {
                self.emit(TokenKind::Identifier, start);
                State::Dispatch
            },
            None => {
                self.emit(TokenKind::Identifier, start);
                State::Done
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;

    fn lex_pairs(source: &str) -> Vec<(TokenKind, &str)> {
        Lexer::new(source)
            .run()
            .into_iter()
            .map(|t| (t.kind(), t.lexeme()))
            .collect()
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_pairs("foo"), vec![(TokenKind::Identifier, "foo")]);
    }

    #[test]
    fn test_single_letter_identifier() {
        assert_eq!(lex_pairs("x"), vec![(TokenKind::Identifier, "x")]);
    }

    #[test]
    fn test_identifier_then_number() {
        assert_eq!(
            lex_pairs("abc123"),
            vec![(TokenKind::Identifier, "abc"), (TokenKind::Number, "123")]
        );
    }

    #[test]
    fn test_identifier_then_bracket() {
        assert_eq!(
            lex_pairs("sum]"),
            vec![(TokenKind::Identifier, "sum"), (TokenKind::RightBracket, "]")]
        );
    }

    #[test]
    fn test_identifier_then_arrow() {
        assert_eq!(
            lex_pairs("x<-"),
            vec![(TokenKind::Identifier, "x"), (TokenKind::LeftArrow, "<-")]
        );
    }

    #[test]
    fn test_underscore_splits_identifiers() {
        assert_eq!(
            lex_pairs("foo_bar"),
            vec![(TokenKind::Identifier, "foo"), (TokenKind::Identifier, "bar")]
        );
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(lex_pairs("λx"), vec![(TokenKind::Identifier, "λx")]);
    }

    #[test]
    fn test_identifier_span() {
        let tokens = Lexer::new("  dup").run();
        let span = tokens[0].span();
        assert_eq!((span.start, span.end), (2, 5));
        assert_eq!(span.column, 3);
    }
}

//! Number literal lexing.
//!
//! A number is a run of ASCII digits that may contain one `.`. The lexeme
//! is kept as text; turning it into a value is the evaluator's business.
//!
//! - `42`, `0`, `007`
//! - `1.5`, `7.` (the trailing dot belongs to the number)
//! - `1.2.3` lexes as `1.2`, `.`, `3`

use super::core::State;
use crate::cursor::Cursor;
use crate::token::TokenKind;
use crate::unicode::is_number_digit;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// One step of the number sub-scanner.
    ///
    /// `dot_seen` records whether the run already holds its one decimal
    /// point. A second `.` ends the number and is left for dispatch, which
    /// turns it into a `Dot` token.
    pub(crate) fn lex_number(&mut self, start: Cursor<'a>, dot_seen: bool) -> State<'a> {
        match self.cursor.head() {
            Some(c) if is_number_digit(c) => {
                self.cursor = self.cursor.advance();
                State::Number { start, dot_seen }
            },
            Some('.') if !dot_seen => {
                self.cursor = self.cursor.advance();
                State::Number {
                    start,
                    dot_seen: true,
                }
            },
            Some(_) => {
                self.emit(TokenKind::Number, start);
                State::Dispatch
            },
            None => {
                self.emit(TokenKind::Number, start);
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
    fn test_integer() {
        assert_eq!(lex_pairs("42"), vec![(TokenKind::Number, "42")]);
        assert_eq!(lex_pairs("0"), vec![(TokenKind::Number, "0")]);
        assert_eq!(lex_pairs("007"), vec![(TokenKind::Number, "007")]);
    }

    #[test]
    fn test_decimal() {
        assert_eq!(lex_pairs("3.14"), vec![(TokenKind::Number, "3.14")]);
    }

    #[test]
    fn test_trailing_dot_belongs_to_number() {
        assert_eq!(lex_pairs("7."), vec![(TokenKind::Number, "7.")]);
    }

    #[test]
    fn test_second_dot_becomes_dot_token() {
        assert_eq!(
            lex_pairs("1.2.3"),
            vec![
                (TokenKind::Number, "1.2"),
                (TokenKind::Dot, "."),
                (TokenKind::Number, "3"),
            ]
        );
    }

    #[test]
    fn test_double_dot_after_integer() {
        assert_eq!(
            lex_pairs("1.."),
            vec![(TokenKind::Number, "1."), (TokenKind::Dot, ".")]
        );
    }

    #[test]
    fn test_leading_dot_is_not_a_number() {
        assert_eq!(
            lex_pairs(".5"),
            vec![(TokenKind::Dot, "."), (TokenKind::Number, "5")]
        );
    }

    #[test]
    fn test_number_then_identifier() {
        assert_eq!(
            lex_pairs("2dup"),
            vec![(TokenKind::Number, "2"), (TokenKind::Identifier, "dup")]
        );
    }

    #[test]
    fn test_number_then_comma() {
        assert_eq!(
            lex_pairs("1,2"),
            vec![
                (TokenKind::Number, "1"),
                (TokenKind::Comma, ","),
                (TokenKind::Number, "2"),
            ]
        );
    }

    #[test]
    fn test_separate_numbers() {
        assert_eq!(
            lex_pairs("1 2 3"),
            vec![
                (TokenKind::Number, "1"),
                (TokenKind::Number, "2"),
                (TokenKind::Number, "3"),
            ]
        );
    }
}

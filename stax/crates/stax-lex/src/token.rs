//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact slice of input it was
//! recognized from. [`Tokens`] is the ordered output of a scan.

use std::fmt;
use std::ops::Deref;

use stax_util::Span;

/// The class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of ASCII digits with at most one `.` (`42`, `1.5`, `7.`)
    Number,
    /// A run of alphabetic characters (`dup`, `x`)
    Identifier,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `<-`
    LeftArrow,
}

impl TokenKind {
    /// All token kinds, in declaration order.
    pub const ALL: [TokenKind; 7] = [
        TokenKind::Number,
        TokenKind::Identifier,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::LeftArrow,
    ];

    /// The tag name, as printed by `Display`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Number => "Number",
            TokenKind::Identifier => "Identifier",
            TokenKind::LeftBracket => "LeftBracket",
            TokenKind::RightBracket => "RightBracket",
            TokenKind::Dot => "Dot",
            TokenKind::Comma => "Comma",
            TokenKind::LeftArrow => "LeftArrow",
        }
    }

    /// The lexeme every token of this kind carries, for the punctuation
    /// kinds. `None` for `Number` and `Identifier`.
    ///
    /// ```
    /// use stax_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::LeftArrow.fixed_lexeme(), Some("<-"));
    /// assert_eq!(TokenKind::Number.fixed_lexeme(), None);
    /// ```
    pub fn fixed_lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::LeftBracket => Some("["),
            TokenKind::RightBracket => Some("]"),
            TokenKind::Dot => Some("."),
            TokenKind::Comma => Some(","),
            TokenKind::LeftArrow => Some("<-"),
            TokenKind::Number | TokenKind::Identifier => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A recognized lexeme.
///
/// Tokens are created once, when the lexer finishes recognizing a lexeme,
/// and expose only read accessors afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    kind: TokenKind,
    lexeme: &'a str,
    span: Span,
}

impl<'a> Token<'a> {
    pub(crate) fn new(kind: TokenKind, lexeme: &'a str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// The token class.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact input text the token was recognized from.
    pub fn lexeme(&self) -> &'a str {
        self.lexeme
    }

    /// Where in the input the lexeme sits.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token<'_> {
    /// `Number "1.5"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme)
    }
}

/// The ordered tokens of one scan.
///
/// Only the lexer appends; everyone else sees a read-only slice through
/// `Deref`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokens<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub(crate) fn push(&mut self, token: Token<'a>) {
        self.tokens.push(token);
    }

    /// The token kinds, in order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(Token::kind)
    }

    /// The lexemes, in order.
    pub fn lexemes(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.tokens.iter().map(Token::lexeme)
    }

    /// Consumes the sequence, returning the underlying vector.
    pub fn into_vec(self) -> Vec<Token<'a>> {
        self.tokens
    }
}

impl<'a> Deref for Tokens<'a> {
    type Target = [Token<'a>];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<'a> IntoIterator for Tokens<'a> {
    type Item = Token<'a>;
    type IntoIter = std::vec::IntoIter<Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s Tokens<'a> {
    type Item = &'s Token<'a>;
    type IntoIter = std::slice::Iter<'s, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

//! Character cursor for traversing input text.
//!
//! A [`Cursor`] is a persistent view of the unconsumed suffix of the input:
//! a borrowed buffer plus a byte offset and the line/column of that offset.
//! It is `Copy`, so duplicating one for lookahead is a register copy, and
//! no method mutates it. [`Cursor::advance`] hands back a new cursor and
//! leaves the receiver where it was.

use stax_util::Span;

/// A persistent position in the input.
///
/// # Example
///
/// ```
/// use stax_lex::Cursor;
///
/// let start = Cursor::new("<-");
/// let next = start.advance();
///
/// assert_eq!(start.head(), Some('<'));
/// assert_eq!(next.head(), Some('-'));
/// assert!(next.advance().is_exhausted());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
    /// The full input; every cursor over the same input shares it.
    source: &'a str,

    /// Byte offset of the next unconsumed character.
    position: usize,

    /// Line of `position` (1-based).
    line: u32,

    /// Column of `position` (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next character without consuming it, or `None` once the
    /// input is exhausted.
    ///
    /// ```
    /// use stax_lex::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.head(), Some('a'));
    /// assert_eq!(cursor.head(), Some('a'));
    /// assert_eq!(Cursor::new("").head(), None);
    /// ```
    #[inline]
    pub fn head(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;

        // Fast path for ASCII
        if b < 128 {
            return Some(b as char);
        }

        self.source[self.position..].chars().next()
    }

    /// Returns a cursor one character further on.
    ///
    /// The receiver is untouched. Advancing an exhausted cursor returns an
    /// equal exhausted cursor.
    #[inline]
    #[must_use = "advance returns a new cursor; the original does not move"]
    pub fn advance(self) -> Self {
        let Some(c) = self.head() else {
            return self;
        };

        let (line, column) = if c == '\n' {
            (self.line + 1, 1)
        } else {
            (self.line, self.column + 1)
        };

        Self {
            source: self.source,
            position: self.position + c.len_utf8(),
            line,
            column,
        }
    }

    /// Returns true exactly when [`head`](Self::head) is `None`.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Byte offset of the next character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Text consumed between `start` and this cursor.
    ///
    /// `start` must be an earlier (or equal) cursor over the same input.
    ///
    /// ```
    /// use stax_lex::Cursor;
    ///
    /// let start = Cursor::new("abc def");
    /// let end = start.advance().advance().advance();
    /// assert_eq!(end.slice_from(&start), "abc");
    /// ```
    pub fn slice_from(&self, start: &Cursor<'a>) -> &'a str {
        &self.source[start.position..self.position]
    }

    /// Span covering the text consumed between `start` and this cursor,
    /// positioned at `start`.
    pub fn span_from(&self, start: &Cursor<'a>) -> Span {
        Span::new(start.position, self.position, start.line, start.column)
    }

    /// The unconsumed suffix of the input.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// The full input text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

//! Character classes used by the lexer.

/// Returns true for characters that start or continue an identifier.
///
/// Any Unicode alphabetic character qualifies; digits and `_` do not, so
/// `abc123` is an identifier followed by a number.
///
/// ```
/// use stax_lex::unicode::is_identifier_char;
///
/// assert!(is_identifier_char('x'));
/// assert!(is_identifier_char('λ'));
/// assert!(!is_identifier_char('_'));
/// assert!(!is_identifier_char('7'));
/// ```
#[inline]
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphabetic()
}

/// Returns true for characters that start or continue a number.
///
/// Only ASCII `0-9`; other Unicode decimal digits are skipped like any
/// other unrecognized character.
#[inline]
pub fn is_number_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_chars() {
        for c in ['a', 'Z', 'é', 'ß', 'Ж'] {
            assert!(is_identifier_char(c), "{c:?}");
        }
        for c in ['0', '_', '-', ' ', '[', '<'] {
            assert!(!is_identifier_char(c), "{c:?}");
        }
    }

    #[test]
    fn test_number_digits_are_ascii_only() {
        assert!("0123456789".chars().all(is_number_digit));
        assert!(!is_number_digit('٣'));
        assert!(!is_number_digit('.'));
        assert!(!is_number_digit('a'));
    }
}

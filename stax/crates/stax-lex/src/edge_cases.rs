//! Edge case tests for stax-lex

use crate::{tokenize, TokenKind};

fn lex_all(source: &str) -> Vec<(TokenKind, &str)> {
    tokenize(source)
        .into_iter()
        .map(|t| (t.kind(), t.lexeme()))
        .collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_whitespace_only() {
    assert!(lex_all("   \n\t  \r\n  ").is_empty());
}

#[test]
fn test_edge_very_long_identifier() {
    let name = "a".repeat(1_000_000);
    let tokens = tokenize(&name);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lexeme().len(), 1_000_000);
}

#[test]
fn test_edge_very_long_number() {
    let digits = format!("{}.{}", "9".repeat(500_000), "1".repeat(500_000));
    let tokens = tokenize(&digits);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), TokenKind::Number);
}

#[test]
fn test_edge_many_alternating_tokens() {
    let source = "x1".repeat(200_000);
    let tokens = tokenize(&source);
    assert_eq!(tokens.len(), 400_000);
    assert!(tokens
        .kinds()
        .step_by(2)
        .all(|k| k == TokenKind::Identifier));
}

#[test]
fn test_edge_deeply_nested_brackets() {
    let source = format!("{}{}", "[".repeat(100_000), "]".repeat(100_000));
    let tokens = tokenize(&source);
    assert_eq!(tokens.len(), 200_000);
    assert_eq!(tokens[99_999].kind(), TokenKind::LeftBracket);
    assert_eq!(tokens[100_000].kind(), TokenKind::RightBracket);
}

#[test]
fn test_edge_long_unrecognized_run() {
    let source = format!("{}1", "|".repeat(1_000_000));
    assert_eq!(lex_all(&source), vec![(TokenKind::Number, "1")]);
}

#[test]
fn test_edge_consecutive_arrows() {
    assert_eq!(
        lex_all("<-<-"),
        vec![(TokenKind::LeftArrow, "<-"), (TokenKind::LeftArrow, "<-")]
    );
}

#[test]
fn test_edge_reversed_arrow() {
    assert!(lex_all("-<").is_empty());
}

#[test]
fn test_edge_less_at_end_after_token() {
    assert_eq!(lex_all("x<"), vec![(TokenKind::Identifier, "x")]);
}

#[test]
fn test_edge_dot_between_identifiers() {
    assert_eq!(
        lex_all("x.y"),
        vec![
            (TokenKind::Identifier, "x"),
            (TokenKind::Dot, "."),
            (TokenKind::Identifier, "y"),
        ]
    );
}

#[test]
fn test_edge_number_dot_identifier() {
    assert_eq!(
        lex_all("1.x"),
        vec![(TokenKind::Number, "1."), (TokenKind::Identifier, "x")]
    );
}

#[test]
fn test_edge_repeated_separators() {
    assert_eq!(
        lex_all(",,.."),
        vec![
            (TokenKind::Comma, ","),
            (TokenKind::Comma, ","),
            (TokenKind::Dot, "."),
            (TokenKind::Dot, "."),
        ]
    );
}

#[test]
fn test_edge_non_ascii_digits_skipped() {
    // Arabic-Indic three is numeric but not an ASCII digit.
    assert!(lex_all("٣").is_empty());
}

#[test]
fn test_edge_emoji_and_nul_skipped() {
    assert_eq!(
        lex_all("🦀\0x"),
        vec![(TokenKind::Identifier, "x")]
    );
}

#[test]
fn test_edge_identifier_crossing_newline() {
    assert_eq!(
        lex_all("ab\ncd"),
        vec![(TokenKind::Identifier, "ab"), (TokenKind::Identifier, "cd")]
    );
}

#[test]
fn test_edge_span_after_multibyte_character() {
    let tokens = tokenize("é [");
    let bracket = tokens[1].span();
    assert_eq!(bracket.start, 3);
    assert_eq!(bracket.column, 3);
}

#[test]
fn test_edge_crlf_line_numbers() {
    let tokens = tokenize("a\r\nb");
    assert_eq!(tokens[1].span().line, 2);
    assert_eq!(tokens[1].span().column, 1);
}

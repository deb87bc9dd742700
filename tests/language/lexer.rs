//! Integration tests for the lexer
//!
//! Tests tokenization of mcl source code.

use mcl::foundation::{ErrorKind, LexErrorKind, Position};
use mcl::language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .expect("tokenize failed")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn tokenize_operators_and_literals() {
    assert_eq!(
        kinds("12+3-4;"),
        vec![
            TokenKind::IntegerLiteral,
            TokenKind::Plus,
            TokenKind::IntegerLiteral,
            TokenKind::Minus,
            TokenKind::IntegerLiteral,
            TokenKind::Semicolon,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EndOfInput]);
}

#[test]
fn literal_text_is_its_digits() {
    let source = "  007 ;";
    let tokens = Lexer::tokenize_all(source).unwrap();
    assert_eq!(tokens[0].text(source), "007");
    assert_eq!(tokens[0].span.start, Position::new(1, 3, 0, 2));
    assert_eq!(tokens[0].span.end, Position::new(1, 6, 0, 5));
}

#[test]
fn oversized_digits_still_lex() {
    let source = "99999999999999999999;";
    let tokens = Lexer::tokenize_all(source).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::IntegerLiteral);
    assert_eq!(tokens[0].text(source).len(), 20);
}

// =============================================================================
// Trivia
// =============================================================================

#[test]
fn whitespace_and_comments_are_skipped() {
    assert_eq!(
        kinds("/* c */ 1 // trailing\n + 2;"),
        vec![
            TokenKind::IntegerLiteral,
            TokenKind::Plus,
            TokenKind::IntegerLiteral,
            TokenKind::Semicolon,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn trivia_advances_positions() {
    let source = "/* c */ 1 // trailing\n + 2;";
    let tokens = Lexer::tokenize_all(source).unwrap();
    assert_eq!(tokens[0].span.start, Position::new(1, 9, 0, 8));
    assert_eq!(tokens[1].span.start, Position::new(2, 2, 22, 23));
    assert_eq!(tokens[2].span.start, Position::new(2, 4, 22, 25));
}

#[test]
fn block_comment_spans_lines() {
    let source = "/* one\ntwo */3;";
    let tokens = Lexer::tokenize_all(source).unwrap();
    assert_eq!(tokens[0].span.start.line, 2);
    assert_eq!(tokens[0].text(source), "3");
}

#[test]
fn block_comment_may_hold_non_ascii() {
    let source = "/* ✓ */ 5;";
    let tokens = Lexer::tokenize_all(source).unwrap();
    assert_eq!(tokens[0].text(source), "5");
}

#[test]
fn line_comment_at_end_of_input() {
    assert_eq!(
        kinds("1; // no newline"),
        vec![
            TokenKind::IntegerLiteral,
            TokenKind::Semicolon,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn lone_slash_is_an_error() {
    let err = Lexer::tokenize_all("1 / 2;").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Lex {
            kind: LexErrorKind::UnexpectedCharacter('/'),
            ..
        }
    ));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unexpected_character_position() {
    let err = Lexer::tokenize_all("1+@;").unwrap_err();
    assert_eq!(err.position(), Position::new(1, 3, 0, 2));
    assert!(err.to_string().contains("1:3"));
}

#[test]
fn unterminated_block_comment_points_at_opening() {
    let err = Lexer::tokenize_all("1; /* never closed").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Lex {
            kind: LexErrorKind::UnterminatedBlockComment,
            ..
        }
    ));
    assert_eq!(err.position(), Position::new(1, 4, 0, 3));
}

// =============================================================================
// End of Input
// =============================================================================

#[test]
fn end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::IntegerLiteral);
    let first = lexer.next_token().unwrap();
    let second = lexer.next_token().unwrap();
    let third = lexer.next_token().unwrap();
    assert!(first.is_eof());
    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(first.span.start, Position::new(1, 2, 0, 1));
}

#[test]
fn iterator_stops_before_end_of_input() {
    let tokens: Vec<_> = Lexer::new("1 + 2;").collect::<Result<_, _>>().unwrap();
    assert_eq!(tokens.len(), 4);
}

#[test]
fn iterator_stops_after_error() {
    let items: Vec<_> = Lexer::new("1 @ 2").collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(items[1].is_err());
}

//! Integration tests for errors

use mcl::foundation::{Error, ErrorContext, ErrorKind, IntegerType, LexErrorKind, Position, Span};

fn span(start: usize, end: usize) -> Span {
    let to_position = |offset: usize| {
        Position::new(1, u32::try_from(offset).unwrap() + 1, 0, offset)
    };
    Span::new(to_position(start), to_position(end))
}

// =============================================================================
// Constructors
// =============================================================================

#[test]
fn unexpected_character() {
    let err = Error::unexpected_character('#', Position::new(2, 5, 10, 14));
    assert!(matches!(
        err.kind,
        ErrorKind::Lex {
            kind: LexErrorKind::UnexpectedCharacter('#'),
            ..
        }
    ));
    assert_eq!(err.position(), Position::new(2, 5, 10, 14));
    assert!(err.context.is_none());
}

#[test]
fn unterminated_block_comment() {
    let err = Error::unterminated_block_comment(Position::at_start());
    assert_eq!(
        err.to_string(),
        "lex error at 1:1: unterminated block comment"
    );
}

#[test]
fn unexpected_token() {
    let err = Error::unexpected_token("';'", "end of input", Position::new(1, 2, 0, 1));
    assert_eq!(
        err.to_string(),
        "parse error at 1:2: expected ';', found end of input"
    );
}

#[test]
fn literal_overflow() {
    let err = Error::overflow(span(0, 3), IntegerType::U8);
    assert_eq!(err.to_string(), "integer literal at 1:1 does not fit in u8");
    assert_eq!(err.position(), span(0, 3).start);
}

#[test]
fn arithmetic_overflow() {
    let err = Error::arithmetic_overflow("-", 0, 1, span(0, 5));
    assert_eq!(err.to_string(), "arithmetic overflow at 1:1: 0 - 1");
    assert!(matches!(
        err.kind,
        ErrorKind::ArithmeticOverflow { lhs: 0, rhs: 1, .. }
    ));
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_captures_offending_line() {
    let source = "1;\n2 + @;\n3;";
    let position = Position::new(2, 5, 3, 7);
    let ctx = ErrorContext::new()
        .with_source("demo.mcl")
        .with_line_of(source, position);
    assert_eq!(ctx.source.as_deref(), Some("demo.mcl"));
    assert_eq!(ctx.line_text.as_deref(), Some("2 + @;"));
}

#[test]
fn context_strips_carriage_return() {
    let ctx = ErrorContext::new().with_line_of("1 @\r\n2;", Position::new(1, 3, 0, 2));
    assert_eq!(ctx.line_text.as_deref(), Some("1 @"));
}

#[test]
fn context_does_not_change_message() {
    let plain = Error::unexpected_character('@', Position::at_start());
    let annotated = Error::unexpected_character('@', Position::at_start())
        .with_context(ErrorContext::new().with_source("x.mcl"));
    assert_eq!(plain.to_string(), annotated.to_string());
    assert_eq!(plain.kind, annotated.kind);
}

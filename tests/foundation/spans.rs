//! Integration tests for source positions and spans

use mcl::foundation::{Position, Span};

// =============================================================================
// Position
// =============================================================================

#[test]
fn start_position_is_line_one_column_one() {
    let position = Position::at_start();
    assert_eq!((position.line, position.column), (1, 1));
    assert_eq!((position.line_start_offset, position.offset), (0, 0));
    assert_eq!(position, Position::default());
}

#[test]
fn advance_walks_a_line() {
    let position = "abc".chars().fold(Position::at_start(), Position::advance);
    assert_eq!(position, Position::new(1, 4, 0, 3));
}

#[test]
fn advance_over_newline_starts_next_line() {
    let position = "ab\ncd"
        .chars()
        .fold(Position::at_start(), Position::advance);
    assert_eq!(position, Position::new(2, 3, 3, 5));
}

#[test]
fn advance_over_carriage_return_stays_on_line() {
    let position = "a\r".chars().fold(Position::at_start(), Position::advance);
    assert_eq!(position, Position::new(1, 3, 0, 2));
}

#[test]
fn advance_counts_utf8_width_in_offset() {
    let position = Position::at_start().advance('é');
    assert_eq!(position.column, 2);
    assert_eq!(position.offset, 2);
}

#[test]
fn position_display() {
    assert_eq!(Position::new(3, 14, 20, 33).to_string(), "3:14");
}

// =============================================================================
// Span
// =============================================================================

#[test]
fn span_text_and_len() {
    let source = "12 + 345;";
    let start = Position::new(1, 6, 0, 5);
    let end = Position::new(1, 9, 0, 8);
    let span = Span::new(start, end);
    assert_eq!(span.text(source), "345");
    assert_eq!(span.len(), 3);
    assert!(!span.is_empty());
}

#[test]
fn empty_span_has_no_text() {
    let span = Span::empty(Position::new(1, 4, 0, 3));
    assert!(span.is_empty());
    assert_eq!(span.text("abc"), "");
}

#[test]
fn span_to_joins_outer_ends() {
    let a = Span::new(Position::new(1, 1, 0, 0), Position::new(1, 2, 0, 1));
    let b = Span::new(Position::new(1, 5, 0, 4), Position::new(1, 6, 0, 5));
    let joined = a.to(b);
    assert_eq!(joined.start, a.start);
    assert_eq!(joined.end, b.end);
    assert_eq!(joined.len(), 5);
}

#[test]
fn span_display() {
    let span = Span::new(Position::new(1, 1, 0, 0), Position::new(2, 4, 5, 8));
    assert_eq!(span.to_string(), "1:1-2:4");
}

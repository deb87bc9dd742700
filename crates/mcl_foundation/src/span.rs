//! Source location tracking.
//!
//! A [`Position`] is an immutable snapshot of the lexer cursor. A [`Span`]
//! is a half-open range `[start, end)` between two positions and is carried
//! by every token and AST node for error reporting.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in source text.
///
/// `line` and `column` are 1-based, `offset` and `line_start_offset` are
/// 0-based byte offsets into the source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
    /// Byte offset of the first character of the current line.
    pub line_start_offset: usize,
    /// Byte offset of this position.
    pub offset: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: u32, column: u32, line_start_offset: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            line_start_offset,
            offset,
        }
    }

    /// Creates the position of the first character of a source buffer.
    #[must_use]
    pub const fn at_start() -> Self {
        Self::new(1, 1, 0, 0)
    }

    /// Returns the position after stepping over `current`.
    ///
    /// Stepping over a newline moves to column 1 of the next line. The
    /// offset grows by the UTF-8 width of `current` so that offsets stay
    /// valid byte indices even inside comments.
    #[must_use]
    pub const fn advance(self, current: char) -> Self {
        let mut next = self;
        if current == '\n' {
            next.line += 1;
            next.column = 0;
            next.line_start_offset = self.offset + 1;
        }
        next.column += 1;
        next.offset += current.len_utf8();
        next
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::at_start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open span of source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// Position of the first byte covered.
    pub start: Position,
    /// Position just past the last byte covered.
    pub end: Position,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Creates a zero-width span at `position`.
    #[must_use]
    pub const fn empty(position: Position) -> Self {
        Self::new(position, position)
    }

    /// Creates a span covering the range from this span to another.
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self::new(self.start, other.end)
    }

    /// Returns the length of this span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    /// Returns true if this span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Returns the text this span covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start.offset..self.end.offset]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

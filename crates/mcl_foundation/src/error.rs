//! Error types for the mcl pipeline.
//!
//! Uses `thiserror` for ergonomic error definition. Every error is fatal to
//! the current parse or evaluation and carries the source location needed
//! to report it.

use std::fmt;

use thiserror::Error;

use crate::span::{Position, Span};
use crate::types::IntegerType;

/// The main error type for mcl operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unexpected character error.
    #[must_use]
    pub fn unexpected_character(found: char, position: Position) -> Self {
        Self::new(ErrorKind::Lex {
            kind: LexErrorKind::UnexpectedCharacter(found),
            position,
        })
    }

    /// Creates an unterminated block comment error.
    #[must_use]
    pub fn unterminated_block_comment(position: Position) -> Self {
        Self::new(ErrorKind::Lex {
            kind: LexErrorKind::UnterminatedBlockComment,
            position,
        })
    }

    /// Creates an unexpected token error.
    #[must_use]
    pub fn unexpected_token(expected: &'static str, found: &'static str, position: Position) -> Self {
        Self::new(ErrorKind::Parse {
            expected,
            found,
            position,
        })
    }

    /// Creates a literal overflow error.
    #[must_use]
    pub fn overflow(literal: Span, target: IntegerType) -> Self {
        Self::new(ErrorKind::Overflow { literal, target })
    }

    /// Creates an arithmetic overflow error.
    #[must_use]
    pub fn arithmetic_overflow(operation: &'static str, lhs: u64, rhs: u64, span: Span) -> Self {
        Self::new(ErrorKind::ArithmeticOverflow {
            operation,
            lhs,
            rhs,
            span,
        })
    }

    /// Returns the source position this error points at.
    #[must_use]
    pub fn position(&self) -> Position {
        self.kind.position()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The source text could not be tokenized.
    #[error("lex error at {position}: {kind}")]
    Lex {
        /// What went wrong.
        kind: LexErrorKind,
        /// Where the offending input starts.
        position: Position,
    },

    /// The token stream does not match the grammar.
    #[error("parse error at {position}: expected {expected}, found {found}")]
    Parse {
        /// Name of the token kind the parser required.
        expected: &'static str,
        /// Name of the token kind actually found.
        found: &'static str,
        /// Start of the offending token.
        position: Position,
    },

    /// A literal does not fit its target integer type.
    #[error("integer literal at {} does not fit in {target}", .literal.start)]
    Overflow {
        /// Span of the literal digits.
        literal: Span,
        /// Type the literal was parsed as.
        target: IntegerType,
    },

    /// An infix operation left the working integer range.
    #[error("arithmetic overflow at {}: {lhs} {operation} {rhs}", .span.start)]
    ArithmeticOverflow {
        /// Operator symbol.
        operation: &'static str,
        /// Left operand.
        lhs: u64,
        /// Right operand.
        rhs: u64,
        /// Span of the infix expression.
        span: Span,
    },
}

impl ErrorKind {
    /// Returns the source position this error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lex { position, .. } | Self::Parse { position, .. } => *position,
            Self::Overflow { literal: span, .. } | Self::ArithmeticOverflow { span, .. } => {
                span.start
            }
        }
    }
}

/// Reasons the lexer can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that starts no token.
    UnexpectedCharacter(char),
    /// A `/*` comment with no closing `*/`.
    UnterminatedBlockComment,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(c) => write!(f, "unexpected character {c:?}"),
            Self::UnterminatedBlockComment => f.write_str("unterminated block comment"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// Text of the line the error points into.
    pub line_text: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the offending line from the full source text.
    #[must_use]
    pub fn with_line_of(mut self, text: &str, position: Position) -> Self {
        let start = position.line_start_offset.min(text.len());
        let rest = text.get(start..).unwrap_or_default();
        let line = rest.split('\n').next().unwrap_or_default();
        self.line_text = Some(line.trim_end_matches('\r').to_string());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(line) = &self.line_text {
            if self.source.is_some() {
                writeln!(f)?;
            }
            write!(f, "  | {line}")?;
        }
        Ok(())
    }
}

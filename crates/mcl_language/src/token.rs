//! Token types for mcl.
//!
//! Tokens are the output of the lexer and input to the parser. They carry
//! no parsed value; the parser reads literal digits back out of the source
//! through the token's span.

use std::fmt;

use mcl_foundation::Span;

/// A token from lexical analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// The type of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns true if this token marks the end of input.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }
}

/// Token types for mcl.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input
    EndOfInput,
    /// Decimal digits like `42`
    IntegerLiteral,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `;`
    Semicolon,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EndOfInput => "end of input",
            Self::IntegerLiteral => "integer literal",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Semicolon => "';'",
        }
    }

    /// Returns the binding power of this token when it appears in infix
    /// position.
    #[must_use]
    pub const fn binding_power(self) -> BindingPower {
        match self {
            Self::Plus | Self::Minus => BindingPower::left_assoc(1),
            Self::EndOfInput | Self::IntegerLiteral | Self::Semicolon => BindingPower::NONE,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Left and right binding power of an infix operator.
///
/// The left power decides whether an expression loop absorbs the operator;
/// the right power is the minimum passed to the recursive right-hand parse.
/// Tokens that are not operators have zero on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BindingPower {
    /// Power with which the operator binds to its left operand.
    pub left: u8,
    /// Power with which the operator binds to its right operand.
    pub right: u8,
}

impl BindingPower {
    /// Binding power of non-operator tokens.
    pub const NONE: Self = Self { left: 0, right: 0 };

    /// Creates a left-associative binding power.
    #[must_use]
    pub const fn left_assoc(precedence: u8) -> Self {
        Self {
            left: precedence,
            right: precedence + 1,
        }
    }
}

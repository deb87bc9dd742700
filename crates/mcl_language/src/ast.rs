//! Abstract Syntax Tree for mcl.
//!
//! An [`Expression`] is a strict tree: every infix node owns its two
//! children outright. Chains of operators nest one level per operator down
//! the left operand, so a long program yields a very deep tree. Dropping,
//! cloning, comparing, and counting therefore walk the tree with an explicit
//! stack instead of recursing.

use std::{fmt, mem};

use mcl_foundation::{IntegerType, Span};

use crate::token::TokenKind;

/// An expression node.
#[derive(Debug)]
pub enum Expression {
    /// Integer literal like `42`
    Literal {
        /// Type the literal was parsed as.
        ty: IntegerType,
        /// Value of the literal.
        value: u64,
        /// Source span of the digits.
        span: Span,
    },
    /// Binary operation like `1 + 2`
    Infix {
        /// The operator.
        op: InfixOp,
        /// Left operand.
        left: Box<Expression>,
        /// Right operand.
        right: Box<Expression>,
        /// Source span from the first digit of `left` to the end of `right`.
        span: Span,
    },
}

impl Expression {
    /// Creates a literal node.
    #[must_use]
    pub const fn literal(ty: IntegerType, value: u64, span: Span) -> Self {
        Self::Literal { ty, value, span }
    }

    /// Creates an infix node that takes ownership of both operands.
    #[must_use]
    pub fn infix(op: InfixOp, left: Expression, right: Expression, span: Span) -> Self {
        Self::Infix {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    /// Returns the source span of this node.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Literal { span, .. } | Self::Infix { span, .. } => *span,
        }
    }

    /// Returns true if this is a literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }

    /// Returns true if this is an infix operation.
    #[must_use]
    pub const fn is_infix(&self) -> bool {
        matches!(self, Self::Infix { .. })
    }

    /// Returns the value if this is a literal.
    #[must_use]
    pub const fn as_literal(&self) -> Option<u64> {
        match self {
            Self::Literal { value, .. } => Some(*value),
            Self::Infix { .. } => None,
        }
    }

    /// Returns the operator and operands if this is an infix operation.
    #[must_use]
    pub fn as_infix(&self) -> Option<(InfixOp, &Expression, &Expression)> {
        match self {
            Self::Infix {
                op, left, right, ..
            } => Some((*op, left, right)),
            Self::Literal { .. } => None,
        }
    }

    /// Returns the number of nodes in this tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            if let Self::Infix { left, right, .. } = node {
                stack.push(left);
                stack.push(right);
            }
        }
        count
    }

    /// Moves this node out, leaving a childless literal in its place.
    pub(crate) fn take(&mut self) -> Self {
        mem::replace(
            self,
            Self::Literal {
                ty: IntegerType::default(),
                value: 0,
                span: Span::default(),
            },
        )
    }

    /// Moves every infix child of this node onto `stack`.
    fn detach_children(&mut self, stack: &mut Vec<Expression>) {
        if let Self::Infix { left, right, .. } = self {
            for child in [left, right] {
                if child.is_infix() {
                    stack.push(child.take());
                }
            }
        }
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.detach_children(&mut stack);
        }
    }
}

impl Clone for Expression {
    fn clone(&self) -> Self {
        let mut spine = Vec::new();
        let mut node = self;
        let mut copy = loop {
            match node {
                Self::Literal { ty, value, span } => break Self::literal(*ty, *value, *span),
                Self::Infix {
                    op,
                    left,
                    right,
                    span,
                } => {
                    spine.push((*op, &**right, *span));
                    node = left;
                }
            }
        };
        while let Some((op, right, span)) = spine.pop() {
            copy = Self::infix(op, copy, right.clone(), span);
        }
        copy
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (
                    Self::Literal { ty, value, span },
                    Self::Literal {
                        ty: other_ty,
                        value: other_value,
                        span: other_span,
                    },
                ) => {
                    if (ty, value, span) != (other_ty, other_value, other_span) {
                        return false;
                    }
                }
                (
                    Self::Infix {
                        op,
                        left,
                        right,
                        span,
                    },
                    Self::Infix {
                        op: other_op,
                        left: other_left,
                        right: other_right,
                        span: other_span,
                    },
                ) => {
                    if (op, span) != (other_op, other_span) {
                        return false;
                    }
                    stack.push((left, other_left));
                    stack.push((right, other_right));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Expression {}

/// Infix operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InfixOp {
    /// `+`
    Plus,
    /// `-`
    Minus,
}

impl InfixOp {
    /// Returns the operator a token stands for, if any.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Plus),
            TokenKind::Minus => Some(Self::Minus),
            TokenKind::EndOfInput | TokenKind::IntegerLiteral | TokenKind::Semicolon => None,
        }
    }

    /// Returns the source symbol of this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }

    /// Returns a human-readable name for this operator.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plus => "addition",
            Self::Minus => "subtraction",
        }
    }

    /// Applies this operator, returning `None` if the result leaves the
    /// `u64` range.
    #[must_use]
    pub const fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Self::Plus => lhs.checked_add(rhs),
            Self::Minus => lhs.checked_sub(rhs),
        }
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

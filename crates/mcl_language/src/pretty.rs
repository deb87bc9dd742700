//! Human-readable dumps of tokens and expression trees.
//!
//! # Example
//!
//! ```
//! use mcl_language::{parse_one, pretty::dump_tree};
//!
//! let expr = parse_one("1 + 2;").unwrap();
//! assert_eq!(expr.to_string(), "(+ 1 2)");
//! assert_eq!(dump_tree(&expr), "Infix + @ 1:1-1:6\n    Literal 1: u64 @ 1:1-1:2\n    Literal 2: u64 @ 1:5-1:6\n");
//! ```

use std::fmt::{self, Write};

use crate::ast::Expression;
use crate::token::Token;

/// Number of spaces per tree level.
const INDENT_WIDTH: usize = 4;

/// A pending piece of s-expression output.
enum Piece<'a> {
    Node(&'a Expression),
    Text(&'static str),
}

/// Renders an expression as an s-expression, e.g. `(- (+ 1 2) 3)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Piece::Node(self)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(Self::Literal { value, .. }) => write!(f, "{value}")?,
                Piece::Node(Self::Infix {
                    op, left, right, ..
                }) => {
                    write!(f, "({op} ")?;
                    stack.push(Piece::Text(")"));
                    stack.push(Piece::Node(right));
                    stack.push(Piece::Text(" "));
                    stack.push(Piece::Node(left));
                }
            }
        }
        Ok(())
    }
}

/// Dumps an expression tree, one node per line, children indented below
/// their parent.
#[must_use]
pub fn dump_tree(expr: &Expression) -> String {
    let mut output = String::new();
    let mut stack = vec![(expr, 0)];
    while let Some((node, level)) = stack.pop() {
        let indent = level * INDENT_WIDTH;
        match node {
            Expression::Literal { ty, value, span } => {
                let _ = writeln!(output, "{:indent$}Literal {value}: {ty} @ {span}", "");
            }
            Expression::Infix {
                op,
                left,
                right,
                span,
            } => {
                let _ = writeln!(output, "{:indent$}Infix {op} @ {span}", "");
                stack.push((right, level + 1));
                stack.push((left, level + 1));
            }
        }
    }
    output
}

/// Dumps a token stream, one token per line with its source text.
#[must_use]
pub fn dump_tokens(tokens: &[Token], source: &str) -> String {
    let mut output = String::new();
    for token in tokens {
        let _ = writeln!(
            output,
            "{:<16} {:<12} {:?}",
            token.kind.name(),
            token.span.start.to_string(),
            token.text(source)
        );
    }
    output
}

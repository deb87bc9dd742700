//! Lexer, precedence-climbing parser, and evaluator for mcl.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of mcl source
//! - [`Parser`] - Parsing tokens into [`Expression`] trees
//! - [`evaluate`] - Folding a tree into its integer value
//! - [`parse_and_evaluate`] - The whole pipeline for one source buffer
//!
//! # Example
//!
//! ```
//! use mcl_language::parse_and_evaluate;
//!
//! let results = parse_and_evaluate("1 + 1; /* four */ 2 + 2;").unwrap();
//! assert_eq!(results, vec![2, 4]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod config;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod token;

pub use ast::{Expression, InfixOp};
pub use config::PipelineConfig;
pub use evaluator::{evaluate, evaluate_all, evaluate_all_with_config, evaluate_with_config};
pub use lexer::Lexer;
pub use parser::{Parser, parse, parse_one};
pub use token::{BindingPower, Token, TokenKind};

pub use mcl_foundation::{Error, ErrorKind, IntegerType, Position, Result, Span};

use tracing::debug;

/// Parses and evaluates every `;`-terminated statement in order.
///
/// # Errors
/// Returns the first lex, parse, overflow, or arithmetic error. Statements
/// before the failing one are evaluated but their results are discarded.
pub fn parse_and_evaluate(source: &str) -> Result<Vec<u64>> {
    parse_and_evaluate_with_config(source, &PipelineConfig::default())
}

/// Parses and evaluates every statement with an explicit configuration.
///
/// Each statement is evaluated as soon as it is parsed, so an error in a
/// later statement is reported only after the earlier ones evaluated.
///
/// # Errors
/// Returns the first error encountered.
pub fn parse_and_evaluate_with_config(source: &str, config: &PipelineConfig) -> Result<Vec<u64>> {
    let mut parser = Parser::with_config(source, config.clone())?;
    let mut results = Vec::new();
    while !parser.is_at_end() {
        let expr = parser.parse_statement()?;
        let span = expr.span();
        let value = evaluate_with_config(expr, config)?;
        debug!(%span, value, "evaluated statement");
        results.push(value);
    }
    Ok(results)
}

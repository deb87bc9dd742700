//! Tree-walking evaluator for mcl.
//!
//! Evaluation consumes the tree: each subtree is folded into its value and
//! dropped before its parent finishes. A tree can therefore be evaluated
//! only once; clone it first to keep a copy.

use mcl_foundation::{Error, Result};
use tracing::debug;

use crate::ast::Expression;
use crate::config::PipelineConfig;

/// Evaluates an expression with the default configuration.
///
/// # Errors
/// Returns an arithmetic overflow error if any operation leaves the `u64`
/// range.
pub fn evaluate(expr: Expression) -> Result<u64> {
    evaluate_with_config(expr, &PipelineConfig::default())
}

/// Evaluates an expression, keeping every intermediate result within the
/// configured literal type.
///
/// # Errors
/// Returns an arithmetic overflow error if any operation leaves the range
/// `0..=config.max_value()`.
pub fn evaluate_with_config(expr: Expression, config: &PipelineConfig) -> Result<u64> {
    let max = config.max_value();
    fold(expr, max)
}

/// Evaluates each statement in order with the default configuration.
///
/// # Errors
/// Returns the first evaluation error; later statements are dropped
/// unevaluated.
pub fn evaluate_all(statements: Vec<Expression>) -> Result<Vec<u64>> {
    evaluate_all_with_config(statements, &PipelineConfig::default())
}

/// Evaluates each statement in order, keeping every result within the
/// configured literal type.
///
/// # Errors
/// Returns the first evaluation error; later statements are dropped
/// unevaluated.
pub fn evaluate_all_with_config(
    statements: Vec<Expression>,
    config: &PipelineConfig,
) -> Result<Vec<u64>> {
    statements
        .into_iter()
        .map(|expr| {
            let span = expr.span();
            let value = evaluate_with_config(expr, config)?;
            debug!(%span, value, "evaluated statement");
            Ok(value)
        })
        .collect()
}

/// Folds a tree bottom-up.
///
/// The left spine is walked with a loop and its right operands are queued,
/// so only right operands recurse. The parser always makes those literals.
fn fold(expr: Expression, max: u64) -> Result<u64> {
    let mut pending = Vec::new();
    let mut node = expr;
    let mut acc = loop {
        match &mut node {
            Expression::Literal { value, .. } => break *value,
            Expression::Infix {
                op,
                left,
                right,
                span,
            } => {
                pending.push((*op, right.take(), *span));
                let next = left.take();
                node = next;
            }
        }
    };

    while let Some((op, right, span)) = pending.pop() {
        let rhs = fold(right, max)?;
        acc = op
            .apply(acc, rhs)
            .filter(|&value| value <= max)
            .ok_or_else(|| Error::arithmetic_overflow(op.symbol(), acc, rhs, span))?;
    }
    Ok(acc)
}

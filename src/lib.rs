//! mcl - integer expression language front end
//!
//! This crate re-exports all layers of the mcl system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: mcl_runtime    - Source loading, CLI driver
//! Layer 1: mcl_language   - Lexer, parser, AST, evaluator
//! Layer 0: mcl_foundation - Positions, spans, integer types, errors
//! ```

pub use mcl_foundation as foundation;
pub use mcl_language as language;
pub use mcl_runtime as runtime;

pub use mcl_language::parse_and_evaluate;

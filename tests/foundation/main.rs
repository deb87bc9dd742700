//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Position, Span, IntegerType, and Error.

mod errors;
mod spans;
mod types;

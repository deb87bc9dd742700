//! Source positions, integer types, and errors for mcl.
//!
//! This crate provides:
//! - [`Position`] and [`Span`] - Source location tracking
//! - [`IntegerType`] - The fixed-width integer types of the language
//! - [`Error`] - Structured pipeline errors with source locations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod span;
pub mod types;

pub use error::{Error, ErrorContext, ErrorKind, LexErrorKind};
pub use span::{Position, Span};
pub use types::{IntegerType, UnknownIntegerType};

/// Result type for mcl operations.
pub type Result<T> = std::result::Result<T, Error>;

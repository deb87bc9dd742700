//! Source loading and command-line driver for mcl.
//!
//! This crate provides:
//! - [`load_source`] - Reading a source file into memory
//! - [`Runner`] - Running a file or in-memory source through the pipeline
//! - [`RuntimeError`] - Loader and pipeline errors with terminal rendering

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod runner;

pub use error::{RuntimeError, RuntimeResult};
pub use runner::{Runner, load_source};

//! Running mcl source from files or memory.

use std::fs;
use std::path::Path;

use mcl_foundation::{Error, ErrorContext};
use mcl_language::pretty::{dump_tokens, dump_tree};
use mcl_language::{Lexer, Parser, PipelineConfig, parse_and_evaluate_with_config};
use tracing::{debug, info};

use crate::error::{RuntimeError, RuntimeResult};

/// Reads a whole source file into memory.
///
/// # Errors
/// Returns [`RuntimeError::Io`] if the file cannot be read.
pub fn load_source(path: &Path) -> RuntimeResult<String> {
    debug!(path = %path.display(), "loading source");
    fs::read_to_string(path).map_err(|source| RuntimeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs source text through the pipeline under one configuration.
#[derive(Clone, Debug, Default)]
pub struct Runner {
    config: PipelineConfig,
}

impl Runner {
    /// Creates a runner with the given configuration.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Returns the pipeline configuration.
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Evaluates every statement of a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or its source fails.
    pub fn run_file(&self, path: &Path) -> RuntimeResult<Vec<u64>> {
        let source = load_source(path)?;
        self.run_source(&path.display().to_string(), &source)
    }

    /// Evaluates every statement of an in-memory source.
    ///
    /// `name` labels the source in error messages.
    ///
    /// # Errors
    /// Returns the first language error, annotated with `name` and the
    /// offending line.
    pub fn run_source(&self, name: &str, source: &str) -> RuntimeResult<Vec<u64>> {
        let results = parse_and_evaluate_with_config(source, &self.config)
            .map_err(|err| annotate(err, name, source))?;
        info!(source = name, statements = results.len(), "evaluated");
        Ok(results)
    }

    /// Dumps the token stream of a source, one token per line.
    ///
    /// # Errors
    /// Returns the first lex error.
    pub fn tokens(&self, name: &str, source: &str) -> RuntimeResult<String> {
        let tokens = Lexer::tokenize_all(source).map_err(|err| annotate(err, name, source))?;
        Ok(dump_tokens(&tokens, source))
    }

    /// Dumps the expression tree of every statement.
    ///
    /// # Errors
    /// Returns the first lex, parse, or literal overflow error.
    pub fn trees(&self, name: &str, source: &str) -> RuntimeResult<String> {
        let statements = Parser::with_config(source, self.config.clone())
            .and_then(|mut parser| parser.parse_program())
            .map_err(|err| annotate(err, name, source))?;
        Ok(statements.iter().map(dump_tree).collect())
    }
}

/// Attaches the source name and offending line to an error.
fn annotate(err: Error, name: &str, source: &str) -> RuntimeError {
    let position = err.position();
    RuntimeError::from(err.with_context(
        ErrorContext::new()
            .with_source(name)
            .with_line_of(source, position),
    ))
}

//! Errors raised while loading and running source files.

use std::fmt::Write;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the runtime layer.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A source file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// The source failed to lex, parse, or evaluate.
    #[error(transparent)]
    Language(#[from] mcl_foundation::Error),
}

impl RuntimeError {
    /// Renders this error for a terminal: `source:line:column: message`
    /// followed by the offending line when it is known.
    #[must_use]
    pub fn render(&self) -> String {
        let Self::Language(err) = self else {
            return self.to_string();
        };

        let position = err.position();
        let mut output = String::new();
        let source = err
            .context
            .as_ref()
            .and_then(|ctx| ctx.source.as_deref())
            .unwrap_or("<input>");
        let _ = write!(output, "{source}:{position}: {}", err.kind);

        if let Some(line) = err.context.as_ref().and_then(|ctx| ctx.line_text.as_deref()) {
            let gutter = position.line.to_string();
            let caret = usize::try_from(position.column.saturating_sub(1)).unwrap_or(0);
            let _ = write!(output, "\n{gutter} | {line}");
            let _ = write!(output, "\n{:width$} | {:caret$}^", "", "", width = gutter.len());
        }
        output
    }
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = std::result::Result<T, RuntimeError>;

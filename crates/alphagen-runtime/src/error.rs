//! Runtime error types.

use alphagen_core::{AlphabetError, SinkError, SourceError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur during runtime operations.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An input was rejected by the extractor.
    #[error("Invalid input '{source_name}'")]
    Alphabet {
        /// Name of the offending source.
        source_name: String,
        #[source]
        error: AlphabetError,
    },

    /// An input could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The output could not be written.
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// Rendering the JSON output failed.
    #[error("Failed to render JSON output: {0}")]
    Render(#[from] serde_json::Error),

    /// `run` was called without any source.
    #[error("No input sources given")]
    NoInput,
}

impl RuntimeError {
    /// Wraps an extractor error for the named source.
    pub fn alphabet(source_name: impl Into<String>, error: AlphabetError) -> Self {
        Self::Alphabet {
            source_name: source_name.into(),
            error,
        }
    }
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;


#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_alphabet_error_cause_is_only_in_source() {
        let err = RuntimeError::alphabet(
            "notes.json",
            AlphabetError::invalid_argument("expected a string, got null"),
        );

        assert_eq!(err.to_string(), "Invalid input 'notes.json'");
        let cause = err.source().map(|e| e.to_string()).unwrap_or_default();
        assert!(cause.contains("expected a string, got null"), "{cause}");
    }
}

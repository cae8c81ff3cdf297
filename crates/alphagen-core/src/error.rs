//! Unified error types for alphagen core.
//!
//! The extraction algorithm itself has exactly one failure mode
//! ([`AlphabetError::InvalidArgument`]). Collaborator errors (reading input,
//! writing output) are kept separate so that callers can tell a bad value
//! apart from a broken pipe.

use thiserror::Error;

// =============================================================================
// Alphabet Errors
// =============================================================================

/// Errors raised by alphabet extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// The input is not a valid text value.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the value was rejected.
        reason: String,
    },
}

impl AlphabetError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Collaborator Errors
// =============================================================================

/// Errors that can occur while reading from a [`TextSource`](crate::TextSource).
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The named input does not exist.
    #[error("input '{0}' not found")]
    NotFound(String),

    /// I/O error while reading.
    #[error("failed to read '{name}': {reason}")]
    Io {
        /// Name of the source.
        name: String,
        /// Underlying error message.
        reason: String,
    },
}

impl SourceError {
    /// Maps an I/O error for the named source.
    pub fn io(name: impl Into<String>, err: &std::io::Error) -> Self {
        let name = name.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(name)
        } else {
            Self::Io {
                name,
                reason: err.to_string(),
            }
        }
    }
}

/// Errors that can occur while writing to an [`AlphabetSink`](crate::AlphabetSink).
#[derive(Debug, Clone, Error)]
pub enum SinkError {
    /// I/O error while writing.
    #[error("failed to write '{name}': {reason}")]
    Io {
        /// Name of the sink.
        name: String,
        /// Underlying error message.
        reason: String,
    },
}

impl SinkError {
    /// Maps an I/O error for the named sink.
    pub fn io(name: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Io {
            name: name.into(),
            reason: err.to_string(),
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for extraction operations.
pub type AlphabetResult<T> = Result<T, AlphabetError>;

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

//! Error types for calluna.

use thiserror::Error;

/// Errors surfaced by the search engine.
///
/// Every operation either fully succeeds or fails with one of these kinds;
/// nothing is retried internally and a failed call leaves no side effect.
#[derive(Debug, Error)]
pub enum CallunaError {
    /// A document ID or posting lookup missed.
    #[error("not found: {0}")]
    NotFound(String),

    /// A query requested a boolean operator the engine does not evaluate.
    #[error("unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// A caller-supplied argument was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CallunaError {
    /// Create a not-found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        CallunaError::NotFound(msg.into())
    }

    /// Create an unsupported-operator error.
    pub fn unsupported_operator(msg: impl Into<String>) -> Self {
        CallunaError::UnsupportedOperator(msg.into())
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        CallunaError::InvalidArgument(msg.into())
    }
}

/// Result type for calluna operations.
pub type Result<T> = std::result::Result<T, CallunaError>;

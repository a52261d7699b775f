//! Core error types for the Gremlin remote driver
//!
//! Errors raised while building requests or converting values. Transport
//! failures are defined by the SDK, which wraps these.

/// Core error type
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A value was not of the kind the caller asked for
    #[error("Unexpected value: expected {expected}, got {actual}")]
    UnexpectedValue {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Result type alias for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

//! Error types for the Gremlin remote SDK

// Re-export core error types
pub use gremlin_remote_core::CoreError;

/// Main error type for the Gremlin remote SDK
///
/// Transports report failures with these variants and the connection
/// returns them to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// Could not reach the server or the connection dropped mid-request
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server answered with an error status
    #[error("Server error {status_code}: {message}")]
    Server { status_code: u16, message: String },

    /// The response could not be decoded
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request did not complete in time
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The request was cancelled before a response arrived
    #[error("Request cancelled")]
    Cancelled,

    /// The connection was closed before or during the request
    #[error("Connection closed")]
    ConnectionClosed,

    /// A result element could not be converted into the requested type
    #[error("Unexpected result: {0}")]
    UnexpectedResult(CoreError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Gremlin remote SDK operations
pub type Result<T> = std::result::Result<T, RemoteError>;

impl From<CoreError> for RemoteError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Serialization(e) => RemoteError::Serialization(e),
            e @ CoreError::UnexpectedValue { .. } => RemoteError::UnexpectedResult(e),
        }
    }
}

impl From<crate::config::ConfigError> for RemoteError {
    fn from(err: crate::config::ConfigError) -> Self {
        RemoteError::InvalidConfiguration(err.to_string())
    }
}

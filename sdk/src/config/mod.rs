//! Configuration for remote connections
//!
//! The configuration is fixed when a connection is built and read-only
//! afterwards, so concurrent submissions share it without locking.

use gremlin_remote_core::tokens::DEFAULT_TRAVERSAL_SOURCE;

/// Error type for configuration validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A provided value is not acceptable
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Configuration for a [`DriverRemoteConnection`](crate::client::DriverRemoteConnection)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConnectionConfig {
    /// Name of the traversal source on the server that `g` is bound to
    pub traversal_source: String,
}

impl Default for RemoteConnectionConfig {
    fn default() -> Self {
        Self {
            traversal_source: DEFAULT_TRAVERSAL_SOURCE.to_string(),
        }
    }
}

impl RemoteConnectionConfig {
    /// Create a new configuration with validation
    pub fn new(traversal_source: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self {
            traversal_source: traversal_source.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.traversal_source.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "traversal_source must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

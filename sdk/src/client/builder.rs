//! DriverRemoteConnection builder for fluent configuration

use crate::client::connection::DriverRemoteConnection;
use crate::client::hook::{CompositeSubmissionHook, SubmissionHook};
use crate::config::RemoteConnectionConfig;
use crate::error::{RemoteError, Result};
use crate::transport::GremlinTransport;
use std::sync::Arc;

/// Builder for creating DriverRemoteConnection instances
///
/// Example:
/// ```ignore
/// let connection = DriverRemoteConnection::builder()
///     .transport(my_transport)
///     .traversal_source("gmodern")
///     .register_hook(LoggingHook)
///     .build()?;
/// ```
pub struct DriverRemoteConnectionBuilder {
    transport: Option<Box<dyn GremlinTransport>>,
    config: RemoteConnectionConfig,
    hooks: Vec<Box<dyn SubmissionHook>>,
}

impl Default for DriverRemoteConnectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverRemoteConnectionBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            transport: None,
            config: RemoteConnectionConfig::default(),
            hooks: Vec::new(),
        }
    }

    /// Set the transport that performs the network round trips
    ///
    /// Required. The connection takes ownership of it.
    pub fn transport(mut self, transport: impl GremlinTransport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Set a boxed transport
    pub fn boxed_transport(mut self, transport: Box<dyn GremlinTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the name of the traversal source on the server
    ///
    /// Default: "g"
    pub fn traversal_source(mut self, traversal_source: impl Into<String>) -> Self {
        self.config.traversal_source = traversal_source.into();
        self
    }

    /// Set the complete connection configuration
    pub fn config(mut self, config: RemoteConnectionConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a submission hook for observability
    pub fn register_hook(mut self, hook: impl SubmissionHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Build the connection
    ///
    /// Fails if no transport was set or the configuration is invalid.
    pub fn build(self) -> Result<DriverRemoteConnection> {
        let transport = self.transport.ok_or_else(|| {
            RemoteError::InvalidConfiguration("transport is required".to_string())
        })?;
        self.config.validate()?;

        let hook: Option<Arc<dyn SubmissionHook>> = match self.hooks.len() {
            0 => None,
            _ => Some(Arc::new(CompositeSubmissionHook::new(self.hooks))),
        };

        Ok(DriverRemoteConnection::from_parts(
            transport,
            self.config,
            hook,
        ))
    }
}

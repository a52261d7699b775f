//! DriverRemoteConnection - submits traversal bytecode to a Gremlin server
//!
//! The connection turns a [`Bytecode`] into a correlated request, hands it to
//! the transport and wraps the response in a [`RemoteTraversal`] bound to the
//! same request id.

use crate::client::builder::DriverRemoteConnectionBuilder;
use crate::client::hook::SubmissionHook;
use crate::config::RemoteConnectionConfig;
use crate::error::Result;
use crate::transport::{GremlinTransport, TransportHandle};
use crate::traversal::RemoteTraversal;
use gremlin_remote_core::{build_bytecode_request, Bytecode};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Remote connection to a traversal source on a Gremlin server.
///
/// The connection owns its transport and closes it exactly once, either by
/// [`close`](Self::close) or when dropped. It is otherwise stateless, so one
/// connection can serve many concurrent submissions.
pub struct DriverRemoteConnection {
    pub(crate) transport: Arc<TransportHandle>,
    pub(crate) config: RemoteConnectionConfig,
    pub(crate) hook: Option<Arc<dyn SubmissionHook>>,
}

impl DriverRemoteConnection {
    /// Connect `g` to the server's default traversal source, `"g"`.
    pub fn new(transport: impl GremlinTransport + 'static) -> Self {
        Self::from_parts(
            Box::new(transport),
            RemoteConnectionConfig::default(),
            None,
        )
    }

    /// Connect `g` to the named traversal source.
    ///
    /// Fails if the name is empty.
    pub fn with_traversal_source(
        transport: impl GremlinTransport + 'static,
        traversal_source: impl Into<String>,
    ) -> Result<Self> {
        let config = RemoteConnectionConfig::new(traversal_source)?;
        Ok(Self::from_parts(Box::new(transport), config, None))
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> DriverRemoteConnectionBuilder {
        DriverRemoteConnectionBuilder::new()
    }

    pub(crate) fn from_parts(
        transport: Box<dyn GremlinTransport>,
        config: RemoteConnectionConfig,
        hook: Option<Arc<dyn SubmissionHook>>,
    ) -> Self {
        Self {
            transport: Arc::new(TransportHandle::new(transport)),
            config,
            hook,
        }
    }

    /// Name of the server-side traversal source `g` is bound to
    pub fn traversal_source(&self) -> &str {
        &self.config.traversal_source
    }

    pub fn config(&self) -> &RemoteConnectionConfig {
        &self.config
    }

    pub fn is_closed(&self) -> bool {
        self.transport.is_closed()
    }

    /// Submit bytecode for evaluation on the server.
    ///
    /// Every call uses a new request id. Transport errors are returned as
    /// they are; nothing is retried.
    pub async fn submit<S, E>(&self, bytecode: &Bytecode) -> Result<RemoteTraversal<S, E>> {
        let request_id = Uuid::new_v4();
        let request = build_bytecode_request(request_id, bytecode, self.traversal_source());
        debug!(
            request_id = %request_id,
            traversal = %bytecode,
            args = ?request.argument_keys(),
            "Submitting traversal"
        );

        if let Some(hook) = &self.hook {
            hook.on_request_submitted(request_id, &request).await;
        }

        let results = match self.transport.submit(request).await {
            Ok(results) => results,
            Err(e) => {
                warn!(request_id = %request_id, error = %e, "Traversal submission failed");
                if let Some(hook) = &self.hook {
                    hook.on_submission_failed(request_id, &e).await;
                }
                return Err(e);
            }
        };

        let (result_hint, _) = results.size_hint();
        debug!(request_id = %request_id, result_hint, "Traversal response received");
        if let Some(hook) = &self.hook {
            hook.on_response_received(request_id, result_hint).await;
        }

        Ok(RemoteTraversal::new(
            request_id,
            results,
            Arc::clone(&self.transport),
        ))
    }

    /// Close the transport.
    ///
    /// Later submissions, and side-effect requests of traversals already
    /// returned, fail with
    /// [`RemoteError::ConnectionClosed`](crate::error::RemoteError::ConnectionClosed).
    pub fn close(&self) {
        if self.transport.close() {
            info!(traversal_source = %self.config.traversal_source, "Remote connection closed");
        }
    }
}

impl Drop for DriverRemoteConnection {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for DriverRemoteConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverRemoteConnection")
            .field("traversal_source", &self.config.traversal_source)
            .field("closed", &self.is_closed())
            .field("has_hook", &self.hook.is_some())
            .finish()
    }
}

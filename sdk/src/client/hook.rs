//! Submission hooks for observability
//!
//! Hooks receive notifications about traversal submissions and can be used
//! for logging, metrics, monitoring, etc. They observe requests; they cannot
//! change them.

use crate::error::RemoteError;
use async_trait::async_trait;
use gremlin_remote_core::RequestMessage;
use uuid::Uuid;

/// Hook trait for observing traversal submissions
///
/// Implementations can be registered with
/// [`DriverRemoteConnectionBuilder`](crate::client::DriverRemoteConnectionBuilder)
/// to be told about every request sent and every response received.
#[async_trait]
pub trait SubmissionHook: Send + Sync {
    /// Called after the request is built, before it is handed to the transport
    async fn on_request_submitted(&self, _request_id: Uuid, _request: &RequestMessage) {}

    /// Called when the transport returned a response
    ///
    /// `result_hint` is a lower bound on the number of traversers, taken from
    /// the result set's size hint. Lazily produced results report 0.
    async fn on_response_received(&self, _request_id: Uuid, _result_hint: usize) {}

    /// Called when the transport failed
    async fn on_submission_failed(&self, _request_id: Uuid, _error: &RemoteError) {}
}

/// Composite hook that delegates to multiple hooks
///
/// Used internally to support multiple hook registrations.
pub struct CompositeSubmissionHook {
    hooks: Vec<Box<dyn SubmissionHook>>,
}

impl CompositeSubmissionHook {
    /// Create a new composite hook from a list of hooks
    pub fn new(hooks: Vec<Box<dyn SubmissionHook>>) -> Self {
        Self { hooks }
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

#[async_trait]
impl SubmissionHook for CompositeSubmissionHook {
    async fn on_request_submitted(&self, request_id: Uuid, request: &RequestMessage) {
        for hook in &self.hooks {
            hook.on_request_submitted(request_id, request).await;
        }
    }

    async fn on_response_received(&self, request_id: Uuid, result_hint: usize) {
        for hook in &self.hooks {
            hook.on_response_received(request_id, result_hint).await;
        }
    }

    async fn on_submission_failed(&self, request_id: Uuid, error: &RemoteError) {
        for hook in &self.hooks {
            hook.on_submission_failed(request_id, error).await;
        }
    }
}

/// No-op hook that does nothing
///
/// Useful as a default when no hook is needed.
pub struct NoOpHook;

#[async_trait]
impl SubmissionHook for NoOpHook {}

/// Logging hook that writes submission events through `tracing`
pub struct LoggingHook;

#[async_trait]
impl SubmissionHook for LoggingHook {
    async fn on_request_submitted(&self, request_id: Uuid, request: &RequestMessage) {
        tracing::info!(
            request_id = %request_id,
            op = request.operation(),
            processor = request.processor(),
            args = ?request.argument_keys(),
            "Traversal submitted"
        );
    }

    async fn on_response_received(&self, request_id: Uuid, result_hint: usize) {
        tracing::info!(request_id = %request_id, result_hint, "Traversal response received");
    }

    async fn on_submission_failed(&self, request_id: Uuid, error: &RemoteError) {
        tracing::error!(request_id = %request_id, error = %error, "Traversal submission failed");
    }
}

//! Transport seam between the SDK and the network client.
//!
//! The SDK never talks to the network itself. A [`GremlinTransport`]
//! performs the round trip for a [`RequestMessage`] and hands back the
//! traversers of the response. Connection pooling and multiplexing of
//! in-flight request ids are the transport's concern.

use crate::error::{RemoteError, Result};
use async_trait::async_trait;
use gremlin_remote_core::{GremlinValue, RequestMessage, Traverser};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Client that sends requests to a Gremlin server.
#[async_trait]
pub trait GremlinTransport: Send + Sync {
    /// Send the request and wait for its response.
    ///
    /// Errors are returned to the caller of
    /// [`DriverRemoteConnection::submit`](crate::client::DriverRemoteConnection::submit)
    /// as they are.
    async fn submit(&self, request: RequestMessage) -> Result<ResultSet>;

    /// Release connections held by the transport.
    ///
    /// Called at most once, when the owning connection is closed or dropped.
    fn close(&self) {}
}

/// Forward-only sequence of traversers returned for one request.
pub struct ResultSet {
    traversers: Box<dyn Iterator<Item = Traverser> + Send>,
    status_attributes: HashMap<String, GremlinValue>,
}

impl ResultSet {
    pub fn new(traversers: Vec<Traverser>) -> Self {
        Self::lazy(traversers.into_iter())
    }

    /// Wrap an iterator that produces traversers on demand.
    pub fn lazy<I>(traversers: I) -> Self
    where
        I: Iterator<Item = Traverser> + Send + 'static,
    {
        Self {
            traversers: Box::new(traversers),
            status_attributes: HashMap::new(),
        }
    }

    /// An empty result, as returned for requests that produce no values.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Attach the status attributes the server sent with the response.
    pub fn with_status_attributes(mut self, attributes: HashMap<String, GremlinValue>) -> Self {
        self.status_attributes = attributes;
        self
    }

    pub fn status_attributes(&self) -> &HashMap<String, GremlinValue> {
        &self.status_attributes
    }
}

impl FromIterator<Traverser> for ResultSet {
    fn from_iter<I: IntoIterator<Item = Traverser>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Iterator for ResultSet {
    type Item = Traverser;

    fn next(&mut self) -> Option<Traverser> {
        self.traversers.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.traversers.size_hint()
    }
}

impl fmt::Debug for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultSet")
            .field("remaining", &self.traversers.size_hint())
            .field("status_attributes", &self.status_attributes)
            .finish()
    }
}

/// Exclusive owner of a transport that closes it exactly once.
///
/// Shared between a connection and the traversals it produced. Requests
/// issued after [`close`](Self::close) fail with
/// [`RemoteError::ConnectionClosed`] without reaching the transport, and so
/// do requests still outstanding when it is closed.
pub(crate) struct TransportHandle {
    inner: Box<dyn GremlinTransport>,
    closed: AtomicBool,
}

impl TransportHandle {
    pub(crate) fn new(inner: Box<dyn GremlinTransport>) -> Self {
        Self {
            inner,
            closed: AtomicBool::new(false),
        }
    }

    pub(crate) async fn submit(&self, request: RequestMessage) -> Result<ResultSet> {
        if self.is_closed() {
            return Err(RemoteError::ConnectionClosed);
        }
        let results = self.inner.submit(request).await?;
        // closed while the request was outstanding
        if self.is_closed() {
            return Err(RemoteError::ConnectionClosed);
        }
        Ok(results)
    }

    /// Close the transport. Returns false if it was already closed.
    pub(crate) fn close(&self) -> bool {
        if self
            .closed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        self.inner.close();
        true
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

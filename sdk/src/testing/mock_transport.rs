//! Mock transport for testing code that submits traversals.

use crate::error::{RemoteError, Result};
use crate::transport::{GremlinTransport, ResultSet};
use async_trait::async_trait;
use gremlin_remote_core::tokens::{
    ARGS_SIDE_EFFECT, ARGS_SIDE_EFFECT_KEY, OPS_BYTECODE, OPS_CLOSE, OPS_GATHER, OPS_KEYS,
};
use gremlin_remote_core::{GremlinValue, RequestMessage, Traverser};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// In-memory implementation of [`GremlinTransport`].
///
/// This mock allows you to:
/// - Capture every request sent
/// - Script responses and failures for bytecode requests
/// - Serve side-effects per request id
/// - Count how often the transport was closed
///
/// Clones share state, so a test can keep one clone while the connection
/// owns another.
///
/// # Example
///
/// ```ignore
/// use gremlin_remote::testing::MockTransport;
///
/// let mock = MockTransport::new();
/// mock.push_response(vec![Traverser::single("marko")]);
///
/// let connection = DriverRemoteConnection::new(mock.clone());
/// let names = connection.submit::<Value, String>(&bytecode).await?.to_list()?;
///
/// assert_eq!(mock.request_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<MockTransportInner>,
}

#[derive(Default)]
struct MockTransportInner {
    requests: Mutex<Vec<RequestMessage>>,
    responses: Mutex<VecDeque<Result<Vec<Traverser>>>>,
    gather_responses: Mutex<VecDeque<Vec<Traverser>>>,
    side_effect_errors: Mutex<VecDeque<RemoteError>>,
    side_effects: Mutex<HashMap<Uuid, HashMap<String, GremlinValue>>>,
    latency: Mutex<Option<Duration>>,
    closes: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response by `latency`.
    pub fn with_latency(self, latency: Duration) -> Self {
        *self.inner.latency.lock() = Some(latency);
        self
    }

    /// Queue the traversers returned by the next bytecode request.
    ///
    /// Bytecode requests with nothing queued return no results.
    pub fn push_response(&self, traversers: Vec<Traverser>) {
        self.inner.responses.lock().push_back(Ok(traversers));
    }

    /// Queue a failure for the next bytecode request.
    pub fn push_error(&self, error: RemoteError) {
        self.inner.responses.lock().push_back(Err(error));
    }

    /// Queue the traversers returned by the next gather request.
    pub fn push_gather_response(&self, traversers: Vec<Traverser>) {
        self.inner.gather_responses.lock().push_back(traversers);
    }

    /// Queue a failure for the next keys, gather or close request.
    pub fn push_side_effect_error(&self, error: RemoteError) {
        self.inner.side_effect_errors.lock().push_back(error);
    }

    /// Make a side-effect available for the given request id.
    pub fn set_side_effect(&self, request_id: Uuid, key: impl Into<String>, value: GremlinValue) {
        self.inner
            .side_effects
            .lock()
            .entry(request_id)
            .or_default()
            .insert(key.into(), value);
    }

    /// All requests received, in order.
    pub fn requests(&self) -> Vec<RequestMessage> {
        self.inner.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<RequestMessage> {
        self.inner.requests.lock().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.inner.requests.lock().len()
    }

    pub fn close_count(&self) -> usize {
        self.inner.closes.load(Ordering::SeqCst)
    }

    fn side_effect_id(request: &RequestMessage) -> Result<Uuid> {
        match request.argument(ARGS_SIDE_EFFECT) {
            Some(GremlinValue::Uuid(id)) => Ok(*id),
            _ => Err(RemoteError::Server {
                status_code: 499,
                message: format!("{} request without {}", request.operation(), ARGS_SIDE_EFFECT),
            }),
        }
    }

    fn respond(&self, request: &RequestMessage) -> Result<ResultSet> {
        if matches!(request.operation(), OPS_KEYS | OPS_GATHER | OPS_CLOSE) {
            if let Some(error) = self.inner.side_effect_errors.lock().pop_front() {
                return Err(error);
            }
        }
        match request.operation() {
            OPS_BYTECODE => match self.inner.responses.lock().pop_front() {
                Some(Ok(traversers)) => Ok(ResultSet::new(traversers)),
                Some(Err(e)) => Err(e),
                None => Ok(ResultSet::empty()),
            },
            OPS_KEYS => {
                let id = Self::side_effect_id(request)?;
                let mut keys: Vec<String> = self
                    .inner
                    .side_effects
                    .lock()
                    .get(&id)
                    .map(|effects| effects.keys().cloned().collect())
                    .unwrap_or_default();
                keys.sort();
                Ok(keys.into_iter().map(Traverser::single).collect())
            }
            OPS_GATHER => {
                if let Some(traversers) = self.inner.gather_responses.lock().pop_front() {
                    return Ok(ResultSet::new(traversers));
                }
                let id = Self::side_effect_id(request)?;
                let key = request
                    .argument(ARGS_SIDE_EFFECT_KEY)
                    .and_then(GremlinValue::as_str)
                    .unwrap_or_default()
                    .to_string();
                let value = self
                    .inner
                    .side_effects
                    .lock()
                    .get(&id)
                    .and_then(|effects| effects.get(&key).cloned());
                match value {
                    Some(value) => Ok(ResultSet::new(vec![Traverser::single(value)])),
                    None => Err(RemoteError::Server {
                        status_code: 597,
                        message: format!("Side-effect '{key}' not found for {id}"),
                    }),
                }
            }
            OPS_CLOSE => {
                let id = Self::side_effect_id(request)?;
                self.inner.side_effects.lock().remove(&id);
                Ok(ResultSet::empty())
            }
            other => Err(RemoteError::Server {
                status_code: 499,
                message: format!("Unsupported operation: {other}"),
            }),
        }
    }
}

#[async_trait]
impl GremlinTransport for MockTransport {
    async fn submit(&self, request: RequestMessage) -> Result<ResultSet> {
        self.inner.requests.lock().push(request.clone());

        let latency = *self.inner.latency.lock();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        if self.close_count() > 0 {
            return Err(RemoteError::ConnectionClosed);
        }
        self.respond(&request)
    }

    fn close(&self) {
        self.inner.closes.fetch_add(1, Ordering::SeqCst);
    }
}

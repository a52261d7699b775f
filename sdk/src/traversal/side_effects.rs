//! Lazy access to the side-effects of a remote traversal.

use crate::error::{RemoteError, Result};
use crate::transport::TransportHandle;
use gremlin_remote_core::tokens::{
    ARGS_AGGREGATE_TO, ARGS_SIDE_EFFECT, ARGS_SIDE_EFFECT_KEY, OPS_CLOSE, OPS_GATHER, OPS_KEYS,
    PROCESSOR_TRAVERSAL, VAL_AGGREGATE_TO_LIST,
};
use gremlin_remote_core::{FromGremlinValue, GremlinValue, RequestMessage};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Side-effects of one submitted traversal, addressed by its request id.
///
/// Nothing is fetched until asked for. Values are cached once gathered, and
/// remain readable after [`close`](Self::close) releases them on the server.
pub struct RemoteSideEffects {
    request_id: Uuid,
    transport: Arc<TransportHandle>,
    cache: Mutex<HashMap<String, GremlinValue>>,
    closed: AtomicBool,
}

impl RemoteSideEffects {
    pub(crate) fn new(request_id: Uuid, transport: Arc<TransportHandle>) -> Self {
        Self {
            request_id,
            transport,
            cache: Mutex::new(HashMap::new()),
            closed: AtomicBool::new(false),
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn request(&self, operation: &str) -> gremlin_remote_core::RequestMessageBuilder {
        RequestMessage::build(operation)
            .processor(PROCESSOR_TRAVERSAL)
            .add_argument(ARGS_SIDE_EFFECT, self.request_id)
    }

    /// Names of the side-effects produced by the traversal.
    ///
    /// Once closed, only the keys already gathered are returned.
    pub async fn keys(&self) -> Result<Vec<String>> {
        if self.is_closed() {
            let mut keys: Vec<String> = self.cache.lock().keys().cloned().collect();
            keys.sort();
            return Ok(keys);
        }

        let results = self.transport.submit(self.request(OPS_KEYS).create()).await?;
        results
            .map(|t| String::from_gremlin(t.object).map_err(RemoteError::UnexpectedResult))
            .collect()
    }

    /// Value of the named side-effect.
    pub async fn get(&self, key: &str) -> Result<GremlinValue> {
        if let Some(value) = self.cache.lock().get(key) {
            return Ok(value.clone());
        }
        if self.is_closed() {
            return Err(RemoteError::Other(format!(
                "Side-effects of {} are closed; '{}' was never gathered",
                self.request_id, key
            )));
        }

        let request = self
            .request(OPS_GATHER)
            .add_argument(ARGS_SIDE_EFFECT_KEY, key)
            .add_argument(ARGS_AGGREGATE_TO, VAL_AGGREGATE_TO_LIST)
            .create();
        let mut objects: Vec<GremlinValue> = self
            .transport
            .submit(request)
            .await?
            .map(|t| t.object)
            .collect();

        let value = match objects.len() {
            0 => GremlinValue::Null,
            1 => objects.remove(0),
            _ => GremlinValue::List(objects),
        };
        debug!(request_id = %self.request_id, key, kind = value.kind(), "Gathered side-effect");
        self.cache.lock().insert(key.to_string(), value.clone());
        Ok(value)
    }

    /// Typed variant of [`get`](Self::get).
    pub async fn get_as<T: FromGremlinValue>(&self, key: &str) -> Result<T> {
        let value = self.get(key).await?;
        T::from_gremlin(value).map_err(RemoteError::UnexpectedResult)
    }

    /// Release the side-effects held by the server.
    ///
    /// Sent at most once successfully. A failed close leaves the handle open
    /// and can be retried.
    pub async fn close(&self) -> Result<()> {
        if self
            .closed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(());
        }
        if let Err(e) = self.transport.submit(self.request(OPS_CLOSE).create()).await {
            self.closed.store(false, Ordering::Release);
            return Err(e);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RemoteSideEffects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteSideEffects")
            .field("request_id", &self.request_id)
            .field("cached", &self.cache.lock().len())
            .field("closed", &self.is_closed())
            .finish()
    }
}

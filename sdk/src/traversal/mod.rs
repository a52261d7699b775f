//! Handles over the results of submitted traversals.

mod side_effects;

pub use side_effects::RemoteSideEffects;

use crate::error::{RemoteError, Result};
use crate::transport::{ResultSet, TransportHandle};
use gremlin_remote_core::{FromGremlinValue, GremlinValue, Traverser};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

/// Results of a traversal that was executed remotely.
///
/// `S` is the start type and `E` the end type of the traversal. Iterating
/// yields each traverser's object as many times as its bulk, converted to
/// `E`. Iteration is lazy and forward-only. Side-effects are fetched by
/// request id, so they stay reachable after the results are drained.
pub struct RemoteTraversal<S, E> {
    request_id: Uuid,
    results: ResultSet,
    pending: Option<Traverser>,
    side_effects: RemoteSideEffects,
    _types: PhantomData<fn(S) -> E>,
}

impl<S, E> RemoteTraversal<S, E> {
    pub(crate) fn new(request_id: Uuid, results: ResultSet, transport: Arc<TransportHandle>) -> Self {
        Self {
            request_id,
            results,
            pending: None,
            side_effects: RemoteSideEffects::new(request_id, transport),
            _types: PhantomData,
        }
    }

    /// Correlation id of the request that produced these results.
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn side_effects(&self) -> &RemoteSideEffects {
        &self.side_effects
    }

    /// Status attributes the server attached to the response.
    pub fn status_attributes(&self) -> &HashMap<String, GremlinValue> {
        self.results.status_attributes()
    }

    /// Whether another result is available, without consuming it.
    pub fn has_next(&mut self) -> bool {
        loop {
            if let Some(t) = &self.pending {
                if t.bulk > 0 {
                    return true;
                }
                self.pending = None;
            }
            match self.results.next() {
                Some(t) => self.pending = Some(t),
                None => return false,
            }
        }
    }

    /// Next raw traverser, with its remaining bulk.
    pub fn next_traverser(&mut self) -> Option<Traverser> {
        self.pending.take().or_else(|| self.results.next())
    }

    fn next_object(&mut self) -> Option<GremlinValue> {
        if !self.has_next() {
            return None;
        }
        let traverser = self.pending.as_mut()?;
        if traverser.bulk > 1 {
            traverser.bulk -= 1;
            Some(traverser.object.clone())
        } else {
            self.pending.take().map(|t| t.object)
        }
    }
}

impl<S, E: FromGremlinValue> RemoteTraversal<S, E> {
    /// Drain all remaining results.
    pub fn to_list(self) -> Result<Vec<E>> {
        self.collect()
    }
}

impl<S, E: FromGremlinValue> Iterator for RemoteTraversal<S, E> {
    type Item = Result<E>;

    fn next(&mut self) -> Option<Self::Item> {
        let object = self.next_object()?;
        Some(E::from_gremlin(object).map_err(RemoteError::UnexpectedResult))
    }
}

impl<S, E> fmt::Debug for RemoteTraversal<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteTraversal")
            .field("request_id", &self.request_id)
            .field("results", &self.results)
            .field("side_effects", &self.side_effects)
            .finish()
    }
}

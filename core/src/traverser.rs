//! Result elements returned by a remote traversal.

use crate::value::GremlinValue;
use serde::{Deserialize, Serialize};

/// A single result object together with its bulk (how many times it occurs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traverser {
    pub object: GremlinValue,
    pub bulk: i64,
}

impl Traverser {
    pub fn new(object: impl Into<GremlinValue>, bulk: i64) -> Self {
        Self {
            object: object.into(),
            bulk,
        }
    }

    /// Traverser with a bulk of one.
    pub fn single(object: impl Into<GremlinValue>) -> Self {
        Self::new(object, 1)
    }
}

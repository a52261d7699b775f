//! Request messages sent to a Gremlin server.

use crate::bytecode::Bytecode;
use crate::options::allowed_options;
use crate::tokens::{
    ARGS_ALIASES, ARGS_GREMLIN, DEFAULT_ALIAS, OPS_BYTECODE, PROCESSOR_TRAVERSAL,
};
use crate::value::GremlinValue;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// A fully built request.
///
/// Immutable once created. Transports take it by value so each message is
/// sent exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMessage {
    request_id: Uuid,
    op: String,
    processor: String,
    args: HashMap<String, GremlinValue>,
}

impl RequestMessage {
    /// Start building a request for the given operation.
    pub fn build(operation: impl Into<String>) -> RequestMessageBuilder {
        RequestMessageBuilder::new(operation)
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn operation(&self) -> &str {
        &self.op
    }

    pub fn processor(&self) -> &str {
        &self.processor
    }

    pub fn arguments(&self) -> &HashMap<String, GremlinValue> {
        &self.args
    }

    pub fn argument(&self, key: &str) -> Option<&GremlinValue> {
        self.args.get(key)
    }

    /// Argument keys in sorted order, for logging.
    pub fn argument_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.args.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Builder for [`RequestMessage`].
#[derive(Debug, Clone)]
pub struct RequestMessageBuilder {
    operation: String,
    processor: String,
    request_id: Option<Uuid>,
    args: HashMap<String, GremlinValue>,
}

impl RequestMessageBuilder {
    fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            processor: String::new(),
            request_id: None,
            args: HashMap::new(),
        }
    }

    /// Set the processor that handles the operation.
    ///
    /// Default: "" (the server's default processor)
    pub fn processor(mut self, processor: impl Into<String>) -> Self {
        self.processor = processor.into();
        self
    }

    /// Use the given id instead of generating one in [`create`](Self::create).
    pub fn override_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add an argument, replacing any previous value under the same key.
    pub fn add_argument(mut self, key: impl Into<String>, value: impl Into<GremlinValue>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    pub fn create(self) -> RequestMessage {
        RequestMessage {
            request_id: self.request_id.unwrap_or_else(Uuid::new_v4),
            op: self.operation,
            processor: self.processor,
            args: self.args,
        }
    }
}

/// Build the request that evaluates `bytecode` against `traversal_source`.
///
/// The arguments always hold the bytecode and the alias binding of `g` to the
/// traversal source, plus the allowed options of the traversal. No I/O.
pub fn build_bytecode_request(
    request_id: Uuid,
    bytecode: &Bytecode,
    traversal_source: &str,
) -> RequestMessage {
    let mut builder = RequestMessage::build(OPS_BYTECODE)
        .processor(PROCESSOR_TRAVERSAL)
        .override_request_id(request_id)
        .add_argument(ARGS_GREMLIN, bytecode.clone())
        .add_argument(
            ARGS_ALIASES,
            GremlinValue::string_map([(DEFAULT_ALIAS, traversal_source)]),
        );

    for (key, value) in allowed_options(bytecode) {
        builder = builder.add_argument(key, value.clone());
    }

    builder.create()
}

//! # Gremlin Remote Core
//!
//! Language-agnostic building blocks for submitting traversals to a remote
//! Gremlin server.
//!
//! This crate has no I/O and no async code. It describes *what* is sent; the
//! `gremlin-remote` SDK crate decides *how* it is sent.
//!
//! ## Modules
//!
//! - [`bytecode`] - Traversal bytecode and instructions
//! - [`value`] - Dynamically typed argument and result values
//! - [`strategy`] - Traversal strategies, including `OptionsStrategy`
//! - [`traverser`] - Result elements
//! - [`options`] - Selection of options forwarded as request arguments
//! - [`message`] - Request messages and the bytecode request builder
//! - [`tokens`] - Protocol operation, processor and argument names
//! - [`error`] - Core error types

pub mod bytecode;
pub mod error;
pub mod message;
pub mod options;
pub mod strategy;
pub mod tokens;
pub mod traverser;
pub mod value;

// Re-export error types
pub use error::{CoreError, CoreResult};

// Re-export model types
pub use bytecode::{Bytecode, Instruction};
pub use strategy::{OptionsStrategy, TraversalStrategy};
pub use traverser::Traverser;
pub use value::{FromGremlinValue, GremlinValue};

// Re-export request types
pub use message::{build_bytecode_request, RequestMessage, RequestMessageBuilder};
pub use options::{allowed_options, find_options_strategy, is_allowed_key, ALLOWED_KEYS};

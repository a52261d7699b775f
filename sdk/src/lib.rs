//! Gremlin Remote SDK for Rust
//!
//! This SDK submits traversal bytecode to a remote Gremlin server and exposes
//! the results and side-effects as if the traversal ran locally. The network
//! round trip is delegated to a [`GremlinTransport`].
//!
//! ```ignore
//! let connection = DriverRemoteConnection::with_traversal_source(transport, "gmodern")?;
//!
//! let bytecode = Bytecode::new()
//!     .with_strategies([OptionsStrategy::new().with("evaluationTimeout", 500_i64)])
//!     .with_step("V", Vec::<GremlinValue>::new())
//!     .with_step("values", ["name"]);
//!
//! let names: Vec<String> = connection
//!     .submit::<GremlinValue, String>(&bytecode)
//!     .await?
//!     .to_list()?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod traversal;

/// Testing utilities for code that submits traversals.
/// Available only with the `testing` feature enabled.
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export core model types
pub use gremlin_remote_core::{
    tokens, Bytecode, FromGremlinValue, GremlinValue, Instruction, OptionsStrategy,
    RequestMessage, TraversalStrategy, Traverser, ALLOWED_KEYS,
};

// Re-export error and config types
pub use config::{ConfigError, RemoteConnectionConfig};
pub use error::{RemoteError, Result};

// Re-export client types
pub use client::{
    CompositeSubmissionHook, DriverRemoteConnection, DriverRemoteConnectionBuilder, LoggingHook,
    NoOpHook, SubmissionHook,
};
pub use transport::{GremlinTransport, ResultSet};
pub use traversal::{RemoteSideEffects, RemoteTraversal};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{
        DriverRemoteConnection, DriverRemoteConnectionBuilder, LoggingHook, NoOpHook,
        SubmissionHook,
    };
    pub use crate::config::RemoteConnectionConfig;
    pub use crate::error::{RemoteError, Result};
    pub use crate::transport::{GremlinTransport, ResultSet};
    pub use crate::traversal::{RemoteSideEffects, RemoteTraversal};
    pub use async_trait::async_trait;
    pub use gremlin_remote_core::{
        Bytecode, FromGremlinValue, GremlinValue, OptionsStrategy, RequestMessage,
        TraversalStrategy, Traverser,
    };
    pub use uuid::Uuid;
}

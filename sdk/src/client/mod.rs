//! Client for submitting traversals to a Gremlin server

pub mod builder;
pub mod connection;
pub mod hook;

pub use builder::DriverRemoteConnectionBuilder;
pub use connection::DriverRemoteConnection;
pub use hook::{CompositeSubmissionHook, LoggingHook, NoOpHook, SubmissionHook};

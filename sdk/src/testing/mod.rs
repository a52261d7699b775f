//! Testing utilities for code that submits remote traversals.
//!
//! Available with the `testing` feature.

mod mock_transport;

pub use mock_transport::MockTransport;

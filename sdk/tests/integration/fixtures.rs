//! Bytecode fixtures shared by the integration tests.

use gremlin_remote::prelude::*;
use gremlin_remote::testing::MockTransport;

pub fn no_args() -> Vec<GremlinValue> {
    Vec::new()
}

/// `g.V().values('name')`
pub fn names_of_all_vertices() -> Bytecode {
    Bytecode::new()
        .with_step("V", no_args())
        .with_step("values", ["name"])
}

/// `g.withStrategies(OptionsStrategy(...)).V().count()`
pub fn count_with_options(options: OptionsStrategy) -> Bytecode {
    Bytecode::new()
        .with_strategies([options])
        .with_step("V", no_args())
        .with_step("count", no_args())
}

/// A connection bound to `traversal_source`, plus a handle on its transport.
pub fn connection(traversal_source: &str) -> (DriverRemoteConnection, MockTransport) {
    super::init_tracing();
    let mock = MockTransport::new();
    let connection = DriverRemoteConnection::builder()
        .transport(mock.clone())
        .traversal_source(traversal_source)
        .register_hook(LoggingHook)
        .build()
        .expect("connection should build");
    (connection, mock)
}

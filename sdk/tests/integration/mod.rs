//! Integration tests for gremlin-remote
//!
//! These tests drive `DriverRemoteConnection` end to end against the
//! in-memory `MockTransport`, so they need no server.
//!
//! ```bash
//! cargo test --test integration -p gremlin-remote
//! ```

mod fixtures;
mod side_effect_tests;
mod submission_tests;

/// Initialize tracing once for all tests
static TRACING_INITIALIZED: std::sync::Once = std::sync::Once::new();

pub fn init_tracing() {
    TRACING_INITIALIZED.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

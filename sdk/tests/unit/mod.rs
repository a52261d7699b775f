//! Property-based tests for gremlin-remote
//!
//! ```bash
//! cargo test --test unit -p gremlin-remote
//! ```

mod correlation_props;
mod options_props;

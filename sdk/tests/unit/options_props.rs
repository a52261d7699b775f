//! Property-based tests for option forwarding
//!
//! These tests use proptest to verify that only allow-listed option keys
//! reach the server, whatever else the caller puts in an OptionsStrategy.

use gremlin_remote::prelude::*;
use gremlin_remote::testing::MockTransport;
use gremlin_remote::ALLOWED_KEYS;
use proptest::prelude::*;
use std::collections::HashMap;

/// Generate an arbitrary option value
fn arb_value() -> impl Strategy<Value = GremlinValue> {
    prop_oneof![
        any::<bool>().prop_map(GremlinValue::Boolean),
        any::<i32>().prop_map(GremlinValue::Int),
        any::<i64>().prop_map(GremlinValue::Long),
        "[a-zA-Z0-9 ]{0,12}".prop_map(GremlinValue::String),
    ]
}

/// Generate an option key that is either allow-listed or arbitrary
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(ALLOWED_KEYS).prop_map(str::to_string),
        "[a-zA-Z]{1,16}",
    ]
}

fn arb_configuration() -> impl Strategy<Value = HashMap<String, GremlinValue>> {
    prop::collection::hash_map(arb_key(), arb_value(), 0..12)
}

/// Submit `bytecode` on a fresh connection and return the request sent.
fn submitted_request(bytecode: &Bytecode, traversal_source: &str) -> RequestMessage {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime");
    let mock = MockTransport::new();
    let connection = DriverRemoteConnection::with_traversal_source(mock.clone(), traversal_source)
        .expect("valid traversal source");

    runtime
        .block_on(connection.submit::<GremlinValue, GremlinValue>(bytecode))
        .expect("submission succeeds");
    mock.last_request().expect("request recorded")
}

fn with_options(configuration: HashMap<String, GremlinValue>) -> Bytecode {
    Bytecode::new()
        .with_strategies([OptionsStrategy { configuration }])
        .with_step("V", Vec::<GremlinValue>::new())
}

proptest! {
    /// Property: outgoing arguments are exactly the allowed options plus bytecode and aliases
    #[test]
    fn only_allowed_options_are_forwarded(configuration in arb_configuration()) {
        let bytecode = with_options(configuration.clone());
        let request = submitted_request(&bytecode, "g");

        let mut expected: HashMap<String, GremlinValue> = configuration
            .into_iter()
            .filter(|(k, _)| ALLOWED_KEYS.contains(&k.as_str()))
            .collect();
        expected.insert("gremlin".to_string(), GremlinValue::Bytecode(bytecode));
        expected.insert("aliases".to_string(), GremlinValue::string_map([("g", "g")]));

        prop_assert_eq!(request.arguments(), &expected);
    }

    /// Property: the alias binding only depends on the connection
    #[test]
    fn aliases_bind_g_to_configured_source(
        source in "[a-z][a-z0-9]{0,10}",
        steps in prop::collection::vec("[a-z]{1,8}", 0..6),
    ) {
        let mut bytecode = Bytecode::new();
        for step in &steps {
            bytecode.add_step(step.as_str(), ["g"]);
        }
        let request = submitted_request(&bytecode, &source);

        prop_assert_eq!(
            request.argument("aliases"),
            Some(&GremlinValue::string_map([("g", source.as_str())]))
        );
    }

    /// Property: a second OptionsStrategy never contributes arguments
    #[test]
    fn later_options_strategies_are_ignored(
        first in arb_configuration(),
        second in arb_configuration(),
    ) {
        let bytecode = Bytecode::new()
            .with_strategies([OptionsStrategy { configuration: first.clone() }])
            .with_strategies([OptionsStrategy { configuration: second }]);
        let request = submitted_request(&bytecode, "g");

        for key in ALLOWED_KEYS {
            prop_assert_eq!(request.argument(key), first.get(*key));
        }
    }
}

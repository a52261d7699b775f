//! Submission of bytecode through DriverRemoteConnection.

use crate::fixtures::{connection, count_with_options, names_of_all_vertices, no_args};
use gremlin_remote::prelude::*;
use std::collections::HashSet;

#[tokio::test]
async fn test_single_step_sends_only_bytecode_and_aliases() {
    let (connection, mock) = connection("gmodern");
    let bytecode = Bytecode::new().with_step("V", no_args());

    connection
        .submit::<GremlinValue, GremlinValue>(&bytecode)
        .await
        .unwrap();

    let request = mock.last_request().unwrap();
    assert_eq!(request.operation(), "bytecode");
    assert_eq!(request.processor(), "traversal");
    assert_eq!(request.arguments().len(), 2);
    assert_eq!(
        request.argument("gremlin"),
        Some(&GremlinValue::Bytecode(bytecode))
    );
    assert_eq!(
        request.argument("aliases"),
        Some(&GremlinValue::string_map([("g", "gmodern")]))
    );
}

#[tokio::test]
async fn test_unknown_option_is_not_sent() {
    let (connection, mock) = connection("g");
    let bytecode = count_with_options(
        OptionsStrategy::new()
            .with("batchSize", 64)
            .with("unknownOpt", true),
    );

    connection
        .submit::<GremlinValue, i64>(&bytecode)
        .await
        .unwrap();

    let request = mock.last_request().unwrap();
    assert_eq!(request.argument("batchSize"), Some(&GremlinValue::Int(64)));
    assert!(request.argument("unknownOpt").is_none());
    assert_eq!(
        request.argument_keys(),
        vec!["aliases", "batchSize", "gremlin"]
    );
}

#[tokio::test]
async fn test_deprecated_and_canonical_timeouts_are_forwarded() {
    let (connection, mock) = connection("g");

    let deprecated = count_with_options(OptionsStrategy::new().with("scriptEvaluationTimeout", 5000));
    connection
        .submit::<GremlinValue, i64>(&deprecated)
        .await
        .unwrap();
    assert_eq!(
        mock.last_request().unwrap().argument("scriptEvaluationTimeout"),
        Some(&GremlinValue::Int(5000))
    );

    let canonical = count_with_options(OptionsStrategy::new().with("evaluationTimeout", 5000));
    connection
        .submit::<GremlinValue, i64>(&canonical)
        .await
        .unwrap();
    let request = mock.last_request().unwrap();
    assert_eq!(
        request.argument("evaluationTimeout"),
        Some(&GremlinValue::Int(5000))
    );
    assert!(request.argument("scriptEvaluationTimeout").is_none());
}

#[tokio::test]
async fn test_all_allowed_options_are_forwarded() {
    let (connection, mock) = connection("g");
    let bytecode = count_with_options(
        OptionsStrategy::new()
            .with("evaluationTimeout", 100_i64)
            .with("scriptEvaluationTimeout", 200_i64)
            .with("batchSize", 10)
            .with("requestId", Uuid::nil())
            .with("userAgent", "integration-tests"),
    );

    connection
        .submit::<GremlinValue, i64>(&bytecode)
        .await
        .unwrap();

    let request = mock.last_request().unwrap();
    let keys: HashSet<&str> = request.argument_keys().into_iter().collect();
    let mut expected: HashSet<&str> = gremlin_remote::ALLOWED_KEYS.iter().copied().collect();
    expected.insert("gremlin");
    expected.insert("aliases");
    assert_eq!(keys, expected);
}

#[tokio::test]
async fn test_alias_binding_ignores_bytecode_content() {
    let (connection, mock) = connection("gcrew");
    let bytecode = Bytecode::new()
        .with_source("withSideEffect", ["g", "other"])
        .with_step("V", no_args());

    connection
        .submit::<GremlinValue, GremlinValue>(&bytecode)
        .await
        .unwrap();

    let aliases = mock.last_request().unwrap().argument("aliases").cloned().unwrap();
    assert_eq!(aliases.get("g"), Some(&GremlinValue::from("gcrew")));
}

#[tokio::test]
async fn test_results_are_returned_through_handle() {
    let (connection, mock) = connection("g");
    mock.push_response(vec![
        Traverser::single("marko"),
        Traverser::new("vadas", 2),
    ]);

    let traversal = connection
        .submit::<GremlinValue, String>(&names_of_all_vertices())
        .await
        .unwrap();

    assert_eq!(
        traversal.request_id(),
        mock.last_request().unwrap().request_id()
    );
    assert_eq!(
        traversal.to_list().unwrap(),
        vec!["marko", "vadas", "vadas"]
    );
}

#[tokio::test]
async fn test_transport_failure_fails_submission() {
    let (connection, mock) = connection("g");
    mock.push_error(RemoteError::Connection("connection reset".to_string()));

    let result = connection
        .submit::<GremlinValue, String>(&names_of_all_vertices())
        .await;

    match result {
        Err(RemoteError::Connection(msg)) => assert_eq!(msg, "connection reset"),
        other => panic!("Expected connection error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_each_submission_gets_a_new_request_id() {
    let (connection, mock) = connection("g");
    let bytecode = names_of_all_vertices();

    for _ in 0..50 {
        connection
            .submit::<GremlinValue, String>(&bytecode)
            .await
            .unwrap();
    }

    let ids: HashSet<Uuid> = mock.requests().iter().map(|r| r.request_id()).collect();
    assert_eq!(ids.len(), 50);
}

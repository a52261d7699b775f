//! Side-effects are fetched by request id, independently of the results.

use crate::fixtures::{connection, names_of_all_vertices};
use gremlin_remote::prelude::*;

#[tokio::test]
async fn test_side_effects_after_results_are_drained() {
    let (connection, mock) = connection("g");
    mock.push_response(vec![Traverser::single("marko"), Traverser::single("josh")]);

    let mut traversal = connection
        .submit::<GremlinValue, String>(&names_of_all_vertices())
        .await
        .unwrap();
    let request_id = traversal.request_id();
    mock.set_side_effect(request_id, "x", GremlinValue::Long(2));

    let names: Vec<String> = traversal.by_ref().collect::<Result<_>>().unwrap();
    assert_eq!(names, vec!["marko", "josh"]);
    assert!(!traversal.has_next());

    let side_effects = traversal.side_effects();
    assert_eq!(side_effects.request_id(), request_id);
    assert_eq!(side_effects.keys().await.unwrap(), vec!["x"]);
    assert_eq!(side_effects.get_as::<i64>("x").await.unwrap(), 2);

    let gather = mock
        .requests()
        .into_iter()
        .find(|r| r.operation() == "gather")
        .unwrap();
    assert_eq!(gather.argument("sideEffect"), Some(&GremlinValue::Uuid(request_id)));
}

#[tokio::test]
async fn test_side_effects_are_not_fetched_eagerly() {
    let (connection, mock) = connection("g");

    let traversal = connection
        .submit::<GremlinValue, String>(&names_of_all_vertices())
        .await
        .unwrap();
    assert!(traversal.to_list().unwrap().is_empty());
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
async fn test_side_effects_are_scoped_to_their_request() {
    let (connection, mock) = connection("g");
    let bytecode = names_of_all_vertices();

    let first = connection
        .submit::<GremlinValue, String>(&bytecode)
        .await
        .unwrap();
    let second = connection
        .submit::<GremlinValue, String>(&bytecode)
        .await
        .unwrap();
    mock.set_side_effect(first.request_id(), "a", GremlinValue::Int(1));
    mock.set_side_effect(second.request_id(), "b", GremlinValue::Int(2));

    assert_eq!(first.side_effects().keys().await.unwrap(), vec!["a"]);
    assert_eq!(second.side_effects().keys().await.unwrap(), vec!["b"]);
}

#[tokio::test]
async fn test_side_effects_fail_once_connection_is_closed() {
    let (connection, mock) = connection("g");
    let traversal = connection
        .submit::<GremlinValue, String>(&names_of_all_vertices())
        .await
        .unwrap();
    mock.set_side_effect(traversal.request_id(), "x", GremlinValue::Int(1));

    drop(connection);
    assert_eq!(mock.close_count(), 1);

    let err = traversal.side_effects().get("x").await.unwrap_err();
    assert!(matches!(err, RemoteError::ConnectionClosed));
}

#[tokio::test]
async fn test_side_effect_close_on_closed_connection_reports_transport_error() {
    let (connection, _mock) = connection("g");
    let traversal = connection
        .submit::<GremlinValue, String>(&names_of_all_vertices())
        .await
        .unwrap();
    connection.close();

    let side_effects = traversal.side_effects();
    let err = side_effects.close().await.unwrap_err();
    assert!(matches!(err, RemoteError::ConnectionClosed));
    assert!(!side_effects.is_closed());

    let err = side_effects.get("x").await.unwrap_err();
    assert!(matches!(err, RemoteError::ConnectionClosed));
}

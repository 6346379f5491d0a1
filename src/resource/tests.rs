//! Tests for the resource access contract

use super::mock::MockTransport;
use super::*;
use crate::error::Error;
use crate::types::{ResourceType, Verb};
use reqwest::StatusCode;
use serde_json::json;

struct TestClient {
    transport: MockTransport,
}

impl ResourceClient for TestClient {
    fn transport(&self) -> &dyn Transport {
        &self.transport
    }
}

fn get_request() -> ResourceRequest {
    ResourceRequest::new(
        Verb::Read,
        "dbs/app/colls/orders",
        ResourceType::Colls,
        "dbs/app/colls/orders",
        StatusCode::OK,
    )
}

#[test]
fn test_request_builder() {
    let request = get_request()
        .header("If-Match", "\"etag\"")
        .json(json!({"id": "orders"}));

    assert_eq!(request.verb, Verb::Read);
    assert_eq!(request.headers.get("If-Match"), Some(&"\"etag\"".to_string()));
    assert_eq!(request.body, Some(json!({"id": "orders"})));
}

#[tokio::test]
async fn test_execute_accepts_expected_status() {
    let client = TestClient {
        transport: MockTransport::new(),
    };
    client.transport.push_json(
        200,
        json!({"id": "orders"}),
        &[("x-ms-continuation", "token-1"), ("etag", "\"e1\"")],
    );

    let response = client.execute(get_request()).await.unwrap();

    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["id"], "orders");
    assert_eq!(response.continuation().unwrap(), Some("token-1"));
    assert_eq!(response.etag(), Some("\"e1\""));
}

#[tokio::test]
async fn test_execute_rejects_other_success_status() {
    let client = TestClient {
        transport: MockTransport::new(),
    };
    client.transport.push_json(201, json!({"id": "orders"}), &[]);

    let err = client.execute(get_request()).await.unwrap_err();

    match err {
        Error::UnexpectedStatus {
            status, expected, ..
        } => {
            assert_eq!(status, 201);
            assert_eq!(expected, 200);
        }
        other => panic!("Expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_execute_carries_server_error_body() {
    let client = TestClient {
        transport: MockTransport::new(),
    };
    client.transport.push_json(
        409,
        json!({"code": "Conflict", "message": "Entity with the specified id already exists"}),
        &[],
    );

    let err = client.execute(get_request()).await.unwrap_err();

    let Error::UnexpectedStatus { error, .. } = err else {
        panic!("Expected UnexpectedStatus");
    };
    assert_eq!(error.code, "Conflict");
    assert!(error.message.contains("already exists"));
}

#[tokio::test]
async fn test_execute_passes_transport_errors_through() {
    let client = TestClient {
        transport: MockTransport::new(),
    };
    client.transport.push_error(Error::Timeout { timeout_ms: 50 });

    let err = client.execute(get_request()).await.unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[test]
fn test_response_empty_continuation_is_none() {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert("x-ms-continuation", "".parse().unwrap());
    let response = ResourceResponse::new(StatusCode::OK, headers, b"{}".to_vec());

    assert_eq!(response.continuation().unwrap(), None);
}

#[test]
fn test_response_unreadable_continuation_is_decode_error() {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        "x-ms-continuation",
        reqwest::header::HeaderValue::from_bytes("tok-\u{e9}".as_bytes()).unwrap(),
    );
    let response = ResourceResponse::new(StatusCode::OK, headers, b"{}".to_vec());

    let err = response.continuation().unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("x-ms-continuation"));
}

#[test]
fn test_response_decode_failure() {
    let response = ResourceResponse::new(
        StatusCode::OK,
        reqwest::header::HeaderMap::new(),
        b"not json".to_vec(),
    );

    let err = response.json::<serde_json::Value>().unwrap_err();
    assert!(err.is_decode());
}

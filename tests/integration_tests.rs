//! Integration tests using mock HTTP server
//!
//! Drives the public API end to end: CosmosClient → CollectionClient →
//! HTTP transport → wiremock.

use cosmos_collections::auth::AuthConfig;
use cosmos_collections::http::HttpClientConfig;
use cosmos_collections::{
    ClientConfig, Collection, CollectionClient, CosmosClient, Error, IndexingPolicy,
    PageIterator, PartitionKey, PartitionKeyRange, UniqueKeyPolicy,
};
use futures::StreamExt;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn collections_for(server: &MockServer) -> CollectionClient {
    let config = ClientConfig::from_yaml_str(&format!(
        "endpoint: {}\ndatabase: app\nauth:\n  type: resource_token\n  token: \"type=resource&ver=1.0&sig=abc\"\n",
        server.uri()
    ))
    .unwrap();
    let client = CosmosClient::from_config(&config).unwrap();
    client.collections(config.require_database().unwrap())
}

/// Serves a fixed sequence of pages, chaining them with continuation tokens
struct PagedResponder {
    pages: Vec<Vec<&'static str>>,
}

impl Respond for PagedResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let index = request
            .headers
            .get("x-ms-continuation")
            .and_then(|v| v.to_str().ok())
            .and_then(|token| token.strip_prefix("page-"))
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(0);

        let ids = &self.pages[index];
        let body = json!({
            "_rid": "k1UJAA==",
            "_count": ids.len(),
            "DocumentCollections": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>()
        });

        let template = ResponseTemplate::new(200).set_body_json(body);
        if index + 1 < self.pages.len() {
            template.insert_header("x-ms-continuation", format!("page-{}", index + 1).as_str())
        } else {
            template
        }
    }
}

// ============================================================================
// Collection Lifecycle
// ============================================================================

#[tokio::test]
async fn test_create_get_delete_lifecycle() {
    let mock_server = MockServer::start().await;

    let stored = json!({
        "id": "orders",
        "_rid": "k1UJAP0Yq8c=",
        "_etag": "\"e1\"",
        "_ts": 1_700_000_000,
        "indexingPolicy": {"automatic": true, "indexingMode": "consistent"},
        "partitionKey": {"paths": ["/tenant"], "kind": "Hash", "version": 2},
        "uniqueKeyPolicy": {"uniqueKeys": [{"paths": ["/email"]}]}
    });

    Mock::given(method("POST"))
        .and(path("/dbs/app/colls"))
        .and(header("authorization", "type%3Dresource%26ver%3D1.0%26sig%3Dabc"))
        .respond_with(ResponseTemplate::new(201).set_body_json(stored.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dbs/app/colls/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/dbs/app/colls/orders"))
        .and(header("if-match", "\"e1\""))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let colls = collections_for(&mock_server);

    let definition = Collection::new("orders")
        .with_indexing_policy(IndexingPolicy::consistent())
        .with_partition_key(PartitionKey::hash(["/tenant"]).with_version(2))
        .with_unique_keys(UniqueKeyPolicy::default().with_key(["/email"]));

    let created = colls.create(&definition).await.unwrap();
    assert_eq!(created.indexing_policy, definition.indexing_policy);
    assert_eq!(created.partition_key, definition.partition_key);

    let fetched = colls.get("orders").await.unwrap();
    assert_eq!(fetched.etag, "\"e1\"");

    colls.delete(&fetched).await.unwrap();
}

#[tokio::test]
async fn test_delete_without_etag_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    let colls = collections_for(&mock_server);
    let err = colls.delete(&Collection::new("orders")).await.unwrap_err();

    assert!(matches!(err, Error::PreconditionMissing { .. }));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_answered_with_200_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dbs/app/colls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "orders"})))
        .mount(&mock_server)
        .await;

    let colls = collections_for(&mock_server);
    let err = colls.create(&Collection::new("orders")).await.unwrap_err();

    assert_eq!(err.status(), Some(200));
    assert!(matches!(err, Error::UnexpectedStatus { status: 200, .. }));
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_iterator_terminates_after_last_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dbs/app/colls"))
        .respond_with(PagedResponder {
            pages: vec![vec!["a", "b"], vec!["c"], vec!["d", "e"]],
        })
        .expect(3)
        .mount(&mock_server)
        .await;

    let colls = collections_for(&mock_server);
    let mut iter = colls.list();

    let mut pages = 0;
    while let Some(_page) = iter.next().await.unwrap() {
        pages += 1;
    }
    assert_eq!(pages, 3);
    assert!(iter.is_exhausted());

    for _ in 0..3 {
        assert!(iter.next().await.unwrap().is_none());
    }
}

#[tokio::test]
async fn test_list_all_aggregates_every_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dbs/app/colls"))
        .respond_with(PagedResponder {
            pages: vec![vec!["a", "b"], vec![], vec!["c", "d", "e"], vec!["f"]],
        })
        .mount(&mock_server)
        .await;

    let colls = collections_for(&mock_server);
    let all = colls.list_all().await.unwrap();

    assert_eq!(all.count, 6);
    assert_eq!(all.resource_id, "k1UJAA==");
    assert_eq!(
        all.collections.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        vec!["a", "b", "c", "d", "e", "f"]
    );
}

#[tokio::test]
async fn test_list_stream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dbs/app/colls"))
        .respond_with(PagedResponder {
            pages: vec![vec!["a"], vec!["b"]],
        })
        .mount(&mock_server)
        .await;

    let colls = collections_for(&mock_server);
    let ids: Vec<String> = colls
        .list()
        .into_stream()
        .map(|page| page.unwrap().collections.into_iter().map(|c| c.id))
        .flat_map(futures::stream::iter)
        .collect()
        .await;

    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn test_list_server_error_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dbs/missing/colls"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "NotFound",
            "message": "Owner resource does not exist"
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().endpoint(mock_server.uri()).build();
    let client = CosmosClient::new(config, AuthConfig::None).unwrap();
    let err = client.collections("missing").list_all().await.unwrap_err();

    match err {
        Error::UnexpectedStatus { status, error, .. } => {
            assert_eq!(status, 404);
            assert_eq!(error.code, "NotFound");
        }
        other => panic!("Expected UnexpectedStatus, got {other:?}"),
    }
}

// ============================================================================
// Partition Key Ranges
// ============================================================================

#[tokio::test]
async fn test_partition_key_range_unknown_fields_survive() {
    let mock_server = MockServer::start().await;

    let range = json!({
        "id": "0",
        "_rid": "k1UJAP0Yq8cCAAAAAAAAUA==",
        "minInclusive": "",
        "maxExclusive": "FF",
        "ridPrefix": 0,
        "throughputFraction": 1.0,
        "status": "online",
        "parents": [],
        "vectorClockVersion": "v2"
    });

    Mock::given(method("GET"))
        .and(path("/dbs/app/colls/orders/pkranges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_rid": "k1UJAP0Yq8c=",
            "_count": 1,
            "PartitionKeyRanges": [range]
        })))
        .mount(&mock_server)
        .await;

    let colls = collections_for(&mock_server);
    let ranges = colls.partition_key_ranges("orders").await.unwrap();
    let first: &PartitionKeyRange = &ranges.partition_key_ranges[0];

    assert_eq!(first.extra_field("vectorClockVersion"), Some(&json!("v2")));

    let reencoded = serde_json::to_value(first).unwrap();
    assert_eq!(reencoded["vectorClockVersion"], "v2");
    assert_eq!(reencoded["maxExclusive"], "FF");
    assert_eq!(reencoded["status"], "online");
}

//! Integration tests for the structured catalog passthrough.

use serde_json::json;
use skills_client::{AssetFailurePolicy, CatalogSource, DelegatingSource};
use skills_core::Error;

use crate::common::Upstream;

#[tokio::test]
async fn test_delegating_unwraps_envelope_in_order() {
    let upstream = Upstream::start().await;
    let body = json!({
        "statusCode": 200,
        "statusMessage": "OK",
        "data": [
            {"id": "b", "name": "B", "url": "u2"},
            {"id": "a", "name": "A", "url": "u1"}
        ]
    });
    upstream.serve("/api/icons/all", &body.to_string()).await;

    let source = DelegatingSource::new(upstream.client(AssetFailurePolicy::Strict));
    let entries = source.list_entries().await.expect("catalog should be forwarded");

    assert_eq!(
        entries,
        vec![
            json!({"id": "b", "name": "B", "url": "u2"}),
            json!({"id": "a", "name": "A", "url": "u1"})
        ]
    );
}

#[tokio::test]
async fn test_delegating_forwards_entries_verbatim() {
    let upstream = Upstream::start().await;
    let data = json!([
        {"id": "a", "name": null, "url": "u1", "category": "language"},
        {"id": "b", "url": "u2", "tags": ["web", "ui"], "order": 7}
    ]);
    let body = json!({"statusCode": 200, "statusMessage": "OK", "data": data.clone()});
    upstream.serve("/api/icons/all", &body.to_string()).await;

    let source = DelegatingSource::new(upstream.client(AssetFailurePolicy::Strict));
    let entries = source.list_entries().await.unwrap();

    assert_eq!(serde_json::Value::Array(entries), data);
}

#[tokio::test]
async fn test_delegating_accepts_bare_array() {
    let upstream = Upstream::start().await;
    let body = json!([
        {"id": "zig", "name": "Zig", "url": "https://cdn.test/zig.svg"},
        {"id": "ada", "name": "Ada", "url": "https://cdn.test/ada.svg"}
    ]);
    upstream.serve("/api/icons/all", &body.to_string()).await;

    let source = DelegatingSource::new(upstream.client(AssetFailurePolicy::Strict));
    let entries = source.list_entries().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], "zig");
    assert_eq!(entries[1]["id"], "ada");
}

#[tokio::test]
async fn test_delegating_forwards_non_success_envelope() {
    let upstream = Upstream::start().await;
    let body = json!({
        "statusCode": 206,
        "statusMessage": "Partial",
        "data": [{"id": "go", "name": "Go", "url": "u"}]
    });
    upstream.serve("/api/icons/all", &body.to_string()).await;

    let source = DelegatingSource::new(upstream.client(AssetFailurePolicy::Strict));
    let entries = source.list_entries().await.unwrap();
    assert_eq!(entries, vec![json!({"id": "go", "name": "Go", "url": "u"})]);
}

#[tokio::test]
async fn test_delegating_upstream_error_status() {
    let upstream = Upstream::start().await;
    upstream.fail("/api/icons/all", 502).await;

    let source = DelegatingSource::new(upstream.client(AssetFailurePolicy::Strict));
    let err = source.list_entries().await.unwrap_err();

    assert!(matches!(
        err,
        Error::UpstreamUnavailable {
            status: Some(502),
            ..
        }
    ));
}

#[tokio::test]
async fn test_delegating_malformed_json() {
    let upstream = Upstream::start().await;
    upstream.serve("/api/icons/all", "<html>oops</html>").await;

    let source = DelegatingSource::new(upstream.client(AssetFailurePolicy::Strict));
    let err = source.list_entries().await.unwrap_err();

    match err {
        Error::MalformedPayload { what, .. } => assert_eq!(what, "catalog"),
        other => panic!("expected MalformedPayload, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delegating_unreachable_upstream() {
    // Nothing listens on port 9 (discard) in the test environment.
    let config = skills_client::UpstreamConfig {
        catalog_url: "http://127.0.0.1:9/api/icons/all".to_string(),
        request_timeout_secs: Some(2),
        ..Default::default()
    };
    let client = skills_client::UpstreamClient::new(config).unwrap();

    let err = DelegatingSource::new(client).list_entries().await.unwrap_err();
    assert!(matches!(err, Error::UpstreamUnavailable { status: None, .. }));
}

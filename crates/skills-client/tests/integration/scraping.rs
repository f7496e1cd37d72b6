//! Integration tests for the README + SVG scraping strategy.

use std::time::{Duration, Instant};

use skills_client::{AssetFailurePolicy, IconSource, ScrapingSource};
use skills_core::{Error, IconRecord};

use crate::common::{README, Upstream};

fn ids(icons: &[IconRecord]) -> Vec<&str> {
    icons.iter().map(|i| i.id.as_str()).collect()
}

#[tokio::test]
async fn test_scraping_lists_sorted_icons() {
    let upstream = Upstream::start().await;
    upstream.serve_full_catalog().await;

    let source = ScrapingSource::new(upstream.client(AssetFailurePolicy::Strict));
    let icons = source.list_icons().await.expect("listing should succeed");

    assert_eq!(ids(&icons), vec!["angular", "bash", "foo", "python", "zig"]);
}

#[tokio::test]
async fn test_scraping_resolves_title_and_url() {
    let upstream = Upstream::start().await;
    upstream.serve_full_catalog().await;

    let source = ScrapingSource::new(upstream.client(AssetFailurePolicy::Strict));
    let icons = source.list_icons().await.unwrap();

    let python = icons.iter().find(|i| i.id == "python").unwrap();
    assert_eq!(python.name, "Python");
    assert_eq!(
        python.url,
        format!("{}/icons/python.svg", upstream.server.uri())
    );
}

#[tokio::test]
async fn test_scraping_falls_back_to_id_without_title() {
    let upstream = Upstream::start().await;
    upstream.serve_full_catalog().await;

    let source = ScrapingSource::new(upstream.client(AssetFailurePolicy::Strict));
    let icons = source.list_icons().await.unwrap();

    let foo = icons.iter().find(|i| i.id == "foo").unwrap();
    assert_eq!(
        foo,
        &IconRecord::new("foo", "foo", format!("{}/icons/foo.svg", upstream.server.uri()))
    );
}

#[tokio::test]
async fn test_scraping_strict_fails_on_asset_error() {
    let upstream = Upstream::start().await;
    upstream.serve("/api/readme", README).await;
    upstream.serve_svg("python", Some("Python")).await;
    upstream.serve_svg("angular", Some("Angular")).await;
    upstream.serve_svg("bash", Some("Bash")).await;
    upstream.serve_svg("zig", Some("Zig")).await;
    upstream.fail("/icons/foo.svg", 500).await;

    let source = ScrapingSource::new(upstream.client(AssetFailurePolicy::Strict));
    let err = source.list_icons().await.unwrap_err();

    match err {
        Error::UpstreamUnavailable { url, status, .. } => {
            assert!(url.ends_with("/icons/foo.svg"));
            assert_eq!(status, Some(500));
        }
        other => panic!("expected UpstreamUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_scraping_lenient_skips_failed_asset() {
    let upstream = Upstream::start().await;
    upstream.serve("/api/readme", README).await;
    upstream.serve_svg("python", Some("Python")).await;
    upstream.serve_svg("angular", Some("Angular")).await;
    upstream.fail("/icons/bash.svg", 404).await;
    upstream.serve_svg("zig", Some("Zig")).await;
    upstream.serve_svg("foo", None).await;

    let source = ScrapingSource::new(upstream.client(AssetFailurePolicy::Lenient));
    let icons = source.list_icons().await.unwrap();

    assert_eq!(ids(&icons), vec!["angular", "foo", "python", "zig"]);
}

#[tokio::test]
async fn test_scraping_malformed_svg_is_reported() {
    let upstream = Upstream::start().await;
    upstream
        .serve("/api/readme", "| `odd` | ![odd](icons/odd.svg) | Odd |\n")
        .await;
    upstream
        .serve("/icons/odd.svg", r#"<svg title="unterminated></svg>"#)
        .await;

    let source = ScrapingSource::new(upstream.client(AssetFailurePolicy::Strict));
    let err = source.list_icons().await.unwrap_err();
    assert!(matches!(err, Error::MalformedPayload { .. }));
}

#[tokio::test]
async fn test_scraping_readme_unavailable() {
    let upstream = Upstream::start().await;
    upstream.fail("/api/readme", 503).await;

    let source = ScrapingSource::new(upstream.client(AssetFailurePolicy::Lenient));
    let err = source.list_icons().await.unwrap_err();

    assert!(err.is_upstream());
    assert!(err.to_string().contains("HTTP 503"));
}

#[tokio::test]
async fn test_scraping_empty_readme_yields_empty_list() {
    let upstream = Upstream::start().await;
    upstream.serve("/api/readme", "# Nothing here yet\n").await;

    let source = ScrapingSource::new(upstream.client(AssetFailurePolicy::Strict));
    let icons = source.list_icons().await.unwrap();
    assert!(icons.is_empty());
}

#[tokio::test]
async fn test_scraping_keeps_duplicate_ids() {
    let upstream = Upstream::start().await;
    upstream
        .serve(
            "/api/readme",
            "| `go` | ![go](icons/go.svg) | Go | `go` | ![go](icons/go.svg) | Go |\n",
        )
        .await;
    upstream.serve_svg("go", Some("Go")).await;

    let source = ScrapingSource::new(upstream.client(AssetFailurePolicy::Strict));
    let icons = source.list_icons().await.unwrap();
    assert_eq!(ids(&icons), vec!["go", "go"]);
}

#[tokio::test]
async fn test_resolve_all_with_explicit_ids() {
    let upstream = Upstream::start().await;
    upstream.serve_svg("rust", Some("Rust")).await;
    upstream.serve_svg("c", Some("C")).await;

    let source = ScrapingSource::new(upstream.client(AssetFailurePolicy::Strict));
    let icons = source
        .resolve_all(vec!["rust".to_string(), "c".to_string()])
        .await
        .unwrap();

    assert_eq!(ids(&icons), vec!["c", "rust"]);
    assert_eq!(icons[1].name, "Rust");
}

// ============================================================================
// Bounded fan-out
// ============================================================================

const ASSET_DELAY: Duration = Duration::from_millis(200);

/// Serve four slow assets and time resolving them under `limit`.
async fn time_fanout(limit: usize) -> Duration {
    let upstream = Upstream::start().await;
    let wanted: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    for id in &wanted {
        upstream.serve_slow_svg(id, ASSET_DELAY).await;
    }

    let source = ScrapingSource::new(upstream.client_with_limit(limit));
    let started = Instant::now();
    let icons = tokio::time::timeout(Duration::from_secs(10), source.resolve_all(wanted))
        .await
        .expect("fan-out should finish")
        .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(ids(&icons), vec!["a", "b", "c", "d"]);
    assert_eq!(upstream.server.received_requests().await.unwrap().len(), 4);
    elapsed
}

#[tokio::test]
async fn test_fanout_limit_one_fetches_sequentially() {
    let elapsed = time_fanout(1).await;
    assert!(elapsed >= ASSET_DELAY * 4, "took {elapsed:?}");
}

#[tokio::test]
async fn test_fanout_zero_limit_is_clamped_to_one() {
    let elapsed = time_fanout(0).await;
    assert!(elapsed >= ASSET_DELAY * 4, "took {elapsed:?}");
}

#[tokio::test]
async fn test_fanout_limit_two_runs_in_pairs() {
    let elapsed = time_fanout(2).await;
    assert!(elapsed >= ASSET_DELAY * 2, "took {elapsed:?}");
    assert!(elapsed < ASSET_DELAY * 4, "took {elapsed:?}");
}

#[tokio::test]
async fn test_fanout_runs_concurrently_up_to_limit() {
    let elapsed = time_fanout(4).await;
    assert!(elapsed < ASSET_DELAY * 3, "took {elapsed:?}");
}

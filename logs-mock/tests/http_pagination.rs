#![cfg(feature = "http-server")]
//! End-to-end tests of the cursor pagination contract on `GET /logs`.
//!
//! These walk full cursor chains the way a client would and compare the
//! concatenated pages against the store's filtered view.

use std::collections::HashSet;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use logs_mock::server::build_router;
use logs_mock::server::handlers::AppState;
use logs_mock::server::metrics::Metrics;
use logs_mock::{Config, Level, LogRecord, LogStore};
use tower::ServiceExt;

fn setup_test_app() -> (Router, Arc<LogStore>) {
    let store = Arc::new(LogStore::generate(&Config {
        seed: Some(2024),
        ..Default::default()
    }));
    let state = AppState::new(store.clone(), Arc::new(Metrics::new()), 100);
    (build_router(state), store)
}

async fn get_page(app: &Router, uri: &str) -> serde_json::Value {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK, "uri: {}", uri);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Fetches every page for `level` and returns the pages in order.
async fn walk(app: &Router, limit: usize, level: Option<&str>) -> Vec<serde_json::Value> {
    let base = match level {
        Some(level) => format!("/logs?limit={}&level={}", limit, level),
        None => format!("/logs?limit={}", limit),
    };

    let mut pages = Vec::new();
    let mut uri = base.clone();
    loop {
        let page = get_page(app, &uri).await;
        let next = page["nextCursor"].as_str().map(str::to_string);
        pages.push(page);
        match next {
            Some(cursor) => uri = format!("{}&cursor={}", base, cursor),
            None => return pages,
        }
    }
}

fn items_of(pages: &[serde_json::Value]) -> Vec<LogRecord> {
    pages
        .iter()
        .flat_map(|p| p["items"].as_array().unwrap().clone())
        .map(|item| serde_json::from_value(item).unwrap())
        .collect()
}

#[tokio::test]
async fn test_cursor_chain_covers_whole_corpus() {
    let (app, store) = setup_test_app();

    let pages = walk(&app, 100, None).await;

    assert_eq!(pages.len(), 100);
    assert_eq!(items_of(&pages), store.records().to_vec());
}

#[tokio::test]
async fn test_cursor_chain_covers_each_filtered_view() {
    let (app, store) = setup_test_app();

    for level in Level::ALL {
        let pages = walk(&app, 75, Some(level.as_str())).await;
        let items = items_of(&pages);

        let expected: Vec<LogRecord> = store
            .filtered(Some(level))
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(items, expected, "level: {}", level);

        let ids: HashSet<&str> = items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), items.len(), "duplicates for level {}", level);
        assert!(items.iter().all(|r| r.level == level));
    }
}

#[tokio::test]
async fn test_pages_are_bounded_and_totals_are_stable() {
    let (app, store) = setup_test_app();
    let expected_total = store.filtered(Some(Level::Warn)).len();

    let pages = walk(&app, 128, Some("warn")).await;

    let (last, full) = pages.split_last().unwrap();
    for page in full {
        assert_eq!(page["items"].as_array().unwrap().len(), 128);
    }
    let last_len = last["items"].as_array().unwrap().len();
    assert!((1..=128).contains(&last_len));
    assert!(pages.iter().all(|p| p["total"] == expected_total));
}

#[tokio::test]
async fn test_cursor_from_one_filter_is_reinterpreted_under_another() {
    let (app, store) = setup_test_app();

    let error_page = get_page(&app, "/logs?level=error&limit=50").await;
    let cursor = error_page["nextCursor"].as_str().unwrap();
    let warn_page = get_page(&app, &format!("/logs?level=warn&limit=50&cursor={}", cursor)).await;

    // the error cursor's offset (50) is applied to the warn view unchanged
    let warn_view = store.filtered(Some(Level::Warn));
    let items = items_of(std::slice::from_ref(&warn_page));
    let expected: Vec<LogRecord> = warn_view[50..100].iter().map(|r| (*r).clone()).collect();
    assert_eq!(items, expected);
}

#[tokio::test]
async fn test_generated_corpus_has_expected_shape() {
    let (app, _store) = setup_test_app();

    let items = items_of(&walk(&app, 1_000, None).await);

    assert_eq!(items.len(), 10_000);
    let ids: HashSet<String> = items.iter().map(|r| r.id.clone()).collect();
    let expected: HashSet<String> = (1..=10_000).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
    assert!(items.iter().all(|r| (1..=500).contains(&r.duration_ms)));
    assert!(items.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}

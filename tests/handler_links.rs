mod common;

use axum_test::TestServer;
use serde_json::Value;
use std::sync::Arc;
use urlshort::routes::app_router;

use common::{
    minutes_ago, test_state, InMemoryCache, InMemoryLinkRepository, UnreachableLinkRepository,
};

fn server_with(repo: Arc<InMemoryLinkRepository>) -> TestServer {
    let state = test_state(repo, Arc::new(InMemoryCache::new()));
    TestServer::new(app_router(state)).unwrap()
}

#[tokio::test]
async fn test_links_listed_newest_first() {
    let repo = Arc::new(InMemoryLinkRepository::new());
    repo.seed_at("oldest", "https://example.com/1", minutes_ago(30));
    repo.seed_at("newest", "https://example.com/3", minutes_ago(1));
    repo.seed_at("middle", "https://example.com/2", minutes_ago(10));

    let server = server_with(repo);

    let response = server.get("/v1/links").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let links = body["links"].as_array().unwrap();
    assert_eq!(links.len(), 3);

    let codes: Vec<&str> = links
        .iter()
        .map(|l| l["redirect_code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn test_links_item_fields() {
    let repo = Arc::new(InMemoryLinkRepository::new());
    repo.seed("abc123", "https://example.com");

    let server = server_with(repo);

    let response = server.get("/v1/links").await;
    let body: Value = response.json();
    let link = &body["links"][0];

    assert_eq!(link["redirect_code"], "abc123");
    assert_eq!(link["destiny_url"], "https://example.com");
    assert_eq!(link["short_url"], "http://sho.rt/r/abc123");
    assert_eq!(link["clicks"], 0);
    assert!(link["created_at"].is_string());
}

#[tokio::test]
async fn test_links_empty_store() {
    let server = server_with(Arc::new(InMemoryLinkRepository::new()));

    let response = server.get("/v1/links").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["links"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_links_store_failure_returns_500() {
    let state = test_state(
        Arc::new(UnreachableLinkRepository),
        Arc::new(InMemoryCache::new()),
    );
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/v1/links").await;

    assert_eq!(response.status_code(), 500);
}

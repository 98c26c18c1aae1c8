//! Integration tests for arxiv-embed
//!
//! These tests drive the full HTTP surface through the axum router, with the
//! external feed and embedding services stubbed by mockito and persistence
//! backed by the in-memory store.

use arxiv_embed::config::Config;
use arxiv_embed::embedding::{OpenAiProvider, DEFAULT_MODEL};
use arxiv_embed::feed::ArxivFeed;
use arxiv_embed::server::{create_router, AppState};
use arxiv_embed::storage::{EmbeddingStore, MemoryStore};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

const TWO_ENTRY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:arxiv="http://arxiv.org/schemas/atom">
  <title>ArXiv Query: search_query=cat:cs.AI</title>
  <id>http://arxiv.org/api/example</id>
  <entry>
    <id>http://arxiv.org/abs/2301.11111v1</id>
    <title>First Paper</title>
    <summary>First abstract.</summary>
    <published>2023-01-16T10:00:00+00:00</published>
    <author><name>Alice Ames</name></author>
    <author><name>Bob Brown</name></author>
    <link title="pdf" rel="related" type="application/pdf" href="http://arxiv.org/pdf/2301.11111v1"/>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2301.22222v1</id>
    <title>Second Paper</title>
    <summary>Second abstract.</summary>
    <published>2023-01-15T10:00:00+00:00</published>
    <author><name>Carol Chen</name></author>
    <link title="pdf" rel="related" type="application/pdf" href="http://arxiv.org/pdf/2301.22222v1"/>
  </entry>
</feed>
"#;

const EMBEDDINGS_RESPONSE: &str =
    r#"{"data":[{"embedding":[0.1,0.2,0.3],"index":0}],"model":"text-embedding-ada-002"}"#;

/// Build application state wired to stub service URLs and a shared
/// in-memory store.
fn build_state(feed_url: &str, embed_url: &str, store: Arc<MemoryStore>) -> AppState {
    AppState::new(
        Config::default(),
        ArxivFeed::with_base_url(feed_url),
        Arc::new(OpenAiProvider::with_base_url(
            embed_url,
            "test-key",
            DEFAULT_MODEL,
        )),
        store as Arc<dyn EmbeddingStore>,
    )
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let state = build_state("http://unused.invalid", "http://unused.invalid", Arc::new(MemoryStore::new()));
    let app = create_router(state);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"arxiv-embed is running");
}

#[tokio::test]
async fn test_get_arxiv_papers_returns_listing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/atom+xml")
        .with_body(TWO_ENTRY_FEED)
        .create_async()
        .await;

    let state = build_state(&server.url(), "http://unused.invalid", Arc::new(MemoryStore::new()));
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/get-arxiv-papers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let papers = json["papers"].as_array().expect("papers array");
    assert_eq!(papers.len(), 2);
    assert_eq!(papers[0]["title"], "First Paper");
    assert_eq!(papers[0]["authors"], "Alice Ames, Bob Brown");
    assert_eq!(papers[0]["published_date"], "2023-01-16T10:00:00+00:00");
    assert_eq!(papers[1]["link"], "http://arxiv.org/pdf/2301.22222v1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_arxiv_papers_feed_failure_keeps_200_envelope() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .match_query(mockito::Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let state = build_state(&server.url(), "http://unused.invalid", Arc::new(MemoryStore::new()));
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/get-arxiv-papers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Legacy contract: failures still answer 200 with an `error` field
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let error = json["error"].as_str().expect("error field");
    assert!(error.contains("503"), "error should carry the status: {}", error);
    assert!(json.get("papers").is_none());
}

#[tokio::test]
async fn test_create_embedding_persists_to_store() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(EMBEDDINGS_RESPONSE)
        .create_async()
        .await;

    let store = Arc::new(MemoryStore::new());
    let state = build_state("http://unused.invalid", &server.url(), store.clone());
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create-embedding-from-body")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"input": "hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].as_str().is_some());

    assert_eq!(store.len(), 1);
    let blob = store
        .get("5d41402abc4b2a76b9719d911017c592")
        .expect("embedding stored under md5 of input");
    let stored: arxiv_embed::Embedding = serde_json::from_str(&blob).unwrap();
    assert_eq!(stored.vector, vec![0.1, 0.2, 0.3]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_embedding_store_failure_yields_error_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(EMBEDDINGS_RESPONSE)
        .create_async()
        .await;

    let store = Arc::new(MemoryStore::new());
    store.fail_with("simulated outage");
    let state = build_state("http://unused.invalid", &server.url(), store.clone());
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create-embedding-from-body")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"input": "hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    // The outward message stays generic; the typed detail is only logged
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["error"], "failed to save embedding");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_create_embedding_rejects_bodyless_request_in_envelope() {
    let state = build_state(
        "http://unused.invalid",
        "http://unused.invalid",
        Arc::new(MemoryStore::new()),
    );
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create-embedding-from-body")
                .header("content-type", "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["error"].as_str().is_some());
}

#[tokio::test]
async fn test_create_embedding_upstream_failure_yields_error_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(500)
        .with_body("upstream broke")
        .create_async()
        .await;

    let store = Arc::new(MemoryStore::new());
    let state = build_state("http://unused.invalid", &server.url(), store.clone());
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create-embedding-from-body")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"input": "hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("500"));
    assert!(store.is_empty());
}

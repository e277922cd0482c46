mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use snip::api::handlers::{redirect_handler, shorten_handler};

fn shorten_app() -> TestServer {
    let (state, _storage) = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let server = shorten_app();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let short_url = body["shortUrl"].as_str().unwrap();
    let id = short_url
        .strip_prefix("http://localhost:8080/s/")
        .expect("short URL should start with the base URL");

    assert_eq!(id.len(), 7);
    assert!(
        id.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
}

#[tokio::test]
async fn test_shorten_schemeless_url() {
    let server = shorten_app();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "example.com/some/page" }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_shorten_same_url_twice_yields_distinct_ids() {
    let server = shorten_app();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["shortUrl"], second["shortUrl"]);
}

#[tokio::test]
async fn test_shorten_empty_url_is_rejected() {
    let server = shorten_app();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_whitespace_url_is_rejected() {
    let server = shorten_app();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "   " }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_get() {
    let server = shorten_app();

    let response = server.get("/api/shorten").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_shorten_then_redirect_round_trip() {
    let (state, _storage) = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/s/{id}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let body = server
        .post("/api/shorten")
        .json(&json!({ "url": "  EXAMPLE.com/Landing?x=1  " }))
        .await
        .json::<serde_json::Value>();

    let short_url = body["shortUrl"].as_str().unwrap();
    let path = short_url
        .strip_prefix("http://localhost:8080")
        .unwrap()
        .to_string();

    let response = server.get(&path).await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.headers()["location"],
        "https://example.com/Landing?x=1"
    );
}

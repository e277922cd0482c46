mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use snip::api::handlers::redirect_handler;

fn redirect_router(state: snip::AppState) -> TestServer {
    let app = Router::new()
        .route("/s/{id}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_found() {
    let (state, storage) = common::create_test_state();
    common::seed_link(&storage, "abc1234", "https://example.com/target").await;
    let server = redirect_router(state);

    let response = server.get("/s/abc1234").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.headers()["location"],
        "https://example.com/target"
    );
}

#[tokio::test]
async fn test_redirect_unknown_id_is_404() {
    let (state, _storage) = common::create_test_state();
    let server = redirect_router(state);

    let response = server.get("/s/unknown").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["id"], "unknown");
}

#[tokio::test]
async fn test_redirect_rejects_post() {
    let (state, storage) = common::create_test_state();
    common::seed_link(&storage, "abc1234", "https://example.com").await;
    let server = redirect_router(state);

    let response = server.post("/s/abc1234").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

mod common;

use serde_json::Value;

#[tokio::test]
async fn test_redirect_success() {
    let (server, state) = common::create_test_server().await;
    common::create_test_url(&state, "ex1", "https://example.com/target").await;

    let response = server.get("/ex1").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_preserves_query() {
    let (server, state) = common::create_test_server().await;
    common::create_test_url(&state, "q", "https://example.com/search?q=rust&page=2").await;

    let response = server.get("/q").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(
        response.header("location"),
        "https://example.com/search?q=rust&page=2"
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _state) = common::create_test_server().await;

    let response = server.get("/missing").await;

    assert_eq!(response.status_code(), 404);

    let body: Value = response.json();
    assert_eq!(body["status"], "Error");
    assert_eq!(body["msg"], "url not found");
}

#[tokio::test]
async fn test_redirect_needs_no_auth() {
    let (server, state) = common::create_test_server().await;
    common::create_test_url(&state, "open", "https://example.com").await;

    let response = server
        .get("/open")
        .add_header("Authorization", common::BAD_AUTH_HEADER)
        .await;

    assert_eq!(response.status_code(), 307);
}

#[tokio::test]
async fn test_redirect_after_delete() {
    let (server, state) = common::create_test_server().await;
    common::create_test_url(&state, "gone", "https://example.com").await;
    state.url_service.delete("gone").await.unwrap();

    let response = server.get("/gone").await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let (server, state) = common::create_test_server().await;
    common::create_test_url(&state, "rid", "https://example.com").await;

    let response = server.get("/rid").await;
    assert!(response.headers().get("x-request-id").is_some());

    let response = server
        .get("/rid")
        .add_header("x-request-id", "fixed-id")
        .await;
    assert_eq!(response.header("x-request-id"), "fixed-id");
}

//! Integration tests for the analysis server.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use tower::ServiceExt;
use word_insight_chat::AppState;
use word_insight_chat::config::{AppConfig, ClientConfig, ServerConfig};
use word_insight_chat::protocol::{ErrorBody, ResponsePayload};
use word_insight_chat::server::{EMPTY_INPUT_ERROR, router};

fn test_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 5,
        },
        client: ClientConfig {
            endpoint: "http://127.0.0.1:0".to_string(),
            request_timeout_secs: 0,
        },
    })
}

fn test_server() -> TestServer {
    TestServer::new(router(AppState::new(test_config()))).expect("Failed to start test server")
}

#[tokio::test]
async fn test_chat_returns_payload() {
    let server = test_server();

    let response = server
        .post("/chat")
        .json(&json!({ "message": "the quick brown fox" }))
        .await;

    response.assert_status_ok();
    let payload: ResponsePayload = response.json();
    assert_eq!(payload.last_word, "fox");
    assert_eq!(payload.top_words, "the, quick, brown");
    assert_eq!(payload.suggestions, "fox");
    assert_eq!(payload.next_word, "None");
    assert_eq!(payload.related_words, "None");
}

#[tokio::test]
async fn test_state_is_shared_across_requests() {
    let server = test_server();

    for message in ["rust is fast", "rust is safe", "rust is fun"] {
        server
            .post("/chat")
            .json(&json!({ "message": message }))
            .await
            .assert_status_ok();
    }

    let response = server
        .post("/chat")
        .json(&json!({ "message": "i like rust" }))
        .await;
    let payload: ResponsePayload = response.json();

    assert_eq!(payload.last_word, "rust");
    assert_eq!(payload.top_words, "rust, is, fast");
    assert_eq!(payload.suggestions, "rust");
    assert_eq!(payload.next_word, "is");
    assert_eq!(payload.related_words, "is");
}

#[tokio::test]
async fn test_empty_message_is_rejected() {
    let server = test_server();

    let response = server.post("/chat").json(&json!({ "message": "" })).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json();
    assert_eq!(body.error, EMPTY_INPUT_ERROR);

    // missing field defaults to the empty message
    let response = server.post("/chat").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_body_is_client_error() {
    let server = test_server();

    let response = server
        .post("/chat")
        .content_type("application/json")
        .bytes("{ not json".into())
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_health() {
    let app = router(AppState::new(test_config()));

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .uri("/health")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

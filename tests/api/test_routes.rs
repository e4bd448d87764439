// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! HTTP route tests
//!
//! These tests verify that:
//! - The homepage returns 200 with an HTML body regardless of query parameters
//! - The health endpoint reports service status
//! - /sse opens an event stream
//! - /messages validates the session before accepting a message
//! - Accepted messages produce JSON-RPC responses on the session channel
//! - The CORS layer is applied

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`
use web_extractor_node::{
    api::{create_app, AppState},
    content::{ContentFetchConfig, ContentFetcher},
    mcp::{McpServer, ServerInfo, SessionRegistry},
    tools::ToolRegistry,
};

/// Helper: create a test AppState with the default tool registry
fn setup_state() -> AppState {
    let fetcher = ContentFetcher::new(ContentFetchConfig::default());
    let tools = ToolRegistry::new(fetcher);
    let mcp = McpServer::new(ServerInfo::default(), tools);

    AppState {
        mcp: Arc::new(mcp),
        sessions: Arc::new(SessionRegistry::new()),
    }
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_homepage_returns_html() {
    let app = create_app(setup_state());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = body_string(response).await;
    assert!(body.contains("Web Content Extractor"));
}

#[tokio::test]
async fn test_homepage_ignores_query_parameters() {
    let app = create_app(setup_state());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/?utm_source=test&x=1")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_app(setup_state());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["active_sessions"], 0);
}

#[tokio::test]
async fn test_sse_route_opens_event_stream() {
    let app = create_app(setup_state());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/sse")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/event-stream"));
}

#[tokio::test]
async fn test_messages_requires_session_id() {
    let app = create_app(setup_state());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/messages")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"jsonrpc":"2.0","method":"ping","id":1}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_messages_rejects_unknown_session() {
    let app = create_app(setup_state());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/messages?session_id=00000000-0000-0000-0000-000000000000")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"jsonrpc":"2.0","method":"ping","id":1}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    let error: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["error_type"], "session_not_found");
}

#[tokio::test]
async fn test_messages_accepted_and_response_streams_back() {
    let state = setup_state();
    let mut handle = state.sessions.open();
    let app = create_app(state);

    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/messages?session_id={}", handle.id))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"jsonrpc":"2.0","method":"ping","id":42}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    // The RPC response arrives on the session channel
    let rpc = handle.receiver.recv().await.unwrap();
    assert_eq!(rpc.id, serde_json::json!(42));
    assert!(rpc.error.is_none());
}

#[tokio::test]
async fn test_messages_invalid_json_yields_parse_error() {
    let state = setup_state();
    let mut handle = state.sessions.open();
    let app = create_app(state);

    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/messages?session_id={}", handle.id))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("this is not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let rpc = handle.receiver.recv().await.unwrap();
    assert_eq!(rpc.error.unwrap().code, -32700);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let app = create_app(setup_state());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{
        sse::{Event, KeepAlive},
        Html, IntoResponse, Sse,
    },
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use serde_json::json;
use std::{convert::Infallible, sync::Arc};
use tokio_stream::wrappers::ReceiverStream;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::ApiError;
use crate::config::ServerConfig;
use crate::mcp::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpServer, SessionRegistry};

const HOMEPAGE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Web Content Extractor</title></head>
<body>
    <h1>Web Content Extractor</h1>
    <p>Streaming tool server exposing <code>extract_web_content(url)</code>:
    fetch a web page and return its visible text.</p>
    <ul>
        <li><code>GET /sse</code>: open a streaming session</li>
        <li><code>POST /messages?session_id=...</code>: post a tool-call message</li>
        <li><code>GET /health</code>: liveness check</li>
    </ul>
</body>
</html>
"#;

#[derive(Clone)]
pub struct AppState {
    pub mcp: Arc<McpServer>,
    pub sessions: Arc<SessionRegistry>,
}

/// Build the router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Informational homepage
        .route("/", get(homepage_handler))
        // Health check
        .route("/health", get(health_handler))
        // Streaming session endpoint
        .route("/sse", get(sse_handler))
        // Companion message endpoint
        .route("/messages", post(messages_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(
    config: &ServerConfig,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_app(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

async fn homepage_handler() -> impl IntoResponse {
    Html(HOMEPAGE_HTML)
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "web-extractor-node",
        "version": crate::version::VERSION_NUMBER,
        "active_sessions": state.sessions.len(),
    }))
}

/// Open a streaming session
///
/// The first event names the companion message endpoint for this session;
/// every subsequent `message` event carries one JSON-RPC response.
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let handle = state.sessions.open();
    let session_id = handle.id;
    info!("SSE session opened: {}", session_id);

    let endpoint = Event::default()
        .event("endpoint")
        .data(format!("/messages?session_id={}", session_id));

    // Registry entry lives exactly as long as the stream
    let guard = SessionGuard {
        id: session_id,
        sessions: state.sessions.clone(),
    };

    let responses = ReceiverStream::new(handle.receiver).map(move |response| {
        let _live = &guard;
        Event::default()
            .event("message")
            .data(serde_json::to_string(&response).unwrap_or_default())
    });

    let stream = stream::once(async move { endpoint })
        .chain(responses)
        .map(Ok::<_, Infallible>);

    Sse::new(stream).keep_alive(KeepAlive::default())
}

#[derive(Debug, Deserialize)]
struct MessagesQuery {
    session_id: Option<Uuid>,
}

/// Accept one JSON-RPC message for a streaming session
///
/// Responds 202 immediately; the RPC response is delivered over the
/// session's SSE stream once the handler finishes. Slow upstream fetches
/// therefore never stall the HTTP surface.
async fn messages_handler(
    State(state): State<AppState>,
    Query(query): Query<MessagesQuery>,
    body: String,
) -> Result<StatusCode, ApiError> {
    let session_id = query
        .session_id
        .ok_or_else(|| ApiError::InvalidRequest("Missing session_id query parameter".to_string()))?;

    let sender = state
        .sessions
        .sender(&session_id)
        .ok_or_else(|| ApiError::SessionNotFound(session_id.to_string()))?;

    let request: JsonRpcRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Unparseable message for session {}: {}", session_id, e);
            let response =
                JsonRpcResponse::error(serde_json::Value::Null, JsonRpcError::parse_error());
            sender
                .send(response)
                .await
                .map_err(|e| ApiError::InternalError(e.to_string()))?;
            return Ok(StatusCode::ACCEPTED);
        }
    };

    let mcp = state.mcp.clone();
    tokio::spawn(async move {
        if let Some(response) = mcp.handle_message(request).await {
            if sender.send(response).await.is_err() {
                warn!("Session {} closed before response delivery", session_id);
            }
        }
    });

    Ok(StatusCode::ACCEPTED)
}

struct SessionGuard {
    id: Uuid,
    sessions: Arc<SessionRegistry>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.sessions.close(&self.id);
        info!("SSE session closed: {}", self.id);
    }
}

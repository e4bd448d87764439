// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod content;
pub mod mcp;
pub mod tools;
pub mod version;

// Re-export main types
pub use api::{create_app, start_server, ApiError, AppState, ErrorResponse};
pub use config::ServerConfig;
pub use content::{extract_visible_text, ContentFetchConfig, ContentFetcher, FetchError};
pub use mcp::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpServer, ServerInfo, SessionRegistry};
pub use tools::{extract_web_content, ToolRegistry, INVALID_URL_MESSAGE};

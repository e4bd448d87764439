// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use std::{env, sync::Arc};
use web_extractor_node::{
    api::{start_server, AppState},
    config::ServerConfig,
    content::{ContentFetchConfig, ContentFetcher},
    mcp::{McpServer, ServerInfo, SessionRegistry},
    tools::ToolRegistry,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    tracing::info!("Starting {}", web_extractor_node::version::get_version_string());

    let server_config = ServerConfig::from_env();

    let fetch_config = ContentFetchConfig::from_env();
    if let Err(e) = fetch_config.validate() {
        anyhow::bail!("Invalid content fetch configuration: {}", e);
    }

    let fetcher = ContentFetcher::new(fetch_config);
    let tools = ToolRegistry::new(fetcher);
    let mcp = McpServer::new(ServerInfo::default(), tools);

    let state = AppState {
        mcp: Arc::new(mcp),
        sessions: Arc::new(SessionRegistry::new()),
    };

    start_server(&server_config, state)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    tracing::info!("Server stopped");
    Ok(())
}

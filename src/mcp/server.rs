//! MCP method dispatch
//!
//! Routes JSON-RPC requests from a streaming session to their handlers:
//! lifecycle methods (`initialize`, `ping`), discovery (`tools/list`), and
//! invocation (`tools/call`).

use serde_json::{json, Value};
use tracing::{debug, info};

use super::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::tools::{ToolCallError, ToolRegistry};

/// Protocol revision implemented by this server
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Identity advertised in the initialize handshake
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: "web-content-extractor".to_string(),
            version: crate::version::VERSION_NUMBER.to_string(),
        }
    }
}

/// Streaming protocol server: dispatches tool-call requests
pub struct McpServer {
    info: ServerInfo,
    tools: ToolRegistry,
}

impl McpServer {
    pub fn new(info: ServerInfo, tools: ToolRegistry) -> Self {
        Self { info, tools }
    }

    /// Handle one JSON-RPC message
    ///
    /// Returns `None` for notifications, which get no response.
    pub async fn handle_message(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.jsonrpc != "2.0" {
            let id = request.id.clone().unwrap_or(Value::Null);
            return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()));
        }

        if request.is_notification() {
            debug!("Notification received: {}", request.method);
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(),
            "ping" => Ok(json!({})),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(&request.params).await,
            _ => Err(JsonRpcError::method_not_found()),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn handle_initialize(&self) -> Result<Value, JsonRpcError> {
        info!("Client initializing: {} v{}", self.info.name, self.info.version);
        Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.info.name,
                "version": self.info.version,
            }
        }))
    }

    fn handle_tools_list(&self) -> Result<Value, JsonRpcError> {
        let tools = serde_json::to_value(self.tools.list())
            .map_err(|e| JsonRpcError::internal_error(e.to_string()))?;
        Ok(json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, params: &Value) -> Result<Value, JsonRpcError> {
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| JsonRpcError::invalid_params("Missing tool name"))?;

        let default_args = json!({});
        let arguments = params.get("arguments").unwrap_or(&default_args);

        info!("Tool call: {}", name);

        let text = self.tools.call(name, arguments).await.map_err(|e| match e {
            ToolCallError::UnknownTool(_) | ToolCallError::MissingArgument(_) => {
                JsonRpcError::invalid_params(e.to_string())
            }
        })?;

        // Tool failures are reported inside the text itself, never as
        // protocol errors
        Ok(json!({
            "content": [{ "type": "text", "text": text }],
            "isError": false,
        }))
    }
}

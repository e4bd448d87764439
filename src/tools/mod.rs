//! Remote-callable tools
//!
//! Each tool is a named operation a connected client can invoke over the
//! streaming transport. This node exposes a single tool,
//! `extract_web_content`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::error;

use crate::content::{extract_visible_text, ContentFetcher};

/// Literal returned for URLs that do not carry an http(s) scheme
pub const INVALID_URL_MESSAGE: &str = "Invalid URL. It must start with http:// or https://";

/// Tool descriptor surfaced by `tools/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Tool dispatch error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum ToolCallError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Missing required argument: {0}")]
    MissingArgument(String),
}

/// Registry of the tools this node exposes
pub struct ToolRegistry {
    fetcher: ContentFetcher,
}

impl ToolRegistry {
    pub fn new(fetcher: ContentFetcher) -> Self {
        Self { fetcher }
    }

    /// List all tool definitions
    pub fn list(&self) -> Vec<ToolDefinition> {
        vec![ToolDefinition {
            name: "extract_web_content".to_string(),
            description: "Extract visible text content from a web page.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "Absolute URL of the page to fetch"
                    }
                },
                "required": ["url"]
            }),
        }]
    }

    /// Invoke a tool by name with JSON arguments
    ///
    /// Dispatch failures (unknown tool, missing argument) error; the tool
    /// itself never does.
    pub async fn call(&self, name: &str, arguments: &Value) -> Result<String, ToolCallError> {
        match name {
            "extract_web_content" => {
                let url = arguments
                    .get("url")
                    .and_then(Value::as_str)
                    .ok_or_else(|| ToolCallError::MissingArgument("url".to_string()))?;
                Ok(extract_web_content(&self.fetcher, url).await)
            }
            other => Err(ToolCallError::UnknownTool(other.to_string())),
        }
    }
}

/// Extract visible text content from a web page
///
/// Validates the URL scheme, fetches the page, and flattens the visible
/// text. All failures are folded into the returned string; this function
/// never errors to its caller.
pub async fn extract_web_content(fetcher: &ContentFetcher, url: &str) -> String {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return INVALID_URL_MESSAGE.to_string();
    }

    match fetcher.fetch_html(url).await {
        Ok(html) => extract_visible_text(&html),
        Err(e) => {
            error!("extract_web_content failed for {}: {}", url, e);
            format!("Error: {}", e)
        }
    }
}

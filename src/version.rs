// Version information for the Web Extractor Node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-sse-transport-2026-08-26";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-08-26";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "sse-transport",
    "json-rpc-2.0",
    "extract-web-content",
    "cors-get-post",
    "fetch-timeout",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Web Extractor Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}

/// Get full version info for API responses
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "version": VERSION_NUMBER,
        "build": VERSION,
        "date": BUILD_DATE,
        "features": FEATURES,
    })
}

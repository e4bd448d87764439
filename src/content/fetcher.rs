//! HTTP content fetching with timeouts
//!
//! Fetches raw page HTML for the extraction tool.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::config::ContentFetchConfig;

/// Content fetch error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// Request timed out
    #[error("Timeout fetching: {0}")]
    Timeout(String),
    /// HTTP request error (connect failure, DNS failure, bad body)
    #[error("HTTP error: {0}")]
    HttpError(String),
}

/// Content fetcher wrapping a shared HTTP client
pub struct ContentFetcher {
    client: Client,
    config: ContentFetchConfig,
}

impl ContentFetcher {
    /// Create a new content fetcher
    pub fn new(config: ContentFetchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetch the raw HTML body of a URL
    ///
    /// Non-success status codes are not treated as errors: the body of an
    /// error page is still a document the extractor can flatten.
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        if let Some(host) = Url::parse(url).ok().and_then(|u| u.host_str().map(String::from)) {
            debug!("Fetching content from host: {}", host);
        }

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::HttpError(e.to_string())
            }
        })?;

        response
            .text()
            .await
            .map_err(|e| FetchError::HttpError(e.to_string()))
    }

    /// Get the configuration
    pub fn config(&self) -> &ContentFetchConfig {
        &self.config
    }
}

//! Web content fetching and visible-text extraction
//!
//! Turns a page URL into clean, line-delimited visible text.
//!
//! ## Architecture
//!
//! ```text
//! URL → ContentFetcher → HTML → extract_visible_text → Clean Text
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let config = ContentFetchConfig::from_env();
//! let fetcher = ContentFetcher::new(config);
//!
//! let html = fetcher.fetch_html("https://example.com").await?;
//! let text = extract_visible_text(&html);
//! ```

pub mod config;
pub mod extractor;
pub mod fetcher;

pub use config::ContentFetchConfig;
pub use extractor::extract_visible_text;
pub use fetcher::{ContentFetcher, FetchError};

//! Page Fetcher Port - Block Explorer Page Retrieval
//!
//! Defines the trait for fetching the raw explorer page of an address.
//! The use-case layer only sees page text; transport details live in
//! the adapters.

use async_trait::async_trait;
use thiserror::Error;

/// Failure to obtain a page body.
///
/// Non-success HTTP statuses are not failures: whatever body the
/// explorer returns is handed to the extractor as-is.
#[derive(Debug, Error)]
pub enum FetchError {
  /// Connect, DNS, TLS or other transport failure.
  #[error("request to {url} failed: {source}")]
  Request {
    url: String,
    #[source]
    source: reqwest::Error,
  },
  /// The response started but the body could not be read.
  #[error("reading body from {url} failed: {source}")]
  Body {
    url: String,
    #[source]
    source: reqwest::Error,
  },
}

/// Source of explorer page text for an address.
#[async_trait]
pub trait PageFetcher: Send + Sync + 'static {
  /// Fetch the full page for `address`.
  ///
  /// `address` is passed through verbatim; it is not validated.
  async fn fetch_page(&self, address: &str) -> Result<String, FetchError>;
}

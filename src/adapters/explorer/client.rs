//! Explorer HTTP Client - Single-shot Page Fetcher
//!
//! Wraps reqwest to GET the explorer page for an address. One attempt,
//! no retries; the whole body is read into memory.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::ports::page_fetcher::{FetchError, PageFetcher};

/// Placeholder substituted with the requested address.
pub const ADDRESS_PLACEHOLDER: &str = "{address}";

/// Configuration for the explorer client.
#[derive(Debug, Clone)]
pub struct ExplorerClientConfig {
  /// URL template containing `{address}`.
  pub url_template: String,
  /// Optional request timeout. `None` waits indefinitely.
  pub timeout: Option<Duration>,
}

impl Default for ExplorerClientConfig {
  fn default() -> Self {
    Self {
      url_template: "https://etherscan.io/address/{address}".to_string(),
      timeout: None,
    }
  }
}

/// reqwest-backed `PageFetcher`.
pub struct ExplorerClient {
  /// Underlying HTTP client.
  http: Client,
  /// Client configuration.
  config: ExplorerClientConfig,
}

impl ExplorerClient {
  /// Create a new explorer client.
  pub fn new(config: ExplorerClientConfig) -> Result<Self> {
    let mut builder = Client::builder().pool_max_idle_per_host(5);
    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }
    let http = builder.build().context("Failed to build HTTP client")?;

    Ok(Self { http, config })
  }

  /// URL of the explorer page for `address`.
  pub fn page_url(&self, address: &str) -> String {
    self.config.url_template.replace(ADDRESS_PLACEHOLDER, address)
  }
}

#[async_trait]
impl PageFetcher for ExplorerClient {
  async fn fetch_page(&self, address: &str) -> Result<String, FetchError> {
    let url = self.page_url(address);

    let response = self.http.get(&url).send().await.map_err(|source| {
      warn!(url = %url, error = %source, "Explorer request failed");
      FetchError::Request {
        url: url.clone(),
        source,
      }
    })?;

    let status = response.status();
    if !status.is_success() {
      debug!(url = %url, status = %status, "Explorer returned non-success status");
    }

    let body = response.text().await.map_err(|source| {
      warn!(url = %url, error = %source, "Explorer body read failed");
      FetchError::Body {
        url: url.clone(),
        source,
      }
    })?;

    debug!(url = %url, bytes = body.len(), "Explorer page fetched");
    Ok(body)
  }
}

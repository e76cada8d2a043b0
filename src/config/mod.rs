//! Configuration Module - TOML-based Service Configuration
//!
//! Loads and validates configuration from an optional `config.toml`.
//! Every section and key has a default, so the service runs without
//! any file at all.

pub mod loader;

use std::time::Duration;

use serde::Deserialize;

use crate::adapters::explorer::ExplorerClientConfig;
use crate::domain::exchanges::{DEFAULT_EXCHANGES, ExchangeList};

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// Service identity and listener.
  pub service: ServiceConfig,
  /// Block explorer endpoint.
  pub explorer: ExplorerConfig,
  /// Known exchange names.
  pub exchanges: ExchangesConfig,
}

/// Service identity and listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
  /// Human-readable service name.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  pub log_level: String,
  /// Listener bind address.
  pub bind_address: String,
}

/// Block explorer configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
  /// Page URL template; `{address}` is replaced with the requested address.
  pub url_template: String,
  /// Outbound request timeout in seconds. Unset means no timeout.
  pub timeout_seconds: Option<u64>,
}

/// Exchange name list configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExchangesConfig {
  /// Names matched as substrings of explorer labels, in scan order.
  pub names: Vec<String>,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      name: "source-fund-service".to_string(),
      log_level: "info".to_string(),
      bind_address: "0.0.0.0:8080".to_string(),
    }
  }
}

impl Default for ExplorerConfig {
  fn default() -> Self {
    Self {
      url_template: "https://etherscan.io/address/{address}".to_string(),
      timeout_seconds: None,
    }
  }
}

impl Default for ExchangesConfig {
  fn default() -> Self {
    Self {
      names: DEFAULT_EXCHANGES.iter().map(ToString::to_string).collect(),
    }
  }
}

impl ExplorerConfig {
  /// Client settings for the explorer adapter.
  pub fn client_config(&self) -> ExplorerClientConfig {
    ExplorerClientConfig {
      url_template: self.url_template.clone(),
      timeout: self.timeout_seconds.map(Duration::from_secs),
    }
  }
}

impl ExchangesConfig {
  /// Freeze the configured names into the shared exchange list.
  pub fn exchange_list(&self) -> ExchangeList {
    ExchangeList::new(self.names.iter().cloned())
  }
}

//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;
use crate::adapters::explorer::client::ADDRESS_PLACEHOLDER;

/// Load and validate configuration from a TOML file.
///
/// A missing file is not an error: defaults are used.
///
/// # Errors
/// Returns detailed error if:
/// - The file exists but can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let config = match std::fs::read_to_string(path) {
    Ok(content) => parse_config(&content)
      .with_context(|| format!("Invalid config file: {}", path.display()))?,
    Err(e) if e.kind() == ErrorKind::NotFound => AppConfig::default(),
    Err(e) => {
      return Err(e)
        .with_context(|| format!("Failed to read config file: {}", path.display()));
    }
  };

  info!(
    exchanges = config.exchanges.names.len(),
    bind = %config.service.bind_address,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig =
    toml::from_str(content).context("Failed to parse config.toml")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - A non-empty bind address
/// - A URL template carrying the address placeholder
/// - A non-empty exchange list with no blank names
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.service.bind_address.is_empty(),
    "service.bind_address must not be empty"
  );

  anyhow::ensure!(
    config.explorer.url_template.contains(ADDRESS_PLACEHOLDER),
    "explorer.url_template must contain {ADDRESS_PLACEHOLDER}, got {}",
    config.explorer.url_template
  );
  if let Some(timeout) = config.explorer.timeout_seconds {
    anyhow::ensure!(timeout > 0, "explorer.timeout_seconds must be positive");
  }

  anyhow::ensure!(
    !config.exchanges.names.is_empty(),
    "At least one exchange name must be configured"
  );
  for (i, name) in config.exchanges.names.iter().enumerate() {
    anyhow::ensure!(!name.is_empty(), "Exchange name {i} is empty");
  }

  Ok(())
}

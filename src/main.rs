//! Source Fund Service — Entry Point
//!
//! Wiring sequence:
//! 1. Load config.toml (defaults when absent) + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Create ExplorerClient (implements PageFetcher port)
//! 4. Create SourceFundService with the frozen exchange list
//! 5. Serve HTTP on the configured bind address
//! 6. Wait for SIGINT → graceful shutdown

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{info, warn};

use source_fund_service::adapters::explorer::ExplorerClient;
use source_fund_service::adapters::http::{self, AppState};
use source_fund_service::adapters::metrics::MetricsRegistry;
use source_fund_service::config;
use source_fund_service::usecases::SourceFundService;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration from config.toml ──────────────
    let config = config::loader::load_config("config.toml")
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.service.log_level)
                }),
        )
        .json()
        .init();

    info!(
        name = %config.service.name,
        version = env!("CARGO_PKG_VERSION"),
        explorer = %config.explorer.url_template,
        exchanges = config.exchanges.names.len(),
        "Starting source fund service"
    );

    // ── 3. Explorer client (PageFetcher port) ───────────────
    let explorer = Arc::new(
        ExplorerClient::new(config.explorer.client_config())
            .context("Failed to create explorer client")?,
    );

    // ── 4. Lookup service with frozen exchange list ─────────
    let exchanges = config.exchanges.exchange_list();
    info!(exchanges = exchanges.len(), "Exchange list frozen");
    let service = Arc::new(
        SourceFundService::new(explorer, exchanges)
            .context("Failed to compile page extractor")?,
    );
    let metrics = Arc::new(MetricsRegistry::new().context("Failed to register metrics")?);

    // ── 5. Serve until SIGINT ───────────────────────────────
    let state = AppState { service, metrics };
    http::serve(&config.service.bind_address, state, async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
        info!("SIGINT received, initiating graceful shutdown");
    })
    .await
    .context("HTTP server failed")?;

    info!("Shutdown complete");
    Ok(())
}

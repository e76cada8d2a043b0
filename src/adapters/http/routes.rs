//! HTTP Routes - Source Fund Lookup Endpoint
//!
//! - `GET /source-fund/address={address}` → JSON list of source funds
//! - `GET /live` → liveness probe
//! - `GET /metrics` → Prometheus text exposition

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, warn};

use crate::adapters::metrics::MetricsRegistry;
use crate::usecases::source_funds::SourceFundService;

/// Prefix of the single path segment carrying the address.
pub const ADDRESS_PREFIX: &str = "address=";

/// Body returned when the explorer page could not be fetched.
pub const FETCH_ERROR_BODY: &str = "Error fetching data\n";

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
  pub service: Arc<SourceFundService>,
  pub metrics: Arc<MetricsRegistry>,
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
  Router::new()
    .route("/source-fund/:query", get(source_fund))
    .route("/live", get(liveness))
    .route("/metrics", get(metrics))
    .with_state(state)
}

/// Look up source funds for the address in `address=<addr>`.
///
/// An empty address does not match the route.
async fn source_fund(
  State(state): State<AppState>,
  Path(query): Path<String>,
) -> Response {
  let Some(address) = query
    .strip_prefix(ADDRESS_PREFIX)
    .filter(|address| !address.is_empty())
  else {
    return StatusCode::NOT_FOUND.into_response();
  };

  let started = Instant::now();
  let result = state.service.lookup(address).await;
  let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

  match result {
    Ok(funds) => {
      state.metrics.record_success(funds.len(), latency_ms);
      (StatusCode::OK, Json(funds)).into_response()
    }
    Err(e) => {
      warn!(address = %address, error = %e, "Source fund lookup failed");
      state.metrics.record_fetch_error(latency_ms);
      (StatusCode::INTERNAL_SERVER_ERROR, FETCH_ERROR_BODY).into_response()
    }
  }
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> impl IntoResponse {
  (StatusCode::OK, "OK")
}

async fn metrics(State(state): State<AppState>) -> Response {
  match state.metrics.render() {
    Ok(text) => text.into_response(),
    Err(e) => {
      error!(error = %e, "Failed to encode metrics");
      StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
  }
}

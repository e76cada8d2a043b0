//! HTTP Server Adapter
//!
//! Exposes the source fund lookup over axum 0.7 and runs the listener
//! until the shutdown signal fires.

pub mod routes;

use std::future::Future;

use tokio::net::TcpListener;
use tracing::{info, instrument};

pub use routes::{AppState, build_router};

/// Bind `bind_address` and serve the router until `shutdown` completes.
///
/// In-flight requests are allowed to finish after shutdown begins.
#[instrument(skip(state, shutdown))]
pub async fn serve<F>(bind_address: &str, state: AppState, shutdown: F) -> anyhow::Result<()>
where
  F: Future<Output = ()> + Send + 'static,
{
  let listener = TcpListener::bind(bind_address).await?;
  serve_listener(listener, state, shutdown).await
}

/// Serve on an already-bound listener.
pub async fn serve_listener<F>(
  listener: TcpListener,
  state: AppState,
  shutdown: F,
) -> anyhow::Result<()>
where
  F: Future<Output = ()> + Send + 'static,
{
  let address = listener.local_addr()?;
  info!(address = %address, "Source fund server listening");

  axum::serve(listener, build_router(state))
    .with_graceful_shutdown(shutdown)
    .await?;

  info!("Source fund server stopped");
  Ok(())
}

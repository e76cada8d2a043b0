//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies, and exposes the use cases over HTTP.
//!
//! Adapter categories:
//! - `explorer`: Block explorer page fetching via reqwest
//! - `http`: Inbound axum server and routes
//! - `metrics`: Prometheus metrics registry

pub mod explorer;
pub mod http;
pub mod metrics;

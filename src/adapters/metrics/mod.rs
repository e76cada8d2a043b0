//! Metrics Adapter
//!
//! Prometheus counters and histograms for source fund lookups.

pub mod prometheus;

pub use self::prometheus::MetricsRegistry;

//! Prometheus Metrics Registry - Lookup Observability
//!
//! Counts lookups by outcome, funds returned, and lookup latency.
//! Exposed as text on `/metrics` by the HTTP adapter.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry,
    TextEncoder,
};

/// Outcome label for a lookup that produced a response body.
pub const OUTCOME_OK: &str = "ok";
/// Outcome label for a lookup that failed to fetch the page.
pub const OUTCOME_FETCH_ERROR: &str = "fetch_error";

/// Centralized Prometheus metrics for the service.
///
/// All metrics follow the naming convention `source_fund_*`.
pub struct MetricsRegistry {
    /// Prometheus registry.
    registry: Registry,
    /// Lookups by outcome.
    pub requests: IntCounterVec,
    /// Total source funds returned across all lookups.
    pub results: IntCounter,
    /// Lookup latency histogram (milliseconds, fetch included).
    pub lookup_latency_ms: Histogram,
}

impl MetricsRegistry {
    /// Create and register all Prometheus metrics.
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new("source_fund_requests_total", "Source fund lookups by outcome"),
            &["outcome"],
        )?;

        let results = IntCounter::new(
            "source_fund_results_total",
            "Source funds returned across all lookups",
        )?;

        let lookup_latency_ms = Histogram::with_opts(
            HistogramOpts::new(
                "source_fund_fetch_latency_ms",
                "Lookup latency in milliseconds, explorer fetch included",
            )
            .buckets(vec![
                50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0,
            ]),
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(results.clone()))?;
        registry.register(Box::new(lookup_latency_ms.clone()))?;

        Ok(Self {
            registry,
            requests,
            results,
            lookup_latency_ms,
        })
    }

    /// Record a successful lookup.
    pub fn record_success(&self, funds: usize, latency_ms: f64) {
        self.requests.with_label_values(&[OUTCOME_OK]).inc();
        self.results.inc_by(funds as u64);
        self.lookup_latency_ms.observe(latency_ms);
    }

    /// Record a lookup whose page fetch failed.
    pub fn record_fetch_error(&self, latency_ms: f64) {
        self.requests.with_label_values(&[OUTCOME_FETCH_ERROR]).inc();
        self.lookup_latency_ms.observe(latency_ms);
    }

    /// Encode all metrics in the Prometheus text format.
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_recorded_values() {
        let metrics = MetricsRegistry::new().unwrap();
        metrics.record_success(3, 120.0);
        metrics.record_fetch_error(10.0);

        let text = metrics.render().unwrap();
        assert!(text.contains(r#"source_fund_requests_total{outcome="ok"} 1"#));
        assert!(text.contains(r#"source_fund_requests_total{outcome="fetch_error"} 1"#));
        assert!(text.contains("source_fund_results_total 3"));
        assert!(text.contains("source_fund_fetch_latency_ms_count 2"));
    }
}

//! Metrics collection and exposition.
//!
//! # Metrics
//! - `contact_submissions_total` (counter): submissions by outcome
//! - `contact_forward_total` (counter): tracker calls by result
//! - `contact_forward_duration_seconds` (histogram): tracker call latency

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one finished submission.
pub fn record_submission(outcome: &'static str) {
    metrics::counter!("contact_submissions_total", "outcome" => outcome).increment(1);
}

/// Count one tracker call and its latency.
pub fn record_forward(result: &'static str, start: Instant) {
    metrics::counter!("contact_forward_total", "result" => result).increment(1);
    metrics::histogram!("contact_forward_duration_seconds", "result" => result)
        .record(start.elapsed().as_secs_f64());
}

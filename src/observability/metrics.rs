//! Metrics collection and exposition.
//!
//! # Metrics
//! - `navigator_resolutions_total` (counter): resolutions by outcome
//!   (`matched`, `redirect`, `not_found`, `error`)
//! - `navigator_request_duration_seconds` (histogram): handler latency
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Prometheus exporter is opt-in via `observability.metrics_enabled`

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics endpoint"),
    }
}

/// Record one handled navigation request.
pub fn record_navigation(outcome: &'static str, start: Instant) {
    metrics::counter!("navigator_resolutions_total", "outcome" => outcome).increment(1);
    metrics::histogram!("navigator_request_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

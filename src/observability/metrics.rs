//! Metrics collection and exposition.
//!
//! # Metrics
//! - `linkdir_requests_total` (counter): requests by outcome
//!   (`page`, `redirect`, `not_modified`, `not_found`, `error`)
//! - `linkdir_routes` (gauge): number of compiled routes
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Prometheus endpoint is opt-in via `observability.metrics_enabled`

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one handled request.
pub fn record_request(outcome: &'static str) {
    metrics::counter!("linkdir_requests_total", "outcome" => outcome).increment(1);
}

/// Publish the size of the route table.
pub fn record_routes(count: usize) {
    metrics::gauge!("linkdir_routes").set(count as f64);
}

//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): proxy requests by method, status
//! - `relay_request_duration_seconds` (histogram): end-to-end latency
//! - `relay_degraded_total` (counter): best-effort fallbacks by path

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::relay::DegradedPath;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one finished proxy request.
pub fn record_request(method: &str, status: u16, start_time: Instant) {
    counter!(
        "relay_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("relay_request_duration_seconds", "method" => method.to_string())
        .record(start_time.elapsed().as_secs_f64());
}

/// Record a best-effort fallback taken while reading an upstream body.
pub fn record_degraded(path: DegradedPath) {
    let label = match path {
        DegradedPath::GzipHeaderRejected => "gzip_header_rejected",
        DegradedPath::BodyTruncated => "body_truncated",
    };
    counter!("relay_degraded_total", "path" => label).increment(1);
}

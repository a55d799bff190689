//! Prometheus metrics for the game server.
//!
//! The exporter listens on its own address, separate from the game routes.
//! Recording functions are no-ops until [`init_metrics`] installs a recorder.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, path: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Game Metrics
// ============================================================================

/// Count a submitted move by outcome (`accepted` or the rejection reason).
pub fn moves_total(outcome: &'static str) {
    metrics::counter!("moves_total", "outcome" => outcome).increment(1);
}

pub fn game_restarts_total() {
    metrics::counter!("game_restarts_total").increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_exporter() {
        http_requests_total("GET", "/game", 200);
        http_request_duration_ms("GET", "/game", 1.5);
        moves_total("accepted");
        game_restarts_total();
    }
}

//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "vidrate_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "vidrate_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "vidrate_http_requests_in_flight";

    // Upstream metrics
    pub const UPSTREAM_LOOKUPS_TOTAL: &str = "vidrate_upstream_lookups_total";
    pub const UPSTREAM_LOOKUP_DURATION_SECONDS: &str = "vidrate_upstream_lookup_duration_seconds";
}

/// Paths reported as-is; anything else is folded into `other`.
const KNOWN_PATHS: &[&str] = &[
    "/lookup",
    "/api/video-fetching",
    "/watch-time",
    "/health",
    "/healthz",
    "/metrics",
];

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record the outcome of one upstream lookup.
pub fn record_lookup(outcome: &str, duration_secs: f64) {
    let labels = [("outcome", outcome.to_string())];
    counter!(names::UPSTREAM_LOOKUPS_TOTAL, &labels).increment(1);
    histogram!(names::UPSTREAM_LOOKUP_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Keep label cardinality bounded.
fn sanitize_path(path: &str) -> String {
    KNOWN_PATHS
        .iter()
        .find(|known| **known == path)
        .map(|known| known.to_string())
        .unwrap_or_else(|| "other".to_string())
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path() {
        assert_eq!(sanitize_path("/lookup"), "/lookup");
        assert_eq!(sanitize_path("/api/video-fetching"), "/api/video-fetching");
        assert_eq!(sanitize_path("/wp-admin/setup.php"), "other");
    }
}

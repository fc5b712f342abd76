//! Request observability middleware.

use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Requests slower than this are logged at warn level.
const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(1);

/// Records per-request latency and flags slow requests.
pub async fn track_request_timing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    metrics::counter!("http_requests_total").increment(1);
    metrics::histogram!("http_request_duration_seconds").record(elapsed.as_secs_f64());

    if elapsed > SLOW_REQUEST_THRESHOLD {
        tracing::warn!(
            %method,
            %path,
            elapsed_ms = elapsed.as_millis() as u64,
            "slow request"
        );
    }

    response
}

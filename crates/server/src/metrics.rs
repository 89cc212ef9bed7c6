use std::future::Future;
use std::time::Instant;

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec, TextEncoder};

use crate::errors::ApiError;

// Prometheus metrics (default registry)
pub static OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "nz_walks_operations_total",
        "Total API operations by resource, operation and outcome",
        &["resource", "operation", "outcome"]
    )
    .expect("register operations_total")
});

pub static REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "nz_walks_request_duration_seconds",
        "Handler duration in seconds",
        &["resource", "operation"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register request_duration")
});

/// Run a handler body, recording its duration and outcome.
pub async fn track<T, F>(resource: &'static str, operation: &'static str, fut: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let started = Instant::now();
    let result = fut.await;
    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => e.outcome(),
    };
    REQUEST_DURATION.with_label_values(&[resource, operation]).observe(started.elapsed().as_secs_f64());
    OPERATIONS_TOTAL.with_label_values(&[resource, operation, outcome]).inc();
    result
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn track_counts_outcomes() {
        let before = OPERATIONS_TOTAL.with_label_values(&["test", "probe", "not_found"]).get();
        let _ = track::<(), _>("test", "probe", async { Err(ApiError::NotFound) }).await;
        assert_eq!(OPERATIONS_TOTAL.with_label_values(&["test", "probe", "not_found"]).get(), before + 1);

        let (status, text) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(text.contains("nz_walks_operations_total"));
    }
}

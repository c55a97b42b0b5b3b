//! Prometheus metrics for calculation counts and request latency.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::calculator::Operation;
use crate::error::{CalcError, ServiceError};

// === Metric Name Constants ===

/// Successful calculations counter metric name.
pub const METRIC_CALCULATIONS: &str = "calculations_total";
/// Rejected calculations counter metric name.
pub const METRIC_CALCULATION_ERRORS: &str = "calculation_errors_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup, after the recorder is installed.
pub fn init_metrics() {
    describe_counter!(
        METRIC_CALCULATIONS,
        "Total number of successful calculations"
    );
    describe_counter!(
        METRIC_CALCULATION_ERRORS,
        "Total number of calculations rejected with a client error"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Install the global Prometheus recorder and return a handle for rendering.
pub fn install_recorder() -> Result<PrometheusHandle, ServiceError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    init_metrics();
    Ok(handle)
}

/// Build a recorder without installing it globally.
///
/// Its handle renders an empty exposition; used where a global recorder
/// may already exist, e.g. in tests.
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}

/// Increment the successful calculations counter.
pub fn inc_calculations(operation: Operation) {
    counter!(METRIC_CALCULATIONS, "operation" => operation.as_ref().to_string()).increment(1);
}

/// Increment the rejected calculations counter.
pub fn inc_calculation_errors(operation: Operation, error: CalcError) {
    counter!(
        METRIC_CALCULATION_ERRORS,
        "operation" => operation.as_ref().to_string(),
        "kind" => error.kind()
    )
    .increment(1);
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
}

/// RAII guard for timing requests.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    endpoint: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given endpoint.
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            start: Instant::now(),
            endpoint,
        }
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        record_http_latency(self.start, self.endpoint);
    }
}

/// Create a latency timer for an operation's endpoint.
pub fn timer_operation(operation: Operation) -> LatencyTimer {
    LatencyTimer::new(operation.path())
}

//! HTTP API handlers.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use utoipa::OpenApi;

use super::docs::ApiDoc;
use super::dto::{ErrorResponse, HealthResponse, OperationRequest, OperationResponse};
use super::extract::OperandBody;
use crate::calculator::{evaluate, Operation};
use crate::metrics;

/// Application state shared with handlers.
///
/// Calculations are stateless; this only carries the metrics handle.
#[derive(Clone)]
pub struct AppState {
    /// Renders the Prometheus exposition for `/metrics`.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create new app state.
    pub fn new(metrics: PrometheusHandle) -> Self {
        Self { metrics }
    }

    /// App state backed by a recorder that is not installed globally.
    pub fn detached() -> Self {
        Self::new(metrics::detached_handle())
    }
}

/// Shared body of the four arithmetic handlers.
fn calculate(operation: Operation, body: Value) -> Response {
    let _timer = metrics::timer_operation(operation);

    match evaluate(operation, &body) {
        Ok(result) => {
            metrics::inc_calculations(operation);
            Json(OperationResponse { result }).into_response()
        }
        Err(e) => {
            metrics::inc_calculation_errors(operation, e);
            e.into_response()
        }
    }
}

/// Add two numbers.
#[utoipa::path(
    post,
    path = "/api/add",
    tag = "calculator",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "Sum of a and b", body = OperationResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn add(body: OperandBody) -> Response {
    calculate(Operation::Add, body.0)
}

/// Subtract b from a.
#[utoipa::path(
    post,
    path = "/api/subtract",
    tag = "calculator",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "Difference a - b", body = OperationResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn subtract(body: OperandBody) -> Response {
    calculate(Operation::Subtract, body.0)
}

/// Multiply two numbers.
#[utoipa::path(
    post,
    path = "/api/multiply",
    tag = "calculator",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "Product of a and b", body = OperationResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn multiply(body: OperandBody) -> Response {
    calculate(Operation::Multiply, body.0)
}

/// Divide a by b.
#[utoipa::path(
    post,
    path = "/api/divide",
    tag = "calculator",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "Quotient a / b", body = OperationResponse),
        (status = 400, description = "Invalid input, or division by zero", body = ErrorResponse)
    )
)]
pub async fn divide(body: OperandBody) -> Response {
    calculate(Operation::Divide, body.0)
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "healthy" })
}

/// Prometheus exposition of the service metrics.
pub async fn prometheus(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// OpenAPI document for the service.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

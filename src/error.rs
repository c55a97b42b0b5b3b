//! Unified error types for the calculator service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::dto::ErrorResponse;

/// Process-level error type.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Metrics recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Errors a single calculation can produce.
///
/// The display strings are the exact messages sent to clients.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// An operand is missing or is not a JSON number.
    #[error("Invalid input")]
    InvalidInput,

    /// Divisor is zero.
    #[error("Division by zero")]
    DivisionByZero,
}

impl CalcError {
    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::DivisionByZero => "division_by_zero",
        }
    }

    /// HTTP status code reported for this error.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for CalcError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_are_exact() {
        assert_eq!(CalcError::InvalidInput.to_string(), "Invalid input");
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn both_errors_are_bad_request() {
        assert_eq!(CalcError::InvalidInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(CalcError::DivisionByZero.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn into_response_sets_status() {
        let response = CalcError::DivisionByZero.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

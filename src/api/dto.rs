//! Request and response bodies.

use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Largest integer an IEEE-754 double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Operands of a binary operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct OperationRequest {
    /// Left operand.
    pub a: f64,
    /// Right operand.
    pub b: f64,
}

/// Result of a successful calculation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct OperationResponse {
    /// Computed value. Non-finite values are encoded as `null`.
    #[serde(serialize_with = "serialize_number")]
    pub result: f64,
}

/// Error body returned with a 4xx status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy".
    #[schema(value_type = String, example = "healthy")]
    pub status: &'static str,
}

/// Serialize a float the way a JavaScript host would print it.
///
/// Integral values within the safe integer range are written without a
/// fractional part (`5` rather than `5.0`). NaN and infinities fall through
/// to `serialize_f64`, which serde_json writes as `null`.
pub fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

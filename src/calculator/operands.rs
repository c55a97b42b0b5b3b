//! Operand extraction from JSON request bodies.

use serde_json::Value;

use crate::error::CalcError;

/// The two operands of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    /// Left operand.
    pub a: f64,
    /// Right operand.
    pub b: f64,
}

impl Operands {
    /// Create operands directly.
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Extract `a` and `b` from a request body.
    ///
    /// Both fields must be present and be JSON numbers. Strings holding
    /// digits, booleans and `null` are rejected, and so is any body that
    /// is not an object.
    pub fn from_json(body: &Value) -> Result<Self, CalcError> {
        Ok(Self {
            a: numeric_field(body, "a")?,
            b: numeric_field(body, "b")?,
        })
    }
}

/// Read a numeric field from its literal text.
///
/// Literals beyond the `f64` range parse to an infinity instead of being
/// dropped, so `1e400` becomes `inf`.
fn numeric_field(body: &Value, key: &str) -> Result<f64, CalcError> {
    match body.get(key) {
        Some(Value::Number(n)) => n
            .to_string()
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidInput),
        _ => Err(CalcError::InvalidInput),
    }
}

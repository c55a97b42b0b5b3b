//! The four binary arithmetic operations.

use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tracing::{debug, instrument};

use super::Operands;
use crate::error::CalcError;

/// Arithmetic operation selected by the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    /// `a + b`.
    Add,
    /// `a - b`.
    Subtract,
    /// `a * b`.
    Multiply,
    /// `a / b`, rejected when `b` is zero.
    Divide,
}

impl Operation {
    /// Route serving this operation.
    pub fn path(self) -> &'static str {
        match self {
            Self::Add => "/api/add",
            Self::Subtract => "/api/subtract",
            Self::Multiply => "/api/multiply",
            Self::Divide => "/api/divide",
        }
    }

    /// Apply the operation with native `f64` semantics.
    ///
    /// Only a zero divisor is rejected. `-0.0 == 0.0`, so negative zero
    /// is rejected too. Overflow yields infinity.
    pub fn apply(self, operands: Operands) -> Result<f64, CalcError> {
        let Operands { a, b } = operands;
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide if b == 0.0 => Err(CalcError::DivisionByZero),
            Self::Divide => Ok(a / b),
        }
    }
}

/// Validate a request body and compute the result of `operation`.
#[instrument(skip(body), fields(operation = %operation))]
pub fn evaluate(operation: Operation, body: &Value) -> Result<f64, CalcError> {
    let operands = Operands::from_json(body).inspect_err(|_| {
        debug!("Rejected non-numeric operands");
    })?;

    let result = operation.apply(operands)?;
    debug!(a = operands.a, b = operands.b, result, "Calculation complete");

    Ok(result)
}

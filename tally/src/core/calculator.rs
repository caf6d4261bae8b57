// src/core/calculator.rs
use tracing::debug;

use crate::error::CalcError;
use crate::models::Operation;

/// Applies the operation named `operation` to `lhs` and `rhs`.
///
/// The name must match one of `add`, `subtract`, `multiply` or `divide`
/// exactly. Callers that bypass the command-line parser reach the
/// unsupported-operation error through here.
///
/// # Arguments
///
/// * `operation` - The operation name
/// * `lhs` - The first operand
/// * `rhs` - The second operand
///
/// # Errors
///
/// * [`CalcError::UnsupportedOperation`] if `operation` is not a known name
/// * [`CalcError::DivisionByZero`] if `operation` is `divide` and `rhs` is zero
#[inline]
pub fn calculate(operation: &str, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
    let op: Operation = operation.parse()?;
    let result = op.apply(lhs, rhs)?;
    debug!(%op, lhs, rhs, result, "calculated");
    Ok(result)
}

// src/error.rs
use thiserror::Error;

/// Failures of the arithmetic evaluator.
///
/// Both variants are terminal: the caller gets no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The operation name is not one of `add`, `subtract`, `multiply`, `divide`.
    #[error("Unsupported operation: '{0}'")]
    UnsupportedOperation(String),

    /// `divide` was asked to divide by zero.
    #[error("division by zero is undefined")]
    DivisionByZero,
}

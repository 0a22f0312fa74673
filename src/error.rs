//! Errors raised by the numeric functions and the memoizer demos.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecursionError {
    /// The naive recursion would need more nested frames than allowed.
    #[error("stack exhausted: recursion depth limit of {limit} frames reached")]
    DepthExceeded { limit: usize },

    #[error("arithmetic overflow in {operation}({argument})")]
    Overflow {
        operation: &'static str,
        argument: u64,
    },
}

pub type Result<T> = std::result::Result<T, RecursionError>;

impl RecursionError {
    /// Reports an overflow against `argument` instead of the inner call that
    /// hit it.
    pub(crate) fn at_argument(self, argument: u64) -> Self {
        match self {
            RecursionError::Overflow { operation, .. } => {
                RecursionError::Overflow { operation, argument }
            }
            other => other,
        }
    }
}

/// Adds two values, reporting an overflow against `operation(argument)`.
pub(crate) fn add(x: u64, y: u64, operation: &'static str, argument: u64) -> Result<u64> {
    x.checked_add(y)
        .ok_or(RecursionError::Overflow { operation, argument })
}

pub(crate) fn mul(x: u64, y: u64, operation: &'static str, argument: u64) -> Result<u64> {
    x.checked_mul(y)
        .ok_or(RecursionError::Overflow { operation, argument })
}

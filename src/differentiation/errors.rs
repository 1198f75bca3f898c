//! Differentiation error types.

use thiserror::Error;

/// Errors raised by the finite-difference estimators.
///
/// - Non-finite evaluation point
/// - Invalid finite-difference step
/// - Non-finite function evaluation at a sample point
#[derive(Debug, Error)]
pub enum DifferentiationError {
    #[error("invalid point: x={x} must be finite")]
    InvalidPoint { x: f64 },

    #[error("invalid finite-difference step: must be finite and > 0. got h={h}")]
    InvalidStep { h: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}

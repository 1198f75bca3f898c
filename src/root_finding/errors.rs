//! Root-finding error types.
//!
//! [`RootFindingError`] : common runtime errors
//! - non-finite function evaluation
//! - invalid global parameters (e.g. max_iter)
//! - iteration budget exhausted without convergence
//!
//! [`ToleranceError`]   : tolerance-related errors
//! - invalid input tolerances
//! - invalid or non-finite computed tolerances
//! - mismatched tolerance type vs. algorithm ([`Algorithm`])
//!
//! Each method module defines its own error enum wrapping these via
//! `#[error(transparent)]`, plus the method-specific precondition and
//! breakdown variants (no sign change, vanishing derivative, ...).

use super::algorithms::Algorithm;
use thiserror::Error;

/// Root-finding runtime errors shared by all methods.
///
/// [`RootFindingError::NonConvergence`] carries the last iterate, its
/// function value, and the iteration count for diagnostics; it is raised
/// whenever the iteration budget runs out before any stopping tolerance is
/// met. A value that fails its own stopping criterion is never returned as
/// a success.
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error(
        "no convergence after {iterations} iterations: \
         last iterate x={last}, f(x)={f_last}"
    )]
    NonConvergence {
        last: f64,
        f_last: f64,
        iterations: usize,
    },
}

/// Tolerance configuration and evaluation errors.
///
/// - Invalid input tolerances (`abs_fx`, `abs_x`, `rel_x`)
/// - Computed tolerance invalid (<= 0 or non-finite)
/// - Mismatched tolerance type vs. algorithm
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid `abs_fx` tolerance: must be finite and > 0. got {got}")]
    InvalidAbsFx { got: f64 },

    #[error("invalid `abs_x` tolerance: must be finite and >= 0. got {got}")]
    InvalidAbsX { got: f64 },

    #[error("invalid `rel_x` tolerance: must be finite and >= 0. got {got}")]
    InvalidRelX { got: f64 },

    #[error("either `abs_x` or `rel_x` must be > 0. got {abs_x} and {rel_x}")]
    InvalidAbsRelX { abs_x: f64, rel_x: f64 },

    #[error("width tolerance not applicable for algorithm {algorithm:?}")]
    WidthTolNotApplicable { algorithm: Algorithm },

    #[error("step tolerance not applicable for algorithm {algorithm:?}")]
    StepTolNotApplicable { algorithm: Algorithm },

    #[error("invalid computed tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}

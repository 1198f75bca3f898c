//! Scalar numerical methods for root-finding and differentiation.
//!
//! - [`root_finding`] : bisection, false position, fixed-point iteration,
//!   Newton's method, and the secant method
//! - [`differentiation`] : centered finite-difference derivative estimation

pub mod differentiation;
pub mod root_finding;

//! Centered-difference first-derivative estimation.

use super::errors::DifferentiationError;

/// Default finite-difference step.
///
/// A compromise at double precision: a larger step increases truncation
/// error (O(h^2) for the centered formula), a smaller one increases
/// floating-point cancellation error in `f(x + h) - f(x - h)`. Reasonable
/// for well-scaled inputs, not exact for any of them.
pub const DEFAULT_STEP: f64 = 1e-5;

/// Estimates the first derivative of `func` at `x` with the centered
/// difference `(f(x + h) - f(x - h)) / (2h)` and the [`DEFAULT_STEP`].
///
/// # Arguments
/// - `func` : the function to differentiate
/// - `x`    : finite evaluation point
///
/// # Returns
/// - `Ok(derivative_estimate)`
///
/// # Errors
/// - [`DifferentiationError::InvalidPoint`]        : `x` non-finite
/// - [`DifferentiationError::NonFiniteEvaluation`] : `f(x +/- h)` produced NaN/inf
pub fn first_derivative<F>(func: F, x: f64) -> Result<f64, DifferentiationError>
where
    F: FnMut(f64) -> f64,
{
    first_derivative_with_step(func, x, DEFAULT_STEP)
}

/// Estimates the first derivative of `func` at `x` with the centered
/// difference `(f(x + h) - f(x - h)) / (2h)` and a caller-supplied step.
///
/// # Arguments
/// - `func` : the function to differentiate
/// - `x`    : finite evaluation point
/// - `h`    : finite-difference step. Must be finite and > 0; see
///   [`DEFAULT_STEP`] for the truncation/cancellation trade-off
///
/// # Returns
/// - `Ok(derivative_estimate)`
///
/// # Errors
/// - [`DifferentiationError::InvalidPoint`]        : `x` non-finite
/// - [`DifferentiationError::InvalidStep`]         : `h` non-finite or <= 0
/// - [`DifferentiationError::NonFiniteEvaluation`] : `f(x +/- h)` produced NaN/inf
pub fn first_derivative_with_step<F>(
    mut func: F,
    x: f64,
    h: f64,
) -> Result<f64, DifferentiationError>
where
    F: FnMut(f64) -> f64,
{
    if !x.is_finite() {
        return Err(DifferentiationError::InvalidPoint { x });
    }
    if !h.is_finite() || h <= 0.0 {
        return Err(DifferentiationError::InvalidStep { h });
    }

    let mut eval = |x: f64| -> Result<f64, DifferentiationError> {
        let fx = func(x);
        if !fx.is_finite() {
            return Err(DifferentiationError::NonFiniteEvaluation { x, fx });
        }

        Ok(fx)
    };

    let fxp = eval(x + h)?;
    let fxm = eval(x - h)?;

    Ok((fxp - fxm) / (2.0 * h))
}

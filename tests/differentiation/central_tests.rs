//! tests for the centered-difference derivative estimator
use approx::assert_relative_eq;

use numeric_roots::differentiation::central::{
    first_derivative, first_derivative_with_step, DEFAULT_STEP,
};
use numeric_roots::differentiation::errors::DifferentiationError;

type TestResult = Result<(), DifferentiationError>;

#[test]
fn square_at_2() -> TestResult {
    // centered difference is exact for quadratics up to rounding
    let d = first_derivative(|x| x * x, 2.0)?;
    assert_relative_eq!(d, 4.0, epsilon = 1e-3);
    Ok(())
}

#[test]
fn cubic_at_1() -> TestResult {
    let d = first_derivative(|x| x.powi(3), 1.0)?;
    assert_relative_eq!(d, 3.0, epsilon = 1e-8);
    Ok(())
}

#[test]
fn sine_at_0() -> TestResult {
    let d = first_derivative(f64::sin, 0.0)?;
    assert_relative_eq!(d, 1.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn exp_with_coarse_step() -> TestResult {
    // truncation error of the centered formula is O(h^2)
    let d = first_derivative_with_step(f64::exp, 0.0, 1e-3)?;
    assert_relative_eq!(d, 1.0, epsilon = 1e-5);
    Ok(())
}

#[test]
fn constant_has_zero_derivative() -> TestResult {
    let d = first_derivative(|_| 7.5, 123.0)?;
    assert_eq!(d, 0.0);
    Ok(())
}

#[test]
fn default_step_is_documented_compromise() {
    assert_eq!(DEFAULT_STEP, 1e-5);
}

#[test]
fn non_finite_point_rejected() {
    let err = first_derivative(|x| x, f64::NAN).unwrap_err();
    assert!(matches!(err, DifferentiationError::InvalidPoint { x } if x.is_nan()));

    let err = first_derivative(|x| x, f64::INFINITY).unwrap_err();
    assert!(matches!(err, DifferentiationError::InvalidPoint { x } if x.is_infinite()));
}

#[test]
fn invalid_step_rejected() {
    let err = first_derivative_with_step(|x| x, 1.0, 0.0).unwrap_err();
    assert!(matches!(err, DifferentiationError::InvalidStep { h } if h == 0.0));

    let err = first_derivative_with_step(|x| x, 1.0, -1e-5).unwrap_err();
    assert!(matches!(err, DifferentiationError::InvalidStep { .. }));

    let err = first_derivative_with_step(|x| x, 1.0, f64::NAN).unwrap_err();
    assert!(matches!(err, DifferentiationError::InvalidStep { .. }));
}

#[test]
fn non_finite_evaluation_reported_with_sample_point() {
    // the lower sample x - h lands exactly on the pole at 0
    let err = first_derivative(|x| x.recip(), DEFAULT_STEP).unwrap_err();
    assert!(matches!(
        err,
        DifferentiationError::NonFiniteEvaluation { x, fx }
        if x == 0.0 && fx.is_infinite()
    ));
}

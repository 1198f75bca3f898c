//! tests for fixed-point iteration
use numeric_roots::root_finding::errors::RootFindingError;
use numeric_roots::root_finding::fixed_point::{fixed_point, FixedPointCfg, FixedPointError};
use numeric_roots::root_finding::report::StoppingCriterion;

type TestResult = Result<(), FixedPointError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    // Babylonian map for sqrt(2); contraction near the fixed point
    let g = |x: f64| (x + 2.0 / x) / 2.0;

    let res = fixed_point(g, 1.0, FixedPointCfg::new())?;

    assert!((res.root - 1.41421356237310).abs() <= 1e-8);
    assert_eq!(res.converged_by, StoppingCriterion::StepSizeReached);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn finds_cubic_fixed_point() -> TestResult {
    // x = g(x) rearrangement of x^3 + 4x^2 - 10 = 0
    let g = |x: f64| 0.5 * (10.0 - x.powi(3)).sqrt();

    let res = fixed_point(g, 1.5, FixedPointCfg::new())?;

    assert!((res.root - 1.36523001341410).abs() <= 1e-7);
    assert!(res.f_root.abs() <= 1e-6);
    Ok(())
}

#[test]
fn reports_fixed_point_residual() -> TestResult {
    let g = |x: f64| (x + 2.0 / x) / 2.0;

    let res = fixed_point(g, 1.0, FixedPointCfg::new())?;

    assert!((g(res.root) - res.root - res.f_root).abs() <= f64::EPSILON);
    Ok(())
}

#[test]
fn identity_map_converges_immediately() -> TestResult {
    let g = |x: f64| x;

    let res = fixed_point(g, 3.0, FixedPointCfg::new())?;

    assert_eq!(res.root, 3.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.f_root, 0.0);
    Ok(())
}

#[test]
fn diverging_map_is_detected() {
    // iterates square each step and overflow to infinity
    let g = |x: f64| x * x;

    let err = fixed_point(g, 2.0, FixedPointCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        FixedPointError::Diverged { x, iteration } if x.is_infinite() && iteration > 0
    ));
}

#[test]
fn oscillating_map_exhausts_budget() -> TestResult {
    let g = |x: f64| -x;
    let niter = 10;

    let cfg = FixedPointCfg::new().set_max_iter(niter)?;
    let err = fixed_point(g, 1.0, cfg).unwrap_err();

    assert!(matches!(
        err,
        FixedPointError::Common(RootFindingError::NonConvergence { iterations, .. })
        if iterations == niter
    ));
    Ok(())
}

#[test]
fn invalid_guess_nan_rejected() {
    let g = |x: f64| x;
    let err = fixed_point(g, f64::NAN, FixedPointCfg::new()).unwrap_err();
    assert!(matches!(err, FixedPointError::InvalidGuess { x0 } if x0.is_nan()));
}

#[test]
fn invalid_max_iter_rejected_by_setter() {
    let err = FixedPointCfg::new().set_max_iter(0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidMaxIter { got: 0 }));
}

#[test]
fn stencil_holds_previous_iterate() -> TestResult {
    let g = |x: f64| (x + 2.0 / x) / 2.0;

    let res = fixed_point(g, 1.0, FixedPointCfg::new())?;

    let s = res.stencil.stencil();
    assert_eq!(s.len(), 1);
    assert!((g(s[0]) - res.root).abs() <= f64::EPSILON);
    Ok(())
}

#[test]
fn algorithm_field_is_fixed_point() -> TestResult {
    let g = |x: f64| (x + 2.0 / x) / 2.0;
    let res = fixed_point(g, 1.0, FixedPointCfg::new())?;

    assert_eq!(res.algorithm_name, "fixed_point");
    Ok(())
}

//! tests for the false position (regula falsi) root-finding algorithm
use numeric_roots::root_finding::errors::RootFindingError;
use numeric_roots::root_finding::false_position::{
    false_position, FalsePositionCfg, FalsePositionError,
};
use numeric_roots::root_finding::report::StoppingCriterion;

type TestResult = Result<(), FalsePositionError>;

#[test]
fn finds_cos_x_intersection() -> TestResult {
    let f = |x: f64| x.cos() - x;

    let res = false_position(f, 0.5, 0.25 * std::f64::consts::PI, FalsePositionCfg::new())?;

    assert!((res.root - 0.73908513321516).abs() <= 1e-8);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn finds_cubic_root() -> TestResult {
    let f = |x: f64| x.powi(3) + 4.0 * x * x - 10.0;

    let res = false_position(f, 1.0, 2.0, FalsePositionCfg::new())?;

    assert!((res.root - 1.36523001341410).abs() <= 1e-8);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn converges_despite_stagnant_endpoint() -> TestResult {
    // convex on [1, 2]: the right endpoint never moves in the pure method,
    // which slows convergence but must not break it
    let f = |x: f64| x.powi(3) + 4.0 * x * x - 10.0;

    let res = false_position(f, 1.0, 2.0, FalsePositionCfg::new())?;

    let s = res.stencil.stencil();
    assert_eq!(s[1], 2.0);
    assert!((res.root - 1.36523001341410).abs() <= 1e-8);
    Ok(())
}

#[test]
fn no_sign_change() {
    let f = |x: f64| x + 5.0;
    let err = false_position(f, 0.0, 1.0, FalsePositionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        FalsePositionError::NoSignChange { a, b } if a == 0.0 && b == 1.0
    ));
}

#[test]
fn detects_invalid_bounds() {
    let f = |x: f64| x;
    let err = false_position(f, 2.0, 0.0, FalsePositionCfg::new()).unwrap_err();
    assert!(matches!(err, FalsePositionError::InvalidBounds { .. }));
}

#[test]
fn endpoint_a_is_root_iterations_0() -> TestResult {
    let f = |x: f64| x;
    let res = false_position(f, 0.0, 5.0, FalsePositionCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.converged_by, StoppingCriterion::AbsFxReached);
    Ok(())
}

#[test]
fn non_finite_eval_at_endpoint() {
    let f = |x: f64| x.sqrt() - 2.0;
    let err = false_position(f, -1.0, 5.0, FalsePositionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        FalsePositionError::Common(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == -1.0 && fx.is_nan()
    ));
}

#[test]
fn exhausted_budget_is_non_convergence_error() -> TestResult {
    let f = |x: f64| x.powi(3) + 4.0 * x * x - 10.0;
    let niter = 2;

    let cfg = FalsePositionCfg::new()
        .set_abs_fx(1e-300)?
        .set_abs_x(1e-300)?
        .set_max_iter(niter)?;

    let err = false_position(f, 1.0, 2.0, cfg).unwrap_err();

    assert!(matches!(
        err,
        FalsePositionError::Common(RootFindingError::NonConvergence { iterations, .. })
        if iterations == niter
    ));
    Ok(())
}

#[test]
fn linear_function_converges_in_one_iteration() -> TestResult {
    // the chord of a line is the line itself, so the first estimate is exact
    let f = |x: f64| 2.0 * x - 1.0;

    let res = false_position(f, -1.0, 1.0, FalsePositionCfg::new())?;

    assert_eq!(res.iterations, 1);
    assert_eq!(res.converged_by, StoppingCriterion::AbsFxReached);
    assert!((res.root - 0.5).abs() <= 1e-12);
    Ok(())
}

#[test]
fn algorithm_field_is_false_position() -> TestResult {
    let f = |x: f64| x.cos() - x;
    let res = false_position(f, 0.5, 1.0, FalsePositionCfg::new())?;

    assert_eq!(res.algorithm_name, "false_position");
    Ok(())
}

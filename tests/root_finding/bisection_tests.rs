//! tests for the bisection root-finding algorithm
use numeric_roots::root_finding::bisection::{bisection, BisectionCfg, BisectionError};
use numeric_roots::root_finding::errors::{RootFindingError, ToleranceError};
use numeric_roots::root_finding::report::StoppingCriterion;

type TestResult = Result<(), BisectionError>;

#[test]
fn finds_half_on_symmetric_interval() -> TestResult {
    let f = |x: f64| 2.0 * x - 1.0;

    let res = bisection(f, -1.0, 1.0, BisectionCfg::new())?;

    assert!((res.root - 0.5).abs() <= 1e-8);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn finds_cubic_root() -> TestResult {
    let f = |x: f64| x.powi(3) + 4.0 * x * x - 10.0;

    let res = bisection(f, 1.0, 2.0, BisectionCfg::new())?;

    assert!((res.root - 1.36523001341410).abs() <= 1e-8);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let tol = 1e-10;

    let cfg = BisectionCfg::new()
        .set_abs_fx(tol)?
        .set_abs_x(tol)?
        .set_max_iter(60)?;

    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert!((res.root - 2.0_f64.sqrt()).abs() <= tol);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn width_criterion_takes_priority_on_flat_function() -> TestResult {
    // f is extremely flat around its root; |f(m)| cannot reach 1e-300,
    // so only the bracket-width criterion can stop the loop
    let f = |x: f64| x.powi(3);

    let cfg = BisectionCfg::new().set_abs_fx(1e-300)?;
    let res = bisection(f, -1.0, 2.0, cfg)?;

    assert_eq!(res.converged_by, StoppingCriterion::WidthTolReached);
    assert!(res.root.abs() <= 1e-7);
    Ok(())
}

#[test]
fn no_sign_change() {
    let f = |x: f64| x + 5.0;
    let err = bisection(f, 0.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::NoSignChange { a, b } if a == 0.0 && b == 1.0));
}

#[test]
fn detects_invalid_bounds() {
    let f = |x: f64| x;
    let err = bisection(f, 2.0, 0.0, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBounds { .. }));
}

#[test]
fn identical_bounds_are_invalid() {
    let f = |x: f64| x;
    let err = bisection(f, 1.0, 1.0, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBounds { a, b } if a == 1.0 && b == 1.0));
}

#[test]
fn endpoint_a_is_root_iterations_0() -> TestResult {
    let f = |x: f64| x;
    let res = bisection(f, 0.0, 5.0, BisectionCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.converged_by, StoppingCriterion::AbsFxReached);
    Ok(())
}

#[test]
fn endpoint_b_is_root_iterations_0() -> TestResult {
    let f = |x: f64| x;
    let res = bisection(f, -5.0, 0.0, BisectionCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 0);
    Ok(())
}

#[test]
fn non_finite_eval_at_midpoint() {
    let f = |x: f64| 1.0 / x;
    let err = bisection(f, -1.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 0.0 && fx.is_infinite()
    ));
}

#[test]
fn exhausted_budget_is_non_convergence_error() -> TestResult {
    let f = |x: f64| x;
    let niter = 3;

    let cfg = BisectionCfg::new()
        .set_abs_fx(1e-300)?
        .set_abs_x(1e-300)?
        .set_max_iter(niter)?;

    let err = bisection(f, -3.0, 2.0, cfg).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::NonConvergence { last, iterations, .. })
        if iterations == niter && last.is_finite()
    ));
    Ok(())
}

#[test]
fn bracket_invariant_reflected_in_stencil() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let res = bisection(f, 0.0, 2.0, BisectionCfg::new())?;

    let s = res.stencil.stencil();
    assert_eq!(s.len(), 2);
    assert!(s[0] <= res.root && res.root <= s[1]);
    Ok(())
}

#[test]
fn invalid_abs_fx_rejected_by_setter() {
    let err = BisectionCfg::new().set_abs_fx(0.0).unwrap_err();
    assert!(matches!(err, ToleranceError::InvalidAbsFx { .. }));
}

#[test]
fn invalid_max_iter_rejected_by_setter() {
    let err = BisectionCfg::new().set_max_iter(0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidMaxIter { got: 0 }));
}

#[test]
fn algorithm_field_is_bisection() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let res = bisection(f, 0.0, 2.0, BisectionCfg::new())?;

    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

//! False position (regula falsi) method.

use super::algorithms::{Algorithm, BracketFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, Stencil, StoppingCriterion};
use super::signs::{opposite_sign, same_sign};
use super::tolerances::DynamicTolerance;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FalsePositionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("denominator fb - fa too small in interpolation step: fa={fa}, fb={fb}, denom={denom}")]
    DegenerateSecantStep { fa: f64, fb: f64, denom: f64 },
}

/// False position configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Construction
/// - Use [`FalsePositionCfg::new`] then optional setters.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`false_position`] resolves it using
///   [`Algorithm::default_max_iter`] for [`BracketFamily::FalsePosition`],
///   capped at [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone)]
pub struct FalsePositionCfg {
    common: CommonCfg,
}
impl FalsePositionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for FalsePositionCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(FalsePositionCfg);

/// Calculates the linear-interpolation x-intercept for the line
/// connecting `(a, fa)` and `(b, fb)`.
///
/// # Arguments
/// - `(a, fa)` : left endpoint and function value
/// - `(b, fb)` : right endpoint and function value
///
/// # Returns
/// - `Ok(x_intercept)` if denominator `fb - fa` is well-scaled
/// - `Err(DegenerateSecantStep)` if denominator is too small to divide by
#[inline]
fn interpolation_x_intercept(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
) -> Result<f64, FalsePositionError> {
    let denom = fb - fa;
    let scale = fa.abs().max(fb.abs()).max(1.0);

    if denom.abs() <= f64::EPSILON * scale {
        return Err(FalsePositionError::DegenerateSecantStep { fa, fb, denom });
    }

    Ok((a * fb - b * fa) / denom)
}

/// Finds a root of `func` using the pure
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// This method assumes that `func` is continuous on the interval `[a, b]`
/// and that `func(a)` and `func(b)` have opposite signs, guaranteeing a root
/// exists within the interval.
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `a`    : Lower bound of the search interval. Must be finite and less than `b`
/// - `b`    : Upper bound of the search interval. Must be finite and greater than `a`
/// - `cfg`  : [`FalsePositionCfg`] (tolerances, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`           : approximate root
/// - `f_root`         : function value at `root`
/// - `iterations`     : number of iterations performed (0 if a bound is
///   already a root)
/// - `evaluations`    : total function evaluations
/// - `converged_by`   : which stopping criterion triggered
/// - `stencil`        : final bracketing interval
/// - `algorithm_name` : "false_position"
///
/// # Errors
/// - [`FalsePositionError::InvalidBounds`]        : `a` or `b` is NaN/inf or `a >= b`
/// - [`FalsePositionError::NoSignChange`]         : `func(a)` and `func(b)` share a sign
/// - [`FalsePositionError::DegenerateSecantStep`] : denominator `fb - fa`
///   numerically indistinguishable from zero. Reported immediately; there is
///   no internal fallback step.
///
/// * Propagated via [`FalsePositionError::Common`]
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
/// - [`RootFindingError::InvalidMaxIter`]      : `max_iter` = 0
/// - [`RootFindingError::NonConvergence`]      : iteration budget exhausted;
///   carries the last estimate, its function value, and the iteration count
///
/// # Behavior
/// - Update: `p = b - f(b) * (b - a) / (f(b) - f(a))`, the x-intercept of
///   the chord through the bracket endpoints.
/// - Stopping rule: `|f(p)| <= abs_fx`, or `|p - p_prev| <=` step tolerance
///   once two estimates exist.
/// - The endpoint whose function value shares the sign of `f(p)` is replaced
///   by `p`, so `f(a) * f(b) < 0` holds on every iteration.
///
/// # Warning
/// - One endpoint can stagnate on convex or concave functions, making
///   convergence slower than bisection. That is the documented behavior of
///   the pure method; no Illinois/Pegasus-style rescaling is applied.
pub fn false_position<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: FalsePositionCfg,
) -> Result<RootFindingReport, FalsePositionError>
where
    F: FnMut(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(FalsePositionError::InvalidBounds { a, b });
    }

    let algorithm = Algorithm::Bracket(BracketFamily::FalsePosition);
    let algo_name = algorithm.algorithm_name();

    let abs_fx = cfg.common.abs_fx();
    let abs_x = cfg.common.abs_x();
    let rel_x = cfg.common.rel_x();

    let num_iter = match cfg.common.max_iter() {
        // already validated via building config; redundant guard
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),

        Some(v) => v,
        None => algorithm.default_max_iter().min(GLOBAL_MAX_ITER_FALLBACK),
    };

    // track function evaluations
    let mut evals = 0;

    // wraps func, increments evals, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, FalsePositionError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }

        Ok(fx)
    };

    // early exit: a is root
    let mut fa = eval(a)?;
    if fa.abs() <= abs_fx {
        return Ok(RootFindingReport {
            root: a,
            f_root: fa,
            iterations: 0,
            evaluations: evals,
            converged_by: StoppingCriterion::AbsFxReached,
            stencil: Stencil::Bracket { bounds: [a, b] },
            algorithm_name: algo_name,
        });
    }
    // early exit: b is root
    let mut fb = eval(b)?;
    if fb.abs() <= abs_fx {
        return Ok(RootFindingReport {
            root: b,
            f_root: fb,
            iterations: 0,
            evaluations: evals,
            converged_by: StoppingCriterion::AbsFxReached,
            stencil: Stencil::Bracket { bounds: [a, b] },
            algorithm_name: algo_name,
        });
    }

    if !opposite_sign(fa, fb) {
        return Err(FalsePositionError::NoSignChange { a, b });
    }

    // main loop
    let mut prev_estimate = b;
    let mut estimate = a; // gets overwritten
    let mut f_estimate = fa; // gets overwritten
    for iter in 1..=num_iter {
        estimate = interpolation_x_intercept((a, fa), (b, fb))?;
        f_estimate = eval(estimate)?;

        if f_estimate.abs() <= abs_fx {
            return Ok(RootFindingReport {
                root: estimate,
                f_root: f_estimate,
                iterations: iter,
                evaluations: evals,
                converged_by: StoppingCriterion::AbsFxReached,
                stencil: Stencil::Bracket { bounds: [a, b] },
                algorithm_name: algo_name,
            });
        }

        // successive-estimate step tolerance
        let step_tol = algorithm.calculate_tolerance(
            &DynamicTolerance::WidthTol { a, b },
            abs_x,
            rel_x,
        )?;
        if iter > 1 && (estimate - prev_estimate).abs() <= step_tol {
            return Ok(RootFindingReport {
                root: estimate,
                f_root: f_estimate,
                iterations: iter,
                evaluations: evals,
                converged_by: StoppingCriterion::StepSizeReached,
                stencil: Stencil::Bracket { bounds: [a, b] },
                algorithm_name: algo_name,
            });
        }

        // replace the endpoint sharing the sign of f(p), preserving the
        // sign change
        if same_sign(fa, f_estimate) {
            a = estimate;
            fa = f_estimate;
        } else {
            b = estimate;
            fb = f_estimate;
        }

        prev_estimate = estimate;
    }

    Err(RootFindingError::NonConvergence {
        last: estimate,
        f_last: f_estimate,
        iterations: num_iter,
    }
    .into())
}

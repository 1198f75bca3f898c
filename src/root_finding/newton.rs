//! Newton-Raphson method.

use super::algorithms::{Algorithm, GLOBAL_MAX_ITER_FALLBACK, OpenFamily};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, Stencil, StoppingCriterion};
use super::tolerances::DynamicTolerance;
use crate::differentiation::central::DEFAULT_STEP;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("derivative too small to divide by at x={x}, f'(x)={dfx}")]
    DerivativeTooSmall { x: f64, dfx: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },

    #[error("step non-finite at x={x}, step={step}; x + step undefined")]
    StepNotFinite { x: f64, step: f64 },
}

/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`newton`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Newton`],
///   capped at [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for NewtonCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg);

/// Threshold below which a derivative is numerically unsafe to divide
/// `fx` by. Scaled to the numerator so the rejected quotients are exactly
/// those that would overflow or lose all significance.
#[inline]
fn derivative_threshold(fx: f64) -> f64 {
    f64::EPSILON * fx.abs().max(1.0) + f64::MIN_POSITIVE
}

/// Helpers
/// - `eval_fx_checked`   : evaluates `f(x)` with finite-check
/// - `eval_dfx_analytic` : evaluates user-supplied derivative `df(x)`
/// - `eval_dfx_fd`       : centered finite-difference fallback
#[inline]
fn eval_fx_checked<F>(f: &mut F, x: f64, evals: &mut usize) -> Result<f64, NewtonError>
where
    F: FnMut(f64) -> f64,
{
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }

    Ok(fx)
}
#[inline]
fn eval_dfx_analytic<G>(df: &mut G, x: f64, evals: &mut usize) -> Result<f64, NewtonError>
where
    G: FnMut(f64) -> f64,
{
    let dfx = { *evals += 1; df(x) };
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    Ok(dfx)
}
#[inline]
fn eval_dfx_fd<F>(f: &mut F, x: f64, evals: &mut usize) -> Result<f64, NewtonError>
where
    F: FnMut(f64) -> f64,
{
    // centered difference with the same step as the standalone estimator
    let h = DEFAULT_STEP;
    let fxp = eval_fx_checked(f, x + h, evals)?;
    let fxm = eval_fx_checked(f, x - h, evals)?;
    let dfx = (fxp - fxm) / (2.0 * h);
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    Ok(dfx)
}

/// Finds a root of `func` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method).
/// Supports analytic derivatives or a centered finite-difference fallback.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : optional analytic derivative; if `None`, a centered finite
///   difference with the differentiation module's
///   [`DEFAULT_STEP`] is used
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (tolerances, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`           : approximate root
/// - `f_root`         : function value at `root`
/// - `iterations`     : number of iterations performed
/// - `evaluations`    : total evaluations (f and f')
/// - `converged_by`   : which stopping criterion triggered
/// - `stencil`        : previous iterate used to form the step
/// - `algorithm_name` : "newton"
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]        : `x0` non-finite
/// - [`NewtonError::DerivativeTooSmall`]  : `|f'(x)|` below the numerical
///   safety threshold. Checked *before* the division, so a vanishing
///   derivative never propagates a non-finite iterate.
/// - [`NewtonError::DerivativeNotFinite`] : derivative non-finite
/// - [`NewtonError::StepNotFinite`]       : `x + step` not representable
///
/// * Propagated via [`NewtonError::Common`]
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::InvalidMaxIter`]      : `max_iter` = 0
/// - [`RootFindingError::NonConvergence`]      : iteration budget exhausted;
///   carries the last iterate, its function value, and the iteration count
///
/// # Behavior
/// - Update: `x_{n+1} = x_n - f(x_n) / f'(x_n)`.
/// - Stops when `|f(x_{n+1})| <= abs_fx` or `|x_{n+1} - x_n| <=` step
///   tolerance; immediate success at `x0` returns with zero iterations.
///
/// # Notes
/// - Convergence is quadratic near a simple root given a good initial guess
///   and smooth `f`; near a root of multiplicity > 1 it degrades to linear.
/// - Convergence is *local only*. Poor guesses or ill-behaved functions can
///   diverge or cycle; for guaranteed convergence, use a bracketed method
///   (e.g. [`bisection`](super::bisection::bisection)).
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    let algorithm = Algorithm::Open(OpenFamily::Newton);
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

    let mut evals: usize = 0;

    // early exit: x0 is root
    let mut x = x0;
    let mut fx = eval_fx_checked(&mut func, x, &mut evals)?;
    if fx.abs() <= abs_fx {
        return Ok(RootFindingReport {
            root: x0,
            f_root: fx,
            iterations: 0,
            evaluations: evals,
            converged_by: StoppingCriterion::AbsFxReached,
            stencil: Stencil::singleton(x0),
            algorithm_name: algo_name,
        });
    }

    // main loop
    for iter in 1..=num_iter {
        let dfx = match dfunc.as_mut() {
            Some(df) => eval_dfx_analytic(df, x, &mut evals)?,
            None => eval_dfx_fd(&mut func, x, &mut evals)?,
        };

        // refuse the division outright rather than let the step blow up
        if dfx.abs() <= derivative_threshold(fx) {
            return Err(NewtonError::DerivativeTooSmall { x, dfx });
        }

        let step = -fx / dfx;
        let x_next = x + step;
        if !x_next.is_finite() {
            return Err(NewtonError::StepNotFinite { x, step });
        }

        // check |f(x)| tolerance
        let fx_next = eval_fx_checked(&mut func, x_next, &mut evals)?;
        if fx_next.abs() <= abs_fx {
            return Ok(RootFindingReport {
                root: x_next,
                f_root: fx_next,
                iterations: iter,
                evaluations: evals,
                converged_by: StoppingCriterion::AbsFxReached,
                stencil: Stencil::singleton(x),
                algorithm_name: algo_name,
            });
        }

        // check step tolerance
        let step_tol = algorithm.calculate_tolerance(
            &DynamicTolerance::step_two_scalars(x, x_next),
            abs_x,
            rel_x,
        )?;
        if (x_next - x).abs() <= step_tol {
            return Ok(RootFindingReport {
                root: x_next,
                f_root: fx_next,
                iterations: iter,
                evaluations: evals,
                converged_by: StoppingCriterion::StepSizeReached,
                stencil: Stencil::singleton(x),
                algorithm_name: algo_name,
            });
        }

        x = x_next;
        fx = fx_next;
    }

    Err(RootFindingError::NonConvergence {
        last: x,
        f_last: fx,
        iterations: num_iter,
    }
    .into())
}

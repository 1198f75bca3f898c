//! Secant method.

use super::algorithms::{Algorithm, GLOBAL_MAX_ITER_FALLBACK, OpenFamily};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, Stencil, StoppingCriterion};
use super::tolerances::DynamicTolerance;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guesses: x0={x0} and x1={x1} must be finite and distinct")]
    InvalidGuess { x0: f64, x1: f64 },

    #[error("degenerate secant: denominator f(x1) - f(x0) near 0. fx0={fx0}, fx1={fx1}")]
    DegenerateSecantStep { fx0: f64, fx1: f64 },
}

/// Secant configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`secant`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Secant`],
///   capped at [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for SecantCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SecantCfg);

/// Calculates the secant x-intercept for the line
/// connecting `(x1, fx1)` and `(x2, fx2)`.
///
/// # Arguments
/// - `(x1, fx1)` : secant endpoint 1 and function value
/// - `(x2, fx2)` : secant endpoint 2 and function value
///
/// # Returns
/// - `Ok(x_secant)` if denominator `fx2 - fx1` is well-scaled
/// - `Err(DegenerateSecantStep)` if denominator is too small to divide by.
///   The check happens before the division; a flat secant never produces a
///   non-finite iterate.
#[inline]
fn secant_x_intercept(
    (x1, fx1): (f64, f64),
    (x2, fx2): (f64, f64),
) -> Result<f64, SecantError> {
    let denom = fx2 - fx1;
    let scale = fx1.abs().max(fx2.abs()).max(1.0);
    let thresh = f64::EPSILON * scale + f64::MIN_POSITIVE;

    if denom.abs() <= thresh {
        return Err(SecantError::DegenerateSecantStep { fx0: fx1, fx1: fx2 });
    }

    Ok((x1 * fx2 - x2 * fx1) / denom)
}

/// Finds a root of `func` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess.  Must be finite and not equal to `x1`
/// - `x1`   : Second initial guess. Must be finite and not equal to `x0`
/// - `cfg`  : [`SecantCfg`] (tolerances, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`           : approximate root
/// - `f_root`         : function value at `root`
/// - `iterations`     : number of iterations performed
/// - `evaluations`    : total function evaluations
/// - `converged_by`   : which stopping criterion triggered
/// - `stencil`        : previous iterates used to form the step
/// - `algorithm_name` : "secant"
///
/// # Errors
/// - [`SecantError::InvalidGuess`]          : `x0` or `x1` is NaN/inf or equal
/// - [`SecantError::DegenerateSecantStep`]  : `f(x_n) - f(x_{n-1})`
///   numerically indistinguishable from zero. Reported immediately; there is
///   no internal fallback step.
///
/// * Propagated via [`SecantError::Common`]
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::InvalidMaxIter`]      : `max_iter` = 0
/// - [`RootFindingError::NonConvergence`]      : iteration budget exhausted;
///   carries the last iterate, its function value, and the iteration count
///
/// # Behavior
/// - Update:
///   `x_{n+1} = x_n - f(x_n) * (x_n - x_{n-1}) / (f(x_n) - f(x_{n-1}))`
/// - Stops when `|f(x_{n+1})| <= abs_fx` or `|x_{n+1} - x_n| <=` step
///   tolerance; returns with zero iterations when an initial guess is
///   already a root or the guesses already satisfy the step tolerance.
///
/// # Notes
/// - Convergence is superlinear (order ~1.618) near a simple root, but
///   requires two distinct starting guesses and no sign-change guarantee.
///
/// # Warning
/// - Poor initial guesses may lead to divergence or extremely slow
///   convergence. For guaranteed convergence, use a bracketed method
///   (e.g. [`bisection`](super::bisection::bisection)).
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg,
) -> Result<RootFindingReport, SecantError>
where
    F: FnMut(f64) -> f64,
{
    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return Err(SecantError::InvalidGuess { x0, x1 });
    }

    let algorithm = Algorithm::Open(OpenFamily::Secant);
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
    let mut eval = |x: f64| -> Result<f64, SecantError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }

        Ok(fx)
    };

    // early exit: x0 is root
    let fx0 = eval(x0)?;
    if fx0.abs() <= abs_fx {
        return Ok(RootFindingReport {
            root: x0,
            f_root: fx0,
            iterations: 0,
            evaluations: evals,
            converged_by: StoppingCriterion::AbsFxReached,
            stencil: Stencil::singleton(x0),
            algorithm_name: algo_name,
        });
    }
    // early exit: x1 is root
    let fx1 = eval(x1)?;
    if fx1.abs() <= abs_fx {
        return Ok(RootFindingReport {
            root: x1,
            f_root: fx1,
            iterations: 0,
            evaluations: evals,
            converged_by: StoppingCriterion::AbsFxReached,
            stencil: Stencil::singleton(x1),
            algorithm_name: algo_name,
        });
    }

    // step tolerance already satisfied
    let step_tol = algorithm.calculate_tolerance(
        &DynamicTolerance::step_two_scalars(x0, x1),
        abs_x,
        rel_x,
    )?;
    if (x1 - x0).abs() <= step_tol {
        return Ok(RootFindingReport {
            root: x1,
            f_root: fx1,
            iterations: 0,
            evaluations: evals,
            converged_by: StoppingCriterion::StepSizeReached,
            stencil: Stencil::doubleton(x0, x1),
            algorithm_name: algo_name,
        });
    }

    // main loop
    let mut x_prev = x0;
    let mut f_prev = fx0;
    let mut x_curr = x1;
    let mut f_curr = fx1;
    for iter in 1..=num_iter {
        let x_next = secant_x_intercept((x_prev, f_prev), (x_curr, f_curr))?;
        let f_next = eval(x_next)?;

        // check |f(x)| tolerance
        if f_next.abs() <= abs_fx {
            return Ok(RootFindingReport {
                root: x_next,
                f_root: f_next,
                iterations: iter,
                evaluations: evals,
                converged_by: StoppingCriterion::AbsFxReached,
                stencil: Stencil::doubleton(x_prev, x_curr),
                algorithm_name: algo_name,
            });
        }

        // check step tolerance
        let step_tol = algorithm.calculate_tolerance(
            &DynamicTolerance::step_two_scalars(x_curr, x_next),
            abs_x,
            rel_x,
        )?;
        if (x_next - x_curr).abs() <= step_tol {
            return Ok(RootFindingReport {
                root: x_next,
                f_root: f_next,
                iterations: iter,
                evaluations: evals,
                converged_by: StoppingCriterion::StepSizeReached,
                stencil: Stencil::doubleton(x_prev, x_curr),
                algorithm_name: algo_name,
            });
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f_next;
    }

    Err(RootFindingError::NonConvergence {
        last: x_curr,
        f_last: f_curr,
        iterations: num_iter,
    }
    .into())
}

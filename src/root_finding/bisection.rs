//! Bisection method.

use super::algorithms::{Algorithm, BracketFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, Stencil, StoppingCriterion};
use super::signs::opposite_sign;
use super::tolerances::DynamicTolerance;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}

/// Bisection configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Construction
/// - Use [`BisectionCfg::new`] then optional setters.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`bisection`] resolves it using
///   [`Algorithm::default_max_iter`] for [`BracketFamily::Bisection`],
///   capped at [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for BisectionCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BisectionCfg);

/// Midpoint of [a, b], written to avoid overflow of `a + b`.
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}

/// Finds a root of `func` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that `func` is continuous on the interval `[a, b]`
/// and that `func(a)` and `func(b)` have opposite signs, guaranteeing a root
/// exists within the interval.
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `a`    : Lower bound of the search interval. Must be finite and less than `b`
/// - `b`    : Upper bound of the search interval. Must be finite and greater than `a`
/// - `cfg`  : [`BisectionCfg`] (tolerances, optional `max_iter`)
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
/// - `algorithm_name` : "bisection"
///
/// # Errors
/// - [`BisectionError::InvalidBounds`] : `a` or `b` is NaN/inf or `a >= b`
/// - [`BisectionError::NoSignChange`]  : `func(a)` and `func(b)` share a sign
///
/// * Propagated via [`BisectionError::Common`]
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
/// - [`RootFindingError::InvalidMaxIter`]      : `max_iter` = 0
/// - [`RootFindingError::NonConvergence`]      : iteration budget exhausted;
///   carries the last midpoint, its function value, and the iteration count
///
/// # Behavior
/// - Each iteration evaluates the midpoint `m = a + (b - a) / 2` and checks
///   the half-width `(b - a) / 2` against the width tolerance *before* the
///   `|f(m)| <= abs_fx` check; near flat regions of `f` the bracket-width
///   criterion takes priority.
/// - The endpoint whose function value shares the sign of `f(m)` is replaced
///   by `m`, so `f(a) * f(b) < 0` holds on every iteration.
///
/// # Notes
/// - Convergence is linear: the bracket halves each step, so meeting a width
///   tolerance `tol` takes about `log2((b - a) / tol)` iterations.
/// # Warning
/// - A sign change is required even if `(b - a)` already meets the interval
///   width tolerance.
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg,
) -> Result<RootFindingReport, BisectionError>
where
    F: FnMut(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let algorithm = Algorithm::Bracket(BracketFamily::Bisection);
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
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
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
    let fb = eval(b)?;
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
        return Err(BisectionError::NoSignChange { a, b });
    }

    // main loop
    let mut m = a; // gets overwritten
    let mut fm = fa; // gets overwritten
    for iter in 1..=num_iter {
        m = midpoint(a, b);
        fm = eval(m)?;

        // bracket-width criterion takes priority over |f(m)|
        let width_tol = algorithm.calculate_tolerance(
            &DynamicTolerance::WidthTol { a, b },
            abs_x,
            rel_x,
        )?;
        if (b - a) * 0.5 <= width_tol {
            return Ok(RootFindingReport {
                root: m,
                f_root: fm,
                iterations: iter,
                evaluations: evals,
                converged_by: StoppingCriterion::WidthTolReached,
                stencil: Stencil::Bracket { bounds: [a, b] },
                algorithm_name: algo_name,
            });
        }

        if fm.abs() <= abs_fx {
            return Ok(RootFindingReport {
                root: m,
                f_root: fm,
                iterations: iter,
                evaluations: evals,
                converged_by: StoppingCriterion::AbsFxReached,
                stencil: Stencil::Bracket { bounds: [a, b] },
                algorithm_name: algo_name,
            });
        }

        // shrink interval, preserving the sign change
        if opposite_sign(fa, fm) {
            b = m;
        } else {
            a = m;
            fa = fm;
        }
    }

    Err(RootFindingError::NonConvergence {
        last: m,
        f_last: fm,
        iterations: num_iter,
    }
    .into())
}

//! Fixed-point iteration.

use super::algorithms::{Algorithm, GLOBAL_MAX_ITER_FALLBACK, OpenFamily};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, Stencil, StoppingCriterion};
use super::tolerances::DynamicTolerance;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixedPointError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("iteration diverged: g(x) non-finite ({x}) at iteration {iteration}")]
    Diverged { x: f64, iteration: usize },
}

/// Fixed-point configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Construction
/// - Use [`FixedPointCfg::new`] then optional setters.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`fixed_point`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::FixedPoint`],
///   capped at [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone)]
pub struct FixedPointCfg {
    common: CommonCfg,
}
impl FixedPointCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for FixedPointCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(FixedPointCfg);

/// Finds a fixed point of `func` (a value `x` with `g(x) = x`) by
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration).
///
/// The caller-supplied `func` is assumed to be a rearrangement `x = g(x)` of
/// the original root equation. Convergence requires `g` to be a contraction
/// near the fixed point; that property is the caller's responsibility and is
/// not validated here.
///
/// # Arguments
/// - `func` : the iteration map `g`
/// - `x0`   : finite initial guess
/// - `cfg`  : [`FixedPointCfg`] (tolerances, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`           : approximate fixed point
/// - `f_root`         : fixed-point residual `g(root) - root`
/// - `iterations`     : number of iterations performed
/// - `evaluations`    : total evaluations of `g`
/// - `converged_by`   : [`StoppingCriterion::StepSizeReached`]
/// - `stencil`        : previous iterate that produced the result
/// - `algorithm_name` : "fixed_point"
///
/// # Errors
/// - [`FixedPointError::InvalidGuess`] : `x0` non-finite
/// - [`FixedPointError::Diverged`]     : an iterate became non-finite.
///   Detected at the evaluation that produced it, so no further budget is
///   spent on a runaway sequence.
///
/// * Propagated via [`FixedPointError::Common`]
/// - [`RootFindingError::InvalidMaxIter`] : `max_iter` = 0
/// - [`RootFindingError::NonConvergence`] : iteration budget exhausted;
///   carries the last iterate, its last step, and the iteration count
///
/// # Behavior
/// - Update: `p_{n+1} = g(p_n)`; stops when `|p_{n+1} - p_n| <=` step
///   tolerance.
/// - On success the residual `g(root) - root` is computed for reporting.
///   This incurs exactly one extra evaluation.
///
/// # Warning
/// - If `g` is not a local contraction the sequence may wander within the
///   budget or blow up; the former surfaces as `NonConvergence`, the latter
///   as `Diverged`.
pub fn fixed_point<F>(
    mut func: F,
    x0: f64,
    cfg: FixedPointCfg,
) -> Result<RootFindingReport, FixedPointError>
where
    F: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(FixedPointError::InvalidGuess { x0 });
    }

    let algorithm = Algorithm::Open(OpenFamily::FixedPoint);
    let algo_name = algorithm.algorithm_name();

    let abs_x = cfg.common.abs_x();
    let rel_x = cfg.common.rel_x();

    let num_iter = match cfg.common.max_iter() {
        // already validated via building config; redundant guard
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),

        Some(v) => v,
        None => algorithm.default_max_iter().min(GLOBAL_MAX_ITER_FALLBACK),
    };

    // track evaluations of g; a non-finite iterate is divergence,
    // not an evaluation error
    let mut evals = 0;

    let mut p = x0;
    let mut last_step = f64::INFINITY;
    for iter in 1..=num_iter {
        let p_next = { evals += 1; func(p) };
        if !p_next.is_finite() {
            return Err(FixedPointError::Diverged { x: p_next, iteration: iter });
        }

        last_step = p_next - p;
        let step_tol = algorithm.calculate_tolerance(
            &DynamicTolerance::step_two_scalars(p, p_next),
            abs_x,
            rel_x,
        )?;
        if last_step.abs() <= step_tol {
            // one extra evaluation for the reported residual
            let g_root = { evals += 1; func(p_next) };
            if !g_root.is_finite() {
                return Err(FixedPointError::Diverged { x: g_root, iteration: iter });
            }
            let residual = g_root - p_next;
            return Ok(RootFindingReport {
                root: p_next,
                f_root: residual,
                iterations: iter,
                evaluations: evals,
                converged_by: StoppingCriterion::StepSizeReached,
                stencil: Stencil::singleton(p),
                algorithm_name: algo_name,
            });
        }

        p = p_next;
    }

    Err(RootFindingError::NonConvergence {
        last: p,
        f_last: last_step,
        iterations: num_iter,
    }
    .into())
}

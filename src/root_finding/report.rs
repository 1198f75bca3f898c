//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

/// Which stopping criterion the method satisfied.
/// - [`StoppingCriterion::AbsFxReached`]
///     - All methods
///     - |f(x)| <= abs_fx
/// - [`StoppingCriterion::WidthTolReached`]
///     - Bracketing methods
///     - half-width (b - a) / 2 <= width tolerance
/// - [`StoppingCriterion::StepSizeReached`]
///     - Open methods and false position
///     - |x_n - x_{n-1}| <= step tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoppingCriterion {
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
}

/// Method-specific data returned by a solver.
/// Contains the last set of points used in the update formula.
/// - [`Stencil::Bracket`] : bracketing methods
///     - `bounds` of the final interval
/// - [`Stencil::Open`]    : open methods
///     - last iterate(s) used to compute the root
#[derive(Debug, Copy, Clone)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open { x: [f64; 2], len: usize },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len } => &x[..*len],
        }
    }
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self {
        Stencil::Open { x: [x1, x2], len: 2 }
    }
}

/// Final report returned by all root-finding algorithms on success.
///
/// - `root`           : best root estimate
/// - `f_root`         : function value at `root` (for [`fixed_point`] the
///   residual `g(root) - root`)
/// - `iterations`     : total iterations performed (0 on immediate success)
/// - `evaluations`    : total function evaluations
/// - `converged_by`   : which stopping criterion was met ([`StoppingCriterion`])
/// - `stencil`        : last set of points used in the update formula
/// - `algorithm_name` : algorithm name (e.g. `"bisection"`)
///
/// Iteration exhaustion is never reported here; it surfaces as
/// [`RootFindingError::NonConvergence`] instead.
///
/// [`fixed_point`]: super::fixed_point::fixed_point
/// [`RootFindingError::NonConvergence`]: super::errors::RootFindingError::NonConvergence
#[derive(Debug, Copy, Clone)]
pub struct RootFindingReport {
    pub root: f64,
    pub f_root: f64,
    pub iterations: usize,
    pub evaluations: usize,
    pub converged_by: StoppingCriterion,
    pub stencil: Stencil,
    pub algorithm_name: &'static str,
}

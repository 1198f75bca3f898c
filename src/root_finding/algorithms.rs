//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.

/// Hard cap on iteration budgets resolved from per-method defaults.
///
/// Serves as a practical safeguard against iteration counts that are
/// mathematically valid but computationally excessive.
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500;

/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracketing methods (sign-change interval)
/// - [`Algorithm::Open`]    contains open methods (one or two starting iterates)
#[derive(Debug, Copy, Clone)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone)]
pub enum BracketFamily {
    Bisection,
    FalsePosition,
}

#[derive(Debug, Copy, Clone)]
pub enum OpenFamily {
    FixedPoint,
    Newton,
    Secant,
}

impl Algorithm {
    /// Default iteration budget if `max_iter` is unset in config.
    ///
    /// # Notes
    /// - Applied only when `max_iter` is unset.
    /// - All methods share a budget of 100 iterations. Bisection halves the
    ///   bracket each step, so 100 halvings exhaust `f64` resolution on any
    ///   reasonable interval; the open methods either converge far sooner
    ///   near a simple root or not at all.
    pub const fn default_max_iter(self) -> usize {
        match self {
            Algorithm::Bracket(_) | Algorithm::Open(_) => 100,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => "bisection",
            Algorithm::Bracket(BracketFamily::FalsePosition) => "false_position",
            Algorithm::Open(OpenFamily::FixedPoint) => "fixed_point",
            Algorithm::Open(OpenFamily::Newton) => "newton",
            Algorithm::Open(OpenFamily::Secant) => "secant",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

//! Outcome reporting for the strong Wolfe line search.

use std::fmt;

/// Why a line search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The returned step satisfies both strong Wolfe conditions.
    StrongWolfe,
    /// A trial fell under the step floor; the floor is returned unevaluated.
    MinimumStep,
    /// Zoom reached a point whose slope is below the gradient tolerance.
    Stationary,
    /// An iteration budget ran out; the last trial is returned.
    BudgetExhausted,
}

impl Termination {
    /// Whether the returned step is guaranteed to satisfy the strong Wolfe
    /// conditions.
    pub fn is_converged(self) -> bool {
        matches!(self, Self::StrongWolfe)
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::StrongWolfe => "strong Wolfe conditions satisfied",
            Self::MinimumStep => "minimum step reached",
            Self::Stationary => "stationary point reached",
            Self::BudgetExhausted => "iteration budget exhausted",
        };
        f.write_str(reason)
    }
}

/// Result of a strong Wolfe line search.
///
/// Only a [`Termination::StrongWolfe`] result carries a guarantee. Every other
/// termination returns a best-effort step that callers needing the
/// conditions must check themselves.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSearchResult<T> {
    /// The returned step size α
    pub step_size: T,

    /// φ(α), if the returned step was evaluated
    pub value: Option<T>,

    /// φ'(α), if the returned step was evaluated
    pub slope: Option<T>,

    /// Number of objective value evaluations
    pub function_evals: usize,

    /// Number of slope evaluations
    pub slope_evals: usize,

    /// Iterations spent generating increasing trial steps
    pub bracketing_iterations: usize,

    /// Iterations spent shrinking the bracket
    pub zoom_iterations: usize,

    /// Why the search stopped
    pub termination: Termination,
}

impl<T> LineSearchResult<T> {
    /// True if the step satisfies the strong Wolfe conditions.
    pub fn converged(&self) -> bool {
        self.termination.is_converged()
    }
}

//! Strong Wolfe line search.
//!
//! Finds a step α along a descent direction such that φ(α) = f(x₀ + α d)
//! satisfies
//!
//! 1. φ(α) ≤ φ(0) + c₁ α φ'(0) (sufficient decrease)
//! 2. |φ'(α)| ≤ −c₂ φ'(0) (strong curvature)
//!
//! with 0 < c₁ < c₂ < 1.
//!
//! # Algorithm
//!
//! ## Bracketing
//! Trial steps grow geometrically from `alpha0`, capped at `alpha_max`, until
//! one of them either is acceptable (returned directly) or proves that an
//! acceptable step lies between it and the previous trial. Steps where the
//! objective is infinite are halved before anything else happens.
//!
//! ## Zoom
//! The bracket is shrunk with safeguarded cubic, quadratic and secant
//! interpolation (see [`select_trial_value`]). Interpolation that stops
//! shrinking the interval falls back to bisection.
//!
//! Both phases are bounded by [`MAX_UPDATE_ITERATIONS`]. Running out of
//! budget is not an error: the last trial is returned and the result is
//! tagged [`Termination::BudgetExhausted`].
//!
//! # Example
//!
//! ```
//! use strongwolfe_core::objective::FnObjective;
//! use strongwolfe_optim::line_search::StrongWolfeLineSearch;
//!
//! // φ(α) = α² − 2α, minimized at α = 1
//! let phi = FnObjective::new(|a: f64| a * a - 2.0 * a, |a: f64| 2.0 * a - 2.0);
//!
//! let line_search = StrongWolfeLineSearch::builder(phi, 0.0, -2.0)
//!     .c2(0.9)
//!     .build()?;
//!
//! let result = line_search.search_with_result();
//! assert!(result.converged());
//! assert_eq!(result.step_size, 1.0);
//! # Ok::<(), strongwolfe_core::LineSearchError>(())
//! ```

mod params;
mod result;
mod trial;
mod zoom;

pub use params::{
    LineSearchParams, ALPHA_MIN, DELTA_MAX, GRADIENT_TOLERANCE, MAX_UPDATE_ITERATIONS,
    STAGNATION_RATIO, STAGNATION_TRIALS,
};
pub use result::{LineSearchResult, Termination};
pub use trial::{select_trial_value, TrialPoint};

use log::{debug, trace, warn};
use std::marker::PhantomData;
use strongwolfe_core::{
    conditions::WolfeConditions,
    error::Result,
    objective::LineObjective,
    types::{constants, Scalar},
};

/// Objective wrapper that counts evaluations and iterations of one search.
#[derive(Debug)]
pub(crate) struct Probe<'a, T, O> {
    objective: &'a O,
    pub(crate) function_evals: usize,
    pub(crate) slope_evals: usize,
    pub(crate) bracketing_iterations: usize,
    pub(crate) zoom_iterations: usize,
    _phantom: PhantomData<T>,
}

impl<'a, T, O> Probe<'a, T, O>
where
    T: Scalar,
    O: LineObjective<T>,
{
    pub(crate) fn new(objective: &'a O) -> Self {
        Self {
            objective,
            function_evals: 0,
            slope_evals: 0,
            bracketing_iterations: 0,
            zoom_iterations: 0,
            _phantom: PhantomData,
        }
    }

    fn value(&mut self, alpha: T) -> T {
        self.function_evals += 1;
        self.objective.value(alpha)
    }

    fn slope(&mut self, alpha: T) -> T {
        self.slope_evals += 1;
        self.objective.slope(alpha)
    }

    fn point(&mut self, alpha: T) -> TrialPoint<T> {
        self.function_evals += 1;
        self.slope_evals += 1;
        let (value, slope) = self.objective.value_and_slope(alpha);
        TrialPoint::new(alpha, value, slope)
    }
}

/// Returned step of one phase and how it was reached.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Outcome<T> {
    pub(crate) step: T,
    pub(crate) point: Option<TrialPoint<T>>,
    pub(crate) termination: Termination,
}

impl<T: Scalar> Outcome<T> {
    fn evaluated(point: TrialPoint<T>, termination: Termination) -> Self {
        Self {
            step: point.alpha,
            point: Some(point),
            termination,
        }
    }

    fn unevaluated(step: T, termination: Termination) -> Self {
        Self {
            step,
            point: None,
            termination,
        }
    }
}

/// Line search locating a step that satisfies the strong Wolfe conditions.
///
/// Built once through [`StrongWolfeLineSearch::builder`] and immutable
/// afterwards. All state of a search lives inside a single
/// [`search`](Self::search) call, so an instance may be searched repeatedly
/// and always gives the same answer for a pure objective.
#[derive(Debug, Clone)]
pub struct StrongWolfeLineSearch<T, O> {
    objective: O,
    params: LineSearchParams<T>,
    conditions: WolfeConditions<T>,
}

impl<T, O> StrongWolfeLineSearch<T, O>
where
    T: Scalar,
    O: LineObjective<T>,
{
    /// Starts a builder with the required objective, φ(0) and φ'(0).
    pub fn builder(objective: O, f0: T, slope0: T) -> StrongWolfeLineSearchBuilder<T, O> {
        StrongWolfeLineSearchBuilder::new(objective, f0, slope0)
    }

    /// Creates a line search from complete parameters.
    ///
    /// # Errors
    ///
    /// Returns `LineSearchError::InvalidConfiguration` if the parameters fail
    /// [`LineSearchParams::validate`].
    pub fn new(objective: O, params: LineSearchParams<T>) -> Result<Self> {
        let conditions = params.validate()?;
        Ok(Self {
            objective,
            params,
            conditions,
        })
    }

    /// The validated parameters.
    pub fn params(&self) -> &LineSearchParams<T> {
        &self.params
    }

    /// The Wolfe predicates of this search.
    pub fn conditions(&self) -> &WolfeConditions<T> {
        &self.conditions
    }

    /// The objective being searched.
    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Runs the search and returns the step.
    ///
    /// The step satisfies the strong Wolfe conditions unless a budget or the
    /// step floor was hit; use [`search_with_result`](Self::search_with_result)
    /// to tell the cases apart.
    pub fn search(&self) -> T {
        self.search_with_result().step_size
    }

    /// Runs the search and reports how it terminated.
    pub fn search_with_result(&self) -> LineSearchResult<T> {
        let mut probe = Probe::new(&self.objective);
        let outcome = self.bracket(&mut probe);

        match outcome.termination {
            Termination::StrongWolfe => debug!(
                "line search converged: alpha = {} after {} evaluations",
                outcome.step, probe.function_evals
            ),
            Termination::BudgetExhausted => warn!(
                "line search budget exhausted, returning unverified step {}",
                outcome.step
            ),
            other => debug!("line search stopped ({other}) at alpha = {}", outcome.step),
        }

        LineSearchResult {
            step_size: outcome.step,
            value: outcome.point.map(|p| p.value),
            slope: outcome.point.map(|p| p.slope),
            function_evals: probe.function_evals,
            slope_evals: probe.slope_evals,
            bracketing_iterations: probe.bracketing_iterations,
            zoom_iterations: probe.zoom_iterations,
            termination: outcome.termination,
        }
    }

    /// Generates increasing trial steps until one is accepted or a bracket
    /// is found and handed to zoom.
    fn bracket(&self, probe: &mut Probe<'_, T, O>) -> Outcome<T> {
        let params = &self.params;
        let conditions = &self.conditions;
        let alpha_min = params.alpha_min();
        let delta = <T as Scalar>::from_f64(DELTA_MAX);

        let mut previous = TrialPoint::new(T::zero(), params.f0, params.slope0);
        let mut alpha = params.alpha0;

        let mut iteration = 1;
        while iteration < MAX_UPDATE_ITERATIONS {
            probe.bracketing_iterations += 1;

            let mut value = probe.value(alpha);
            while !value.is_finite() && iteration < MAX_UPDATE_ITERATIONS {
                if alpha <= alpha_min {
                    warn!("objective not finite down to the step floor {alpha_min}");
                    return Outcome::unevaluated(alpha_min, Termination::MinimumStep);
                }
                warn!("objective not finite at alpha = {alpha}, halving the step");
                alpha = (alpha * constants::half::<T>()).max(alpha_min);
                value = probe.value(alpha);
                iteration += 1;
            }

            let slope = probe.slope(alpha);
            let current = TrialPoint::new(alpha, value, slope);
            trace!("bracket: alpha = {alpha}, f = {value}, slope = {slope}");

            if !conditions.sufficient_decrease(alpha, value)
                || (value >= previous.value && iteration > 1)
            {
                return zoom::zoom(params, conditions, probe, previous, current);
            }

            if conditions.curvature(slope) {
                return Outcome::evaluated(current, Termination::StrongWolfe);
            }

            if slope >= T::zero() {
                return zoom::zoom(params, conditions, probe, current, previous);
            }

            let older_alpha = previous.alpha;
            previous = current;
            alpha = (previous.alpha + delta * (previous.alpha - older_alpha)).min(params.alpha_max);
            iteration += 1;
        }

        Outcome::unevaluated(alpha, Termination::BudgetExhausted)
    }
}

/// Builder for [`StrongWolfeLineSearch`].
///
/// The objective, φ(0) and φ'(0) are required; `c1`, `c2`, `alpha_max` and
/// `alpha0` default to 10⁻³, 0.5, 1000 and 1.
#[derive(Debug, Clone)]
pub struct StrongWolfeLineSearchBuilder<T, O> {
    objective: O,
    params: LineSearchParams<T>,
}

impl<T, O> StrongWolfeLineSearchBuilder<T, O>
where
    T: Scalar,
    O: LineObjective<T>,
{
    /// Creates a builder with default constants.
    pub fn new(objective: O, f0: T, slope0: T) -> Self {
        Self {
            objective,
            params: LineSearchParams::new(f0, slope0),
        }
    }

    /// Sets the sufficient decrease constant c₁.
    pub fn c1(mut self, c1: T) -> Self {
        self.params.c1 = c1;
        self
    }

    /// Sets the curvature constant c₂.
    pub fn c2(mut self, c2: T) -> Self {
        self.params.c2 = c2;
        self
    }

    /// Sets the upper bound on the step.
    pub fn alpha_max(mut self, alpha_max: T) -> Self {
        self.params.alpha_max = alpha_max;
        self
    }

    /// Sets the first trial step.
    pub fn alpha0(mut self, alpha0: T) -> Self {
        self.params.alpha0 = alpha0;
        self
    }

    /// Validates the configuration and builds the line search.
    ///
    /// # Errors
    ///
    /// Returns `LineSearchError::InvalidConfiguration` naming the first
    /// parameter that violates its constraint.
    pub fn build(self) -> Result<StrongWolfeLineSearch<T, O>> {
        StrongWolfeLineSearch::new(self.objective, self.params)
    }
}

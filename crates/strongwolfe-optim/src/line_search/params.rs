//! Parameters of the strong Wolfe line search.

use strongwolfe_core::{
    conditions::WolfeConditions,
    error::{LineSearchError, Result},
    types::{constants, Scalar},
};

/// Maximum number of iterations of each phase (bracketing, zoom).
pub const MAX_UPDATE_ITERATIONS: usize = 40;

/// Growth factor of the bracketing extrapolation α ← α + Δ (α − α_old).
pub const DELTA_MAX: f64 = 4.0;

/// Floor on the trial steps produced during zoom.
pub const ALPHA_MIN: f64 = 5e-3;

/// A zoom trial with |φ'(α)| at or below this ends the search.
pub const GRADIENT_TOLERANCE: f64 = 1e-8;

/// A bracket that kept more than this fraction of its reference length
/// after [`STAGNATION_TRIALS`] interpolation steps is bisected instead.
pub const STAGNATION_RATIO: f64 = 0.667;

/// Interpolation steps tolerated before the stagnation check applies.
pub const STAGNATION_TRIALS: usize = 2;

/// Immutable parameters of one line search.
///
/// # Wolfe Condition Constants
/// - **c₁**: sufficient decrease, in (0, 1), default 10⁻³
/// - **c₂**: curvature, in (c₁, 1), default 0.5
///
/// # Step Size Management
/// - **alpha0**: first trial step, default 1
/// - **alpha_max**: upper bound on every trial, default 1000
/// - **alpha_min**: fixed floor of [`ALPHA_MIN`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSearchParams<T> {
    /// Sufficient decrease constant c₁
    pub c1: T,

    /// Curvature constant c₂
    pub c2: T,

    /// Objective value at the origin, φ(0)
    pub f0: T,

    /// Directional derivative at the origin, φ'(0) < 0
    pub slope0: T,

    /// Initial trial step α₀
    pub alpha0: T,

    /// Upper bound on the step
    pub alpha_max: T,
}

impl<T: Scalar> LineSearchParams<T> {
    /// Default parameters for the given origin value and slope.
    pub fn new(f0: T, slope0: T) -> Self {
        Self {
            c1: <T as Scalar>::from_f64(1e-3),
            c2: <T as Scalar>::from_f64(0.5),
            f0,
            slope0,
            alpha0: T::one(),
            alpha_max: <T as Scalar>::from_f64(1000.0),
        }
    }

    /// Floor on trial steps.
    pub fn alpha_min(&self) -> T {
        <T as Scalar>::from_f64(ALPHA_MIN)
    }

    /// Slope magnitude under which zoom stops.
    ///
    /// [`GRADIENT_TOLERANCE`], raised to the precision floor of `T`.
    pub fn gradient_tolerance(&self) -> T {
        <T as Scalar>::from_f64(GRADIENT_TOLERANCE).max(constants::gradient_tolerance::<T>())
    }

    /// Validates the parameters and returns the matching Wolfe predicates.
    ///
    /// # Errors
    ///
    /// Returns `LineSearchError::InvalidConfiguration` naming the parameter if:
    /// - `f0`, `slope0`, `c1` or `c2` violate the constraints checked by
    ///   [`WolfeConditions::new`]
    /// - `alpha_max` is not finite or not above the step floor
    /// - `alpha0` is not finite or lies outside `[alpha_min, alpha_max]`
    pub fn validate(&self) -> Result<WolfeConditions<T>> {
        let conditions = WolfeConditions::new(self.c1, self.c2, self.f0, self.slope0)?;

        if !self.alpha_max.is_finite() || self.alpha_max <= self.alpha_min() {
            return Err(LineSearchError::invalid_configuration(
                format!("maximum step must be finite and greater than {ALPHA_MIN}"),
                "alpha_max",
                self.alpha_max.to_string(),
            ));
        }

        if !self.alpha0.is_finite()
            || self.alpha0 < self.alpha_min()
            || self.alpha0 > self.alpha_max
        {
            return Err(LineSearchError::invalid_configuration(
                format!("initial step must lie in [{ALPHA_MIN}, alpha_max]"),
                "alpha0",
                self.alpha0.to_string(),
            ));
        }

        Ok(conditions)
    }
}

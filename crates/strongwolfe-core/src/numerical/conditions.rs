//! Strong Wolfe acceptance tests.
//!
//! For φ(α) = f(x₀ + α d) with φ(0) = f₀ and φ'(0) = s₀ < 0, a step α is
//! acceptable when
//!
//! 1. φ(α) ≤ f₀ + c₁ α s₀ (sufficient decrease), and
//! 2. |φ'(α)| ≤ −c₂ s₀ (strong curvature),
//!
//! with 0 < c₁ < c₂ < 1. The same predicates drive the line search and let
//! callers verify a returned step independently.

use crate::{
    error::{LineSearchError, Result},
    types::Scalar,
};

/// The two strong Wolfe predicates for one line search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WolfeConditions<T> {
    c1: T,
    c2: T,
    f0: T,
    slope0: T,
}

impl<T: Scalar> WolfeConditions<T> {
    /// Creates the conditions after checking their constraints.
    ///
    /// # Errors
    ///
    /// Returns `LineSearchError::InvalidConfiguration` naming the parameter if:
    /// - `f0` is not finite
    /// - `slope0` is not finite and negative (not a descent direction)
    /// - `c1 ∉ (0, 1)` or `c2 ∉ (c1, 1)`
    pub fn new(c1: T, c2: T, f0: T, slope0: T) -> Result<Self> {
        if !f0.is_finite() {
            return Err(LineSearchError::invalid_configuration(
                "initial value must be finite",
                "f0",
                f0.to_string(),
            ));
        }

        if !slope0.is_finite() || slope0 >= T::zero() {
            return Err(LineSearchError::invalid_configuration(
                "initial slope must be finite and negative (descent direction)",
                "slope0",
                slope0.to_string(),
            ));
        }

        if !(c1 > T::zero() && c1 < T::one()) {
            return Err(LineSearchError::invalid_configuration(
                "sufficient decrease constant must lie in (0, 1)",
                "c1",
                c1.to_string(),
            ));
        }

        if !(c2 > c1 && c2 < T::one()) {
            return Err(LineSearchError::invalid_configuration(
                "curvature constant must satisfy c1 < c2 < 1",
                "c2",
                c2.to_string(),
            ));
        }

        Ok(Self { c1, c2, f0, slope0 })
    }

    /// Sufficient decrease constant c₁.
    pub fn c1(&self) -> T {
        self.c1
    }

    /// Curvature constant c₂.
    pub fn c2(&self) -> T {
        self.c2
    }

    /// φ(0).
    pub fn f0(&self) -> T {
        self.f0
    }

    /// φ'(0).
    pub fn slope0(&self) -> T {
        self.slope0
    }

    /// Largest value accepted at `alpha`: f₀ + c₁ α s₀.
    pub fn armijo_bound(&self, alpha: T) -> T {
        self.f0 + self.c1 * alpha * self.slope0
    }

    /// Largest slope magnitude accepted: −c₂ s₀.
    pub fn curvature_bound(&self) -> T {
        -self.c2 * self.slope0
    }

    /// φ(α) ≤ f₀ + c₁ α s₀.
    pub fn sufficient_decrease(&self, alpha: T, value: T) -> bool {
        value <= self.armijo_bound(alpha)
    }

    /// |φ'(α)| ≤ −c₂ s₀.
    pub fn curvature(&self, slope: T) -> bool {
        slope.abs() <= self.curvature_bound()
    }

    /// Both strong Wolfe conditions.
    pub fn is_satisfied(&self, alpha: T, value: T, slope: T) -> bool {
        self.sufficient_decrease(alpha, value) && self.curvature(slope)
    }

    /// Both conditions, each relaxed by an absolute `tolerance`.
    pub fn is_satisfied_within(&self, alpha: T, value: T, slope: T, tolerance: T) -> bool {
        value <= self.armijo_bound(alpha) + tolerance
            && slope.abs() <= self.curvature_bound() + tolerance
    }
}

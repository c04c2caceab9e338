//! Objective handles for one-dimensional line search.
//!
//! A line search never sees the full optimization problem. It only needs
//! φ(α) = f(x₀ + α d) and its derivative φ'(α) = ⟨∇f(x₀ + α d), d⟩ along a
//! fixed search ray. [`LineObjective`] is that capability.
//!
//! Three adapters are provided:
//! - [`FnObjective`] wraps a pair of closures,
//! - [`CountingObjective`] counts evaluations of any objective,
//! - [`RayObjective`] restricts a multivariate [`CostFunction`] to a ray.

use crate::{
    error::{LineSearchError, Result},
    types::Scalar,
};
use nalgebra::{DVector, RealField};
use std::cell::Cell;
use std::fmt::{self, Debug};

/// A scalar function of the step length together with its derivative.
///
/// Implementations are expected to be pure: evaluating twice at the same
/// step must give the same result. Values may be infinite (for steps that
/// leave the domain); the bracketing phase backs off from those.
pub trait LineObjective<T: Scalar>: Debug {
    /// Evaluates φ(α).
    fn value(&self, alpha: T) -> T;

    /// Evaluates the directional derivative φ'(α).
    fn slope(&self, alpha: T) -> T;

    /// Evaluates φ(α) and φ'(α) together.
    ///
    /// The default calls [`value`](Self::value) then [`slope`](Self::slope).
    /// Override when both share expensive intermediate work.
    fn value_and_slope(&self, alpha: T) -> (T, T) {
        (self.value(alpha), self.slope(alpha))
    }
}

impl<T, O> LineObjective<T> for &O
where
    T: Scalar,
    O: LineObjective<T> + ?Sized,
{
    fn value(&self, alpha: T) -> T {
        (**self).value(alpha)
    }

    fn slope(&self, alpha: T) -> T {
        (**self).slope(alpha)
    }

    fn value_and_slope(&self, alpha: T) -> (T, T) {
        (**self).value_and_slope(alpha)
    }
}

/// Objective built from a value closure and a slope closure.
///
/// ```
/// use strongwolfe_core::objective::{FnObjective, LineObjective};
///
/// let phi = FnObjective::new(|a: f64| a * a - 2.0 * a, |a: f64| 2.0 * a - 2.0);
/// assert_eq!(phi.value(1.0), -1.0);
/// assert_eq!(phi.slope(1.0), 0.0);
/// ```
#[derive(Clone, Copy)]
pub struct FnObjective<F, G> {
    value_fn: F,
    slope_fn: G,
}

impl<F, G> FnObjective<F, G> {
    /// Creates an objective from its value and derivative.
    pub fn new(value_fn: F, slope_fn: G) -> Self {
        Self { value_fn, slope_fn }
    }
}

impl<F, G> Debug for FnObjective<F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnObjective").finish_non_exhaustive()
    }
}

impl<T, F, G> LineObjective<T> for FnObjective<F, G>
where
    T: Scalar,
    F: Fn(T) -> T,
    G: Fn(T) -> T,
{
    fn value(&self, alpha: T) -> T {
        (self.value_fn)(alpha)
    }

    fn slope(&self, alpha: T) -> T {
        (self.slope_fn)(alpha)
    }
}

/// Wrapper to count objective evaluations for testing and diagnostics.
#[derive(Debug)]
pub struct CountingObjective<O> {
    /// The underlying objective
    pub inner: O,
    value_count: Cell<usize>,
    slope_count: Cell<usize>,
}

impl<O> CountingObjective<O> {
    /// Creates a new counting wrapper around an objective.
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            value_count: Cell::new(0),
            slope_count: Cell::new(0),
        }
    }

    /// Resets both counters to zero.
    pub fn reset_counts(&self) {
        self.value_count.set(0);
        self.slope_count.set(0);
    }

    /// Returns `(value evaluations, slope evaluations)`.
    pub fn counts(&self) -> (usize, usize) {
        (self.value_count.get(), self.slope_count.get())
    }
}

impl<T, O> LineObjective<T> for CountingObjective<O>
where
    T: Scalar,
    O: LineObjective<T>,
{
    fn value(&self, alpha: T) -> T {
        self.value_count.set(self.value_count.get() + 1);
        self.inner.value(alpha)
    }

    fn slope(&self, alpha: T) -> T {
        self.slope_count.set(self.slope_count.get() + 1);
        self.inner.slope(alpha)
    }

    fn value_and_slope(&self, alpha: T) -> (T, T) {
        self.value_count.set(self.value_count.get() + 1);
        self.slope_count.set(self.slope_count.get() + 1);
        self.inner.value_and_slope(alpha)
    }
}

/// Multivariate cost function f: ℝⁿ → ℝ with an analytic gradient.
pub trait CostFunction<T>: Debug
where
    T: Scalar + RealField,
{
    /// Evaluates the cost at a point.
    fn cost(&self, point: &DVector<T>) -> T;

    /// Computes the gradient at a point.
    fn gradient(&self, point: &DVector<T>) -> DVector<T>;

    /// Computes cost and gradient together.
    fn cost_and_gradient(&self, point: &DVector<T>) -> (T, DVector<T>) {
        (self.cost(point), self.gradient(point))
    }
}

/// Restriction of a [`CostFunction`] to the ray `x₀ + α d`.
///
/// The slope is the directional derivative ⟨∇f(x₀ + α d), d⟩, so the search
/// direction is fixed at construction and owned by the caller.
#[derive(Debug)]
pub struct RayObjective<'a, T, C>
where
    T: Scalar + RealField,
    C: CostFunction<T>,
{
    cost_fn: &'a C,
    origin: DVector<T>,
    direction: DVector<T>,
}

impl<'a, T, C> RayObjective<'a, T, C>
where
    T: Scalar + RealField,
    C: CostFunction<T>,
{
    /// Creates the ray objective. Fails if `origin` and `direction` differ
    /// in length.
    pub fn new(cost_fn: &'a C, origin: DVector<T>, direction: DVector<T>) -> Result<Self> {
        if origin.len() != direction.len() {
            return Err(LineSearchError::dimension_mismatch(
                origin.len(),
                direction.len(),
            ));
        }
        Ok(Self {
            cost_fn,
            origin,
            direction,
        })
    }

    /// The point `x₀ + α d`.
    pub fn point_at(&self, alpha: T) -> DVector<T> {
        &self.origin + &self.direction * alpha
    }

    /// φ(0) and φ'(0), the values a line search is seeded with.
    pub fn initial(&self) -> (T, T) {
        let (value, gradient) = self.cost_fn.cost_and_gradient(&self.origin);
        (value, gradient.dot(&self.direction))
    }
}

impl<T, C> LineObjective<T> for RayObjective<'_, T, C>
where
    T: Scalar + RealField,
    C: CostFunction<T>,
{
    fn value(&self, alpha: T) -> T {
        self.cost_fn.cost(&self.point_at(alpha))
    }

    fn slope(&self, alpha: T) -> T {
        self.cost_fn
            .gradient(&self.point_at(alpha))
            .dot(&self.direction)
    }

    fn value_and_slope(&self, alpha: T) -> (T, T) {
        let (value, gradient) = self.cost_fn.cost_and_gradient(&self.point_at(alpha));
        (value, gradient.dot(&self.direction))
    }
}

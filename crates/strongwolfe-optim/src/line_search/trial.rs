//! Trial step selection inside a bracket.

use strongwolfe_core::{
    interpolation::{cubic_minimum, quadratic_minimum, secant_minimum},
    types::{constants, Scalar},
};

/// A step length with the objective value and slope observed there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialPoint<T> {
    /// Step length α
    pub alpha: T,
    /// φ(α)
    pub value: T,
    /// φ'(α)
    pub slope: T,
}

impl<T: Scalar> TrialPoint<T> {
    /// Creates a trial point.
    pub fn new(alpha: T, value: T, slope: T) -> Self {
        Self {
            alpha,
            value,
            slope,
        }
    }
}

/// Picks the next trial step from the bracket endpoints `lo` and `hi`.
///
/// Never evaluates the objective. The cases follow Moré–Thuente:
///
/// 1. `φ(hi) > φ(lo)`: the cubic minimizer if it is closer to `lo` than the
///    quadratic one (value+slope at `lo`, value at `hi`), else their midpoint.
/// 2. slopes of opposite sign: the cubic minimizer unless the secant step is
///    farther from `hi`.
/// 3. `|φ'(hi)| ≤ |φ'(lo)|`: the secant step.
/// 4. otherwise the cubic anchored at `hi`.
pub fn select_trial_value<T: Scalar>(lo: &TrialPoint<T>, hi: &TrialPoint<T>) -> T {
    if hi.value > lo.value {
        let alpha_c = cubic_minimum(lo.alpha, hi.alpha, lo.value, hi.value, lo.slope, hi.slope);
        let alpha_q = quadratic_minimum(lo.alpha, hi.alpha, lo.value, hi.value, lo.slope);
        if (alpha_c - lo.alpha).abs() < (alpha_q - lo.alpha).abs() {
            alpha_c
        } else {
            constants::half::<T>() * (alpha_q + alpha_c)
        }
    } else if lo.slope * hi.slope < T::zero() {
        let alpha_c = cubic_minimum(lo.alpha, hi.alpha, lo.value, hi.value, lo.slope, hi.slope);
        let alpha_s = secant_minimum(lo.alpha, hi.alpha, lo.slope, hi.slope);
        if (alpha_c - hi.alpha).abs() >= (alpha_s - hi.alpha).abs() {
            alpha_c
        } else {
            alpha_s
        }
    } else if hi.slope.abs() <= lo.slope.abs() {
        secant_minimum(lo.alpha, hi.alpha, lo.slope, hi.slope)
    } else {
        cubic_minimum(hi.alpha, lo.alpha, hi.value, lo.value, hi.slope, lo.slope)
    }
}

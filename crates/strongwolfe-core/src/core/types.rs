//! Scalar abstraction and numerical constants.
//!
//! The line search is generic over the floating point precision. Everything
//! the algorithms need from a number lives behind [`Scalar`], which is
//! implemented for `f32` and `f64`.

use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types used by the line search (f32 or f64).
///
/// This trait combines the numeric traits required by the interpolation
/// helpers and the bracketing/zoom loops.
pub trait Scalar:
    Float + FromPrimitive + Display + Debug + Default + Copy + Send + Sync + 'static
{
    /// Default tolerance below which a directional derivative counts as zero.
    const DEFAULT_GRADIENT_TOLERANCE: Self;

    /// Convert from f64 (for constants).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails, which cannot happen for `f32` or `f64`.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }
}

impl Scalar for f32 {
    const DEFAULT_GRADIENT_TOLERANCE: Self = 1e-6;
}

impl Scalar for f64 {
    const DEFAULT_GRADIENT_TOLERANCE: Self = 1e-8;
}

/// Numerical constants shared by the line search.
pub mod constants {
    use super::Scalar;

    /// Get the tolerance under which a slope is treated as stationary.
    pub fn gradient_tolerance<T: Scalar>() -> T {
        T::DEFAULT_GRADIENT_TOLERANCE
    }

    /// One half, used by bisection and midpoint rules.
    pub fn half<T: Scalar>() -> T {
        <T as Scalar>::from_f64(0.5)
    }

    /// Two.
    pub fn two<T: Scalar>() -> T {
        <T as Scalar>::from_f64(2.0)
    }

    /// Three.
    pub fn three<T: Scalar>() -> T {
        <T as Scalar>::from_f64(3.0)
    }
}

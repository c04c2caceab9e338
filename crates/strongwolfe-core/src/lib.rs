//! Core traits and types for strong Wolfe line search.
//!
//! This crate provides the building blocks the line search in
//! `strongwolfe-optim` is assembled from. It is usable on its own by
//! optimizers that bring their own step selection.
//!
//! # Key Concepts
//!
//! - **Line objective**: φ(α) = f(x₀ + α d) and φ'(α), the only view of the
//!   problem a line search needs
//! - **Strong Wolfe conditions**: sufficient decrease plus a two-sided bound
//!   on the directional derivative
//! - **Interpolation**: quadratic, secant and cubic models whose minimizers
//!   propose trial steps
//!
//! # Modules
//!
//! - [`error`]: Configuration error types
//! - [`objective`]: The [`LineObjective`](objective::LineObjective) trait and adapters
//! - [`types`]: The [`Scalar`](types::Scalar) trait and constants
//! - [`numerical`]: Interpolation minimizers and Wolfe predicates

pub mod core;
pub mod numerical;

pub use crate::core::{error, objective, types};
pub use crate::numerical::{conditions, interpolation};

// Re-export commonly used items at the crate root
pub use error::{LineSearchError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use strongwolfe_core::prelude::*;
///
/// let phi = FnObjective::new(|a: f64| a * a - 2.0 * a, |a: f64| 2.0 * a - 2.0);
/// let wolfe = WolfeConditions::new(1e-3, 0.9, 0.0, -2.0).unwrap();
/// assert!(wolfe.is_satisfied(1.0, phi.value(1.0), phi.slope(1.0)));
/// ```
pub mod prelude {
    pub use crate::conditions::WolfeConditions;
    pub use crate::error::{LineSearchError, Result};
    pub use crate::interpolation::{
        cubic_minimum, quadratic_minimum, secant_minimum, three_point_minimum,
    };
    pub use crate::objective::{
        CostFunction, CountingObjective, FnObjective, LineObjective, RayObjective,
    };
    pub use crate::types::{constants, Scalar};
}

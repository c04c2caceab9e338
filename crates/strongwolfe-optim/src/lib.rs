//! Strong Wolfe line search.
//!
//! This crate provides a line search that, given a descent direction, returns
//! a step satisfying the strong Wolfe conditions. It is the step selection
//! used by quasi-Newton and nonlinear conjugate gradient methods, where the
//! curvature condition keeps the update well defined.
//!
//! The search runs in two phases: a bracketing phase that grows the step
//! until an interval containing an acceptable point is found, and a zoom
//! phase that shrinks the interval with safeguarded interpolation.
//!
//! # Examples
//!
//! ```rust
//! use strongwolfe_optim::prelude::*;
//!
//! // φ(α) = (α − 2)², searched from φ(0) = 4, φ'(0) = −4
//! let phi = FnObjective::new(|a: f64| (a - 2.0).powi(2), |a: f64| 2.0 * (a - 2.0));
//!
//! let line_search = StrongWolfeLineSearch::builder(phi, 4.0, -4.0)
//!     .c1(1e-4)
//!     .c2(0.9)
//!     .build()?;
//!
//! let alpha = line_search.search();
//! assert!(alpha > 0.0 && alpha < 4.0);
//! # Ok::<(), LineSearchError>(())
//! ```

pub mod line_search;

// Re-export main types for convenience
pub use line_search::{
    LineSearchParams, LineSearchResult, StrongWolfeLineSearch, StrongWolfeLineSearchBuilder,
    Termination,
};

// Re-export commonly used items from core
pub use strongwolfe_core::{
    conditions::WolfeConditions,
    error::{LineSearchError, Result},
    objective::{CostFunction, CountingObjective, FnObjective, LineObjective, RayObjective},
    types::Scalar,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::line_search::{
        LineSearchParams, LineSearchResult, StrongWolfeLineSearch, StrongWolfeLineSearchBuilder,
        Termination, TrialPoint,
    };
    pub use strongwolfe_core::prelude::*;
}

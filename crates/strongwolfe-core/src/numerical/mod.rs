//! Numerical building blocks of the line search.

pub mod conditions;
pub mod interpolation;

// Re-export numerical utilities
pub use conditions::*;
pub use interpolation::*;

//! Core traits and types for line search.

pub mod error;
pub mod objective;
pub mod types;

// Re-export core types
pub use error::*;
pub use objective::*;
pub use types::*;

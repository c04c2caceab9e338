//! Error types for line search configuration.
//!
//! The search algorithm itself never fails: infinite values are handled
//! inline and budget exhaustion is reported as an outcome. Errors only arise
//! while building a line search or an objective adapter.

use thiserror::Error;

/// Errors raised while configuring a line search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineSearchError {
    /// Invalid line search configuration.
    ///
    /// This error occurs when a parameter violates its constraint, for
    /// instance a non-negative initial slope or `c2 <= c1`.
    #[error("Invalid line search configuration: {parameter} = {value} ({reason})")]
    InvalidConfiguration {
        /// Description of the violated constraint
        reason: String,
        /// Name of the invalid parameter
        parameter: String,
        /// Value that was invalid
        value: String,
    },

    /// Dimension mismatch between vectors.
    ///
    /// This error occurs when a ray is built from a point and a direction of
    /// different lengths.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },
}

impl LineSearchError {
    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration<S1, S2, S3>(reason: S1, parameter: S2, value: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self::InvalidConfiguration {
            reason: reason.into(),
            parameter: parameter.into(),
            value: value.into(),
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Name of the offending parameter, if this is a configuration error.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::InvalidConfiguration { parameter, .. } => Some(parameter),
            Self::DimensionMismatch { .. } => None,
        }
    }
}

/// Result type alias for line search configuration.
pub type Result<T> = std::result::Result<T, LineSearchError>;

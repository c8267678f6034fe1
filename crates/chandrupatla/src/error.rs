//! Error types for root finding.

use thiserror::Error;

/// A specialized Result type for root-finding operations.
pub type RootFindingResult<T> = Result<T, RootFindingError>;

/// Errors that can occur while searching for a root.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RootFindingError {
    /// The initial interval does not bracket a root.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// First endpoint of the interval.
        a: f64,
        /// Second endpoint of the interval.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// The iteration budget ran out before the tolerance was met.
    #[error(
        "No root found after {iterations} iterations (residual: {residual:.2e}, bracket: [{lower}, {upper}])"
    )]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Absolute function value at the best estimate.
        residual: f64,
        /// Lower end of the final bracket.
        lower: f64,
        /// Upper end of the final bracket.
        upper: f64,
    },

    /// Invalid solver configuration.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl RootFindingError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64, lower: f64, upper: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
            lower,
            upper,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns true if the interval did not bracket a root.
    pub fn is_invalid_bracket(&self) -> bool {
        matches!(self, Self::InvalidBracket { .. })
    }

    /// Returns true if the iteration budget was exhausted.
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::ConvergenceFailed { .. })
    }
}

// src/error.rs
use std::fmt;

/// Custom error types for the jump-sde library
#[derive(Debug, Clone)]
pub enum SdeError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Numerical instability or convergence failure
    NumericalInstability { method: String, reason: String },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// State, drift, diffusion or jump shapes that do not agree
    DimensionMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Failure while writing generated records
    OutputError { path: String, reason: String },
}

impl fmt::Display for SdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdeError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            SdeError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
            SdeError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            SdeError::DimensionMismatch {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            SdeError::OutputError { path, reason } => {
                write!(f, "Failed to write '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for SdeError {}

/// Result type alias for jump-sde operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        if !(value > 0.0) {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> SdeResult<()> {
        if !(value >= 0.0) {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the number of grid points of a uniform time grid
    pub fn validate_grid_points(points: usize) -> SdeResult<()> {
        if points < 2 {
            Err(SdeError::InvalidConfiguration {
                field: "points".to_string(),
                reason: "a time grid needs at least 2 points".to_string(),
            })
        } else if points > 10_000_000 {
            Err(SdeError::InvalidConfiguration {
                field: "points".to_string(),
                reason: "exceeds maximum allowed (10 million)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that an array dimension matches the state dimension
    pub fn validate_dimension(context: &str, expected: usize, actual: usize) -> SdeResult<()> {
        if expected != actual {
            Err(SdeError::DimensionMismatch {
                context: context.to_string(),
                expected,
                actual,
            })
        } else {
            Ok(())
        }
    }
}

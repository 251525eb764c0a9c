//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum RlcError {
    /// Raised when Q ≤ 1/2, where the free response is no longer pseudo-periodic.
    #[error("quality factor {quality_factor} does not give an underdamped response (need Q > 0.5)")]
    NotUnderdamped {
        /// Offending quality factor.
        quality_factor: f64,
    },
    /// Raised when a physical parameter is non-finite or out of range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// Raised when a time grid cannot be built from the requested span and count.
    #[error("invalid time grid: {0}")]
    InvalidGrid(String),
    /// Raised when a sampled curve does not line up with its time axis.
    #[error("curve {curve} has {found} samples, expected {expected}")]
    LengthMismatch {
        /// Column name of the offending curve.
        curve: &'static str,
        /// Number of time samples.
        expected: usize,
        /// Number of curve samples.
        found: usize,
    },
    /// Wraps errors reported by the drawing backend.
    #[error("plot error: {0}")]
    Plot(String),
    /// Wraps filesystem and writer failures.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RlcError>;

//! Error types for rig configuration.

use core::fmt;

/// Reasons a [`RigConfig`](crate::config::RigConfig) is rejected.
///
/// Runtime input never produces an error; stray pointers and unknown keys are
/// simply ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum RigError {
    /// Tether rest length must be positive and finite.
    InvalidRestLength,
    /// Time-step clamp must satisfy `0 < min <= max`.
    InvalidTimeStep,
    /// Restitution must be in [0, 1].
    InvalidRestitution,
    /// Body half-extents must be positive.
    InvalidHalfExtents,
    /// A force constant was negative or not finite.
    InvalidConstant { name: &'static str },
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RigError::InvalidRestLength => write!(f, "rest length must be positive and finite"),
            RigError::InvalidTimeStep => write!(f, "time step clamp must satisfy 0 < min <= max"),
            RigError::InvalidRestitution => write!(f, "restitution must be in [0, 1]"),
            RigError::InvalidHalfExtents => write!(f, "half extents must be positive"),
            RigError::InvalidConstant { name } => {
                write!(f, "{} must be non-negative and finite", name)
            }
        }
    }
}

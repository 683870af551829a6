//! Construction-time validation errors.
//!
//! Runtime operations never fail: out-of-range input is clamped and redundant
//! transitions are no-ops. Only building a configuration can be rejected.

use thiserror::Error;

/// A configuration value that violates its documented bounds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `pressed_scale < 1 < bounce_scale` does not hold.
    #[error("pressed scale {pressed} must be < 1 and bounce scale {bounce} must be > 1")]
    ScaleOrder {
        /// Configured pressed scale.
        pressed: f32,
        /// Configured bounce scale.
        bounce: f32,
    },
    /// The stretch factor is outside `[0, 1)`.
    #[error("stretch factor {0} must be in [0, 1)")]
    StretchFactor(f32),
    /// A duration is not strictly positive.
    #[error("{name} must be > 0 seconds, got {value}")]
    Duration {
        /// Name of the offending field.
        name: &'static str,
        /// Configured value in seconds.
        value: f32,
    },
    /// The spring damping is outside `(0, 1]`.
    #[error("spring damping {0} must be in (0, 1]")]
    Damping(f32),
    /// The spring initial velocity is negative.
    #[error("spring initial velocity {0} must be >= 0")]
    Velocity(f32),
    /// A value range has `min >= max`.
    #[error("empty value range: min {min} must be < max {max}")]
    EmptyRange {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },
    /// A size or length is not strictly positive.
    #[error("{name} must be > 0, got {value}")]
    NonPositive {
        /// Name of the offending field.
        name: &'static str,
        /// Configured value.
        value: f32,
    },
}

/// Checks that `value` is strictly positive.
pub(crate) fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

//! Fixed-duration damped springs.
//!
//! A spring is described the way platform animation APIs describe them: a
//! duration, a damping ratio and an initial velocity. The motion is the
//! analytic solution of a damped harmonic oscillator stepping from `0.0` to
//! `1.0`:
//!
//! ```text
//! x''(t) + 2ζω₀x'(t) + ω₀²(x(t) - 1) = 0,   x(0) = 0,   x'(0) = v₀
//! ```
//!
//! ω₀ is chosen so the oscillation envelope has decayed to
//! [`SETTLE_THRESHOLD`] at the end of the duration, after which the progress
//! is pinned to exactly `1.0`.

use std::time::Duration;

use crate::clock::duration_from_secs;

/// Envelope amplitude considered "settled".
pub const SETTLE_THRESHOLD: f32 = 1.0e-3;

/// Smallest damping ratio accepted; lower values are raised to this.
const MIN_DAMPING: f32 = 0.05;

/// Damped spring timing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringTiming {
    /// Time until the spring is considered settled.
    pub duration: Duration,
    /// Damping ratio; `1.0` is critically damped, lower values overshoot.
    pub damping: f32,
    /// Initial velocity, in total distances per second.
    pub initial_velocity: f32,
}

impl SpringTiming {
    /// Creates spring timing from seconds.
    pub fn new(duration_secs: f32, damping: f32, initial_velocity: f32) -> Self {
        Self {
            duration: duration_from_secs(duration_secs),
            damping,
            initial_velocity,
        }
    }

    fn damping_ratio(&self) -> f32 {
        if self.damping.is_nan() {
            1.0
        } else {
            self.damping.clamp(MIN_DAMPING, 1.0)
        }
    }

    fn natural_frequency(&self) -> f32 {
        let secs = self.duration.as_secs_f32();
        (1.0 / SETTLE_THRESHOLD).ln() / (self.damping_ratio() * secs)
    }

    /// Progress of the spring `elapsed` after it started.
    ///
    /// Starts at `0.0`, may exceed `1.0` while overshooting and is exactly
    /// `1.0` once `elapsed >= duration`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration || self.duration.is_zero() {
            return 1.0;
        }
        let t = elapsed.as_secs_f32();
        let zeta = self.damping_ratio();
        let omega = self.natural_frequency();
        let v0 = self.initial_velocity.max(0.0);

        if zeta < 1.0 {
            let decay_rate = zeta * omega;
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let b = (decay_rate - v0) / omega_d;
            let envelope = (-decay_rate * t).exp();
            1.0 - envelope * ((omega_d * t).cos() + b * (omega_d * t).sin())
        } else {
            let envelope = (-omega * t).exp();
            1.0 - envelope * (1.0 + (omega - v0) * t)
        }
    }
}

//! Shared animation parameters for glass surfaces.
//!
//! A single [`AnimationConfig`] drives every press, release and pulse a
//! surface plays. The three presets differ only in magnitude.

use lucent_ui::{Easing, Segment, SurfaceTransform, Timing};

use crate::error::ConfigError;

/// Scale factors, durations and spring parameters of a surface's animations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationConfig {
    /// Scale used by the selection pulse.
    pub highlight_scale: f32,
    /// Scale held while pressed. Must be `< 1`.
    pub pressed_scale: f32,
    /// Peak scale of the bounce pulse. Must be `> 1`.
    pub bounce_scale: f32,
    /// Fraction of the surface size a press displaces towards the touch.
    pub stretch_factor: f32,
    /// Seconds for highlight fades and pulse "out" phases.
    pub highlight_duration: f32,
    /// Seconds for spring-back phases.
    pub bounce_duration: f32,
    /// Damping ratio of spring-back phases; `1.0` is critically damped.
    pub spring_damping: f32,
    /// Initial velocity of spring-back phases.
    pub spring_initial_velocity: f32,
}

impl AnimationConfig {
    /// The default preset.
    pub const DEFAULT: Self = Self {
        highlight_scale: 0.96,
        pressed_scale: 0.92,
        bounce_scale: 1.04,
        stretch_factor: 0.03,
        highlight_duration: 0.1,
        bounce_duration: 0.4,
        spring_damping: 0.6,
        spring_initial_velocity: 0.8,
    };

    /// Smaller, stiffer motion.
    pub const SUBTLE: Self = Self {
        highlight_scale: 0.98,
        pressed_scale: 0.95,
        bounce_scale: 1.02,
        stretch_factor: 0.02,
        highlight_duration: 0.08,
        bounce_duration: 0.35,
        spring_damping: 0.7,
        spring_initial_velocity: 0.6,
    };

    /// Larger, bouncier motion.
    pub const PROMINENT: Self = Self {
        highlight_scale: 0.94,
        pressed_scale: 0.88,
        bounce_scale: 1.06,
        stretch_factor: 0.04,
        highlight_duration: 0.12,
        bounce_duration: 0.5,
        spring_damping: 0.5,
        spring_initial_velocity: 1.0,
    };

    /// Checks every field against its bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pressed_scale < 1.0 && self.bounce_scale > 1.0 && self.pressed_scale > 0.0) {
            return Err(ConfigError::ScaleOrder {
                pressed: self.pressed_scale,
                bounce: self.bounce_scale,
            });
        }
        if !(self.highlight_scale > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "highlight_scale",
                value: self.highlight_scale,
            });
        }
        if !(0.0..1.0).contains(&self.stretch_factor) {
            return Err(ConfigError::StretchFactor(self.stretch_factor));
        }
        for (name, value) in [
            ("highlight_duration", self.highlight_duration),
            ("bounce_duration", self.bounce_duration),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::Duration { name, value });
            }
        }
        if !(self.spring_damping > 0.0 && self.spring_damping <= 1.0) {
            return Err(ConfigError::Damping(self.spring_damping));
        }
        if !(self.spring_initial_velocity >= 0.0) {
            return Err(ConfigError::Velocity(self.spring_initial_velocity));
        }
        Ok(())
    }

    /// Spring timing used to return to identity.
    pub fn spring_back(&self) -> Timing {
        Timing::spring(
            self.bounce_duration,
            self.spring_damping,
            self.spring_initial_velocity,
        )
    }

    /// A pulse to `peak` with this config's timing.
    pub fn pulse(&self, peak: SurfaceTransform) -> PulseSpec {
        PulseSpec {
            peak,
            out: Timing::curve(self.highlight_duration, Easing::EaseOut),
            back: self.spring_back(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A two-phase transform pulse: ease out to `peak`, then spring back to
/// identity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PulseSpec {
    /// Transform reached at the end of the first phase.
    pub peak: SurfaceTransform,
    /// Timing of the first phase.
    pub out: Timing,
    /// Timing of the return to identity.
    pub back: Timing,
}

impl PulseSpec {
    /// A uniform-scale pulse with an ease-out first phase and a spring back.
    pub fn scale(peak: f32, out_secs: f32, back_secs: f32, damping: f32, velocity: f32) -> Self {
        Self {
            peak: SurfaceTransform::uniform(peak),
            out: Timing::curve(out_secs, Easing::EaseOut),
            back: Timing::spring(back_secs, damping, velocity),
        }
    }

    pub(crate) fn segments(&self) -> [Segment<SurfaceTransform>; 2] {
        [
            Segment::new(self.peak, self.out),
            Segment::new(SurfaceTransform::IDENTITY, self.back),
        ]
    }
}

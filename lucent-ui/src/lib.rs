//! lucent-ui provides the headless building blocks of lucent glass surfaces.
//!
//! Nothing in this crate draws. It models the values a renderer needs
//! (geometry, colors, surface transforms) and the machinery that moves them
//! over time: timing curves, damped springs and [`Track`]s sampled against a
//! [`FrameClock`].
//!
//! # Animation model
//!
//! All state lives on one thread. An operation that starts an animation
//! samples the clock once, records the start value and target on the
//! affected [`Track`], and returns. The host calls `tick()` on every frame;
//! tracks advance to the clock's current time and hand back the completions
//! of runs that finished.
//!
//! ```
//! use std::time::Duration;
//! use lucent_ui::{FrameClock, ManualClock, Segment, SurfaceTransform, Timing, Track};
//!
//! let clock = ManualClock::new();
//! let mut transform = Track::new(SurfaceTransform::IDENTITY);
//! transform.animate(
//!     clock.now(),
//!     [Segment::new(SurfaceTransform::uniform(0.92), Timing::spring(0.1, 0.6, 0.8))],
//!     None,
//! );
//! clock.advance(Duration::from_millis(100));
//! transform.tick(clock.now());
//! assert_eq!(transform.value(), SurfaceTransform::uniform(0.92));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod clock;
pub mod color;
pub mod easing;
pub mod geometry;
pub mod logging;
pub mod prop;
pub mod spring;
pub mod transform;

pub use glam;

pub use crate::{
    animation::{Animatable, Segment, Timing, Track},
    clock::{Deadline, FrameClock, ManualClock, SharedClock, SystemClock, duration_from_secs},
    color::Color,
    easing::Easing,
    geometry::{Point, Rect, Size},
    logging::init_tracing,
    prop::{Callback, CallbackWith, OnComplete},
    spring::SpringTiming,
    transform::SurfaceTransform,
};

//! Animated properties.
//!
//! A [`Track`] owns the presentation value of one property (a transform, an
//! opacity, a frame) and at most one active run of [`Segment`]s. Starting a
//! new run re-targets from the current presentation value and drops the old
//! run: the last write wins and nothing is queued.
//!
//! ```
//! use std::time::Duration;
//! use lucent_ui::{Easing, Segment, Timing, Track};
//!
//! let mut opacity = Track::new(0.0_f32);
//! opacity.animate(
//!     Duration::ZERO,
//!     [Segment::new(1.0, Timing::curve(0.2, Easing::Linear))],
//!     None,
//! );
//! opacity.tick(Duration::from_millis(100));
//! assert!((opacity.value() - 0.5).abs() < 1e-4);
//! opacity.tick(Duration::from_millis(200));
//! assert_eq!(opacity.value(), 1.0);
//! assert!(!opacity.is_animating());
//! ```

use std::{fmt, time::Duration};

use glam::Vec2;
use smallvec::SmallVec;

use crate::{
    clock::duration_from_secs,
    color::Color,
    easing::Easing,
    geometry::{Point, Rect},
    prop::OnComplete,
    spring::SpringTiming,
    transform::SurfaceTransform,
};

/// Values that can be interpolated by a [`Track`].
///
/// `t` is not clamped: springs overshoot past `1.0` and the interpolation
/// extrapolates accordingly.
pub trait Animatable: Copy + PartialEq {
    /// Interpolates from `self` towards `to`.
    fn lerp(&self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Animatable for Vec2 {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        *self + (*to - *self) * t
    }
}

impl Animatable for Point {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Point::new(self.x.lerp(&to.x, t), self.y.lerp(&to.y, t))
    }
}

impl Animatable for Rect {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Rect::new(
            self.x.lerp(&to.x, t),
            self.y.lerp(&to.y, t),
            self.width.lerp(&to.width, t),
            self.height.lerp(&to.height, t),
        )
    }
}

impl Animatable for Color {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Color::new(
            self.r.lerp(&to.r, t),
            self.g.lerp(&to.g, t),
            self.b.lerp(&to.b, t),
            self.a.lerp(&to.a, t),
        )
    }
}

impl Animatable for SurfaceTransform {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        SurfaceTransform {
            scale: Animatable::lerp(&self.scale, &to.scale, t),
            translation: Animatable::lerp(&self.translation, &to.translation, t),
        }
    }
}

/// How a segment moves from its start value to its target.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// A fixed-duration timing curve.
    Curve {
        /// Segment length.
        duration: Duration,
        /// Curve applied to linear progress.
        easing: Easing,
    },
    /// A damped spring.
    Spring(SpringTiming),
}

impl Timing {
    /// A timing curve lasting `secs` seconds.
    pub fn curve(secs: f32, easing: Easing) -> Self {
        Timing::Curve {
            duration: duration_from_secs(secs),
            easing,
        }
    }

    /// A damped spring lasting `secs` seconds.
    pub fn spring(secs: f32, damping: f32, initial_velocity: f32) -> Self {
        Timing::Spring(SpringTiming::new(secs, damping, initial_velocity))
    }

    /// Total segment length.
    pub fn duration(&self) -> Duration {
        match self {
            Timing::Curve { duration, .. } => *duration,
            Timing::Spring(spring) => spring.duration,
        }
    }

    /// Progress `elapsed` into the segment.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        match self {
            Timing::Curve { duration, easing } => {
                if duration.is_zero() || elapsed >= *duration {
                    1.0
                } else {
                    easing.apply(elapsed.as_secs_f32() / duration.as_secs_f32())
                }
            }
            Timing::Spring(spring) => spring.progress(elapsed),
        }
    }
}

/// One leg of a run: move to `target` with `timing`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T> {
    /// Value reached at the end of the segment.
    pub target: T,
    /// Timing of the segment.
    pub timing: Timing,
}

impl<T> Segment<T> {
    /// Creates a segment.
    pub fn new(target: T, timing: Timing) -> Self {
        Self { target, timing }
    }
}

struct Run<T> {
    from: T,
    segments: SmallVec<[Segment<T>; 2]>,
    index: usize,
    segment_start: Duration,
    on_complete: Option<OnComplete>,
}

/// A single animated property.
pub struct Track<T> {
    value: T,
    run: Option<Run<T>>,
    finished: SmallVec<[OnComplete; 1]>,
}

impl<T: Animatable> Track<T> {
    /// Creates a resting track.
    pub fn new(value: T) -> Self {
        Self {
            value,
            run: None,
            finished: SmallVec::new(),
        }
    }

    /// Current presentation value.
    pub fn value(&self) -> T {
        self.value
    }

    /// The value the track comes to rest at.
    pub fn target(&self) -> T {
        self.run
            .as_ref()
            .and_then(|run| run.segments.last())
            .map_or(self.value, |segment| segment.target)
    }

    /// Returns `true` while a run is in flight.
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Snaps to `value`, dropping any run in flight.
    pub fn set(&mut self, value: T) {
        self.run = None;
        self.value = value;
    }

    /// Starts a run at `now` from the current presentation value.
    ///
    /// Any previous run that has not finished by `now` is dropped together
    /// with its completion.
    pub fn animate<I>(&mut self, now: Duration, segments: I, on_complete: Option<OnComplete>)
    where
        I: IntoIterator<Item = Segment<T>>,
    {
        self.advance(now);
        if let Some(preempted) = &self.run {
            tracing::trace!(
                dropped_completion = preempted.on_complete.is_some(),
                "track run preempted"
            );
        }
        let segments: SmallVec<[Segment<T>; 2]> = segments.into_iter().collect();
        if segments.is_empty() {
            self.run = None;
            if let Some(on_complete) = on_complete {
                self.finished.push(on_complete);
            }
            return;
        }
        self.run = Some(Run {
            from: self.value,
            segments,
            index: 0,
            segment_start: now,
            on_complete,
        });
        self.advance(now);
    }

    /// Advances to `now` and returns the completions of runs that finished.
    pub fn tick(&mut self, now: Duration) -> SmallVec<[OnComplete; 1]> {
        self.advance(now);
        std::mem::take(&mut self.finished)
    }

    fn advance(&mut self, now: Duration) {
        let mut done = false;
        if let Some(run) = self.run.as_mut() {
            loop {
                let segment = run.segments[run.index];
                let elapsed = now.saturating_sub(run.segment_start);
                let duration = segment.timing.duration();
                if elapsed < duration {
                    let progress = segment.timing.progress(elapsed);
                    self.value = run.from.lerp(&segment.target, progress);
                    break;
                }
                self.value = segment.target;
                run.from = segment.target;
                run.segment_start += duration;
                run.index += 1;
                if run.index >= run.segments.len() {
                    done = true;
                    break;
                }
            }
        }
        if done
            && let Some(run) = self.run.take()
            && let Some(on_complete) = run.on_complete
        {
            self.finished.push(on_complete);
        }
    }
}

impl<T: Animatable + Default> Default for Track<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Track<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Track")
            .field("value", &self.value)
            .field("animating", &self.run.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn counter() -> (Arc<AtomicUsize>, OnComplete) {
        let count = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&count);
        let on_complete: OnComplete = Box::new(move || {
            sink.fetch_add(1, Ordering::SeqCst);
        });
        (count, on_complete)
    }

    #[test]
    fn segments_play_back_to_back() {
        let mut track = Track::new(1.0_f32);
        track.animate(
            ms(0),
            [
                Segment::new(2.0, Timing::curve(0.1, Easing::Linear)),
                Segment::new(0.0, Timing::curve(0.2, Easing::Linear)),
            ],
            None,
        );
        track.tick(ms(50));
        assert!((track.value() - 1.5).abs() < 1e-4);
        track.tick(ms(100));
        assert!((track.value() - 2.0).abs() < 1e-4);
        track.tick(ms(200));
        assert!((track.value() - 1.0).abs() < 1e-4);
        assert_eq!(track.target(), 0.0);
        track.tick(ms(300));
        assert_eq!(track.value(), 0.0);
        assert!(!track.is_animating());
    }

    #[test]
    fn transform_track_blends_scale_and_translation() {
        let mut track = Track::new(SurfaceTransform::IDENTITY);
        let target = SurfaceTransform::uniform(2.0).translated(Vec2::new(10.0, -4.0));
        track.animate(
            ms(0),
            [Segment::new(target, Timing::curve(0.1, Easing::Linear))],
            None,
        );
        track.tick(ms(50));
        let halfway = track.value();
        assert!((halfway.scale - Vec2::splat(1.5)).length() < 1e-4);
        assert!((halfway.translation - Vec2::new(5.0, -2.0)).length() < 1e-4);
        track.tick(ms(100));
        assert_eq!(track.value(), target);
    }

    #[test]
    fn completion_fires_once_after_last_segment() {
        let (count, on_complete) = counter();
        let mut track = Track::new(0.0_f32);
        track.animate(
            ms(0),
            [Segment::new(1.0, Timing::spring(0.4, 0.6, 0.8))],
            Some(on_complete),
        );
        assert!(track.tick(ms(399)).is_empty());
        let done = track.tick(ms(400));
        assert_eq!(done.len(), 1);
        for f in done {
            f();
        }
        assert!(track.tick(ms(800)).is_empty());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn new_run_preempts_and_drops_old_completion() {
        let (count, on_complete) = counter();
        let mut track = Track::new(0.0_f32);
        track.animate(
            ms(0),
            [Segment::new(10.0, Timing::curve(1.0, Easing::Linear))],
            Some(on_complete),
        );
        track.animate(
            ms(500),
            [Segment::new(0.0, Timing::curve(0.5, Easing::Linear))],
            None,
        );
        // Re-targets from the presentation value at the time of the call.
        track.tick(ms(750));
        assert!((track.value() - 2.5).abs() < 1e-3);
        for f in track.tick(ms(2000)) {
            f();
        }
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn set_snaps_and_stops() {
        let mut track = Track::new(Rect::ZERO);
        let target = Rect::new(9.0, 1.0, 72.0, 36.0);
        track.animate(
            ms(0),
            [Segment::new(target, Timing::curve(0.35, Easing::EaseInOut))],
            None,
        );
        track.set(target);
        assert!(!track.is_animating());
        assert_eq!(track.value(), target);
    }

    #[test]
    fn empty_run_completes_immediately() {
        let (count, on_complete) = counter();
        let mut track = Track::new(0.5_f32);
        track.animate(ms(0), std::iter::empty(), Some(on_complete));
        for f in track.tick(ms(0)) {
            f();
        }
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(track.value(), 0.5);
    }
}

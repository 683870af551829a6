//! Press, release and pulse animations shared by every glass surface.
//!
//! ## Usage
//!
//! Compose one [`SurfaceAnimator`] into each interactive surface and forward
//! input to it. The owner calls [`SurfaceAnimator::tick`] once per frame and
//! reads [`SurfaceAnimator::transform`] and
//! [`SurfaceAnimator::highlight_opacity`] when drawing.
use std::time::Duration;

use glam::Vec2;
use lucent_ui::{
    Easing, OnComplete, Point, Segment, SharedClock, Size, SurfaceTransform, Timing, Track,
};

use crate::animation_config::{AnimationConfig, PulseSpec};

/// Highlight state of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightState {
    /// At rest.
    #[default]
    Idle,
    /// Pressed.
    Highlighted,
}

/// Drives the transform and highlight overlay of one surface.
///
/// `press` and `release` are the only transitions between
/// [`HighlightState`]s; both are idempotent. `bounce`, `stretch`,
/// `selection_pulse` and `pulse` are one-shots layered over either state. Any
/// call that moves the transform preempts the transform animation in flight.
pub struct SurfaceAnimator {
    clock: SharedClock,
    config: AnimationConfig,
    size: Size,
    state: HighlightState,
    active_touch_origin: Option<Point>,
    highlight: Track<f32>,
    transform: Track<SurfaceTransform>,
}

impl SurfaceAnimator {
    /// Creates an idle animator with the default config.
    pub fn new(clock: SharedClock) -> Self {
        Self::with_config(clock, AnimationConfig::DEFAULT)
    }

    /// Creates an idle animator.
    pub fn with_config(clock: SharedClock, config: AnimationConfig) -> Self {
        Self {
            clock,
            config,
            size: Size::ZERO,
            state: HighlightState::Idle,
            active_touch_origin: None,
            highlight: Track::new(0.0),
            transform: Track::new(SurfaceTransform::IDENTITY),
        }
    }

    /// The active config.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Swaps the config. Animations in flight keep their timing.
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    /// Size of the owning surface, used to resolve press displacement.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Updates the surface size.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Current highlight state.
    pub fn state(&self) -> HighlightState {
        self.state
    }

    /// Returns `true` while pressed.
    pub fn is_highlighted(&self) -> bool {
        self.state == HighlightState::Highlighted
    }

    /// Location of the press in surface-local coordinates, if one is active.
    pub fn active_touch_origin(&self) -> Option<Point> {
        self.active_touch_origin
    }

    /// Presses or releases the surface. Returns `false` if the surface was
    /// already in the requested state.
    pub fn animate_highlight(&mut self, highlighted: bool, at: Option<Point>) -> bool {
        if highlighted {
            self.press(at)
        } else {
            self.release()
        }
    }

    /// Moves to [`HighlightState::Highlighted`].
    ///
    /// The overlay fades in and the surface shrinks to `pressed_scale`,
    /// displaced towards `at` by `stretch_factor` of the size.
    pub fn press(&mut self, at: Option<Point>) -> bool {
        if self.is_highlighted() {
            return false;
        }
        self.state = HighlightState::Highlighted;
        self.active_touch_origin = at;

        let now = self.clock.now();
        let duration = self.config.highlight_duration;
        let mut target = SurfaceTransform::uniform(self.config.pressed_scale);
        if let Some(point) = at {
            target = target.translated(self.press_displacement(point));
        }

        self.highlight.animate(
            now,
            [Segment::new(1.0, Timing::curve(duration, Easing::EaseOut))],
            None,
        );
        self.transform.animate(
            now,
            [Segment::new(target, Timing::curve(duration, Easing::EaseOut))],
            None,
        );
        tracing::debug!(?at, "surface pressed");
        true
    }

    /// Moves to [`HighlightState::Idle`].
    ///
    /// The overlay fades out and the transform springs back to identity. The
    /// return is always centered, whatever the press location was.
    pub fn release(&mut self) -> bool {
        if !self.is_highlighted() {
            return false;
        }
        self.state = HighlightState::Idle;
        self.active_touch_origin = None;

        let now = self.clock.now();
        self.highlight.animate(
            now,
            [Segment::new(
                0.0,
                Timing::curve(self.config.highlight_duration, Easing::EaseIn),
            )],
            None,
        );
        self.transform.animate(
            now,
            [Segment::new(
                SurfaceTransform::IDENTITY,
                self.config.spring_back(),
            )],
            None,
        );
        tracing::debug!("surface released");
        true
    }

    /// Scales out to `bounce_scale` and springs back. `on_complete` runs from
    /// [`SurfaceAnimator::tick`] once the spring settles.
    pub fn bounce(&mut self, on_complete: Option<OnComplete>) {
        let spec = self
            .config
            .pulse(SurfaceTransform::uniform(self.config.bounce_scale));
        self.pulse(spec, on_complete);
    }

    /// Scales by `1 + direction * stretch_factor` per axis and springs back.
    pub fn stretch(&mut self, direction: Vec2, on_complete: Option<OnComplete>) {
        let scale = Vec2::ONE + direction * self.config.stretch_factor;
        let spec = self.config.pulse(SurfaceTransform::scaled(scale));
        self.pulse(spec, on_complete);
    }

    /// Plays a pulse to `highlight_scale` when `selected`; does nothing
    /// otherwise.
    pub fn selection_pulse(&mut self, selected: bool) {
        if !selected {
            return;
        }
        let spec = self
            .config
            .pulse(SurfaceTransform::uniform(self.config.highlight_scale));
        self.pulse(spec, None);
    }

    /// Plays an arbitrary two-phase pulse on the transform.
    pub fn pulse(&mut self, spec: PulseSpec, on_complete: Option<OnComplete>) {
        let now = self.clock.now();
        self.transform.animate(now, spec.segments(), on_complete);
        tracing::trace!(peak = ?spec.peak, "surface pulse");
    }

    /// Springs the transform back to identity starting at `start`.
    ///
    /// `start` may lie in the past; the spring is sampled from there on the
    /// next tick.
    pub(crate) fn settle_from(&mut self, start: Duration, timing: Timing) {
        self.transform.animate(
            start,
            [Segment::new(SurfaceTransform::IDENTITY, timing)],
            None,
        );
    }

    /// Advances both tracks to the clock's current time and runs finished
    /// completions. Returns `true` while anything is still animating.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        self.highlight.tick(now);
        for on_complete in self.transform.tick(now) {
            on_complete();
        }
        self.is_animating()
    }

    /// Current surface transform.
    pub fn transform(&self) -> SurfaceTransform {
        self.transform.value()
    }

    /// Current highlight overlay opacity.
    pub fn highlight_opacity(&self) -> f32 {
        self.highlight.value()
    }

    /// Returns `true` while either track is animating.
    pub fn is_animating(&self) -> bool {
        self.highlight.is_animating() || self.transform.is_animating()
    }

    /// The clock this animator samples.
    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    // ((point - center) / size) * stretch * size, per axis.
    fn press_displacement(&self, point: Point) -> Vec2 {
        let center = Point::new(self.size.width / 2.0, self.size.height / 2.0);
        (point - center) * self.config.stretch_factor
    }
}

impl std::fmt::Debug for SurfaceAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceAnimator")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("transform", &self.transform.value())
            .field("highlight", &self.highlight.value())
            .finish()
    }
}

//! A continuous slider with a glass knob.
//!
//! ## Usage
//!
//! Lay the slider out with [`GlassSlider::layout`], then feed taps and drags.
//! Values are committed continuously while dragging.
use std::{cmp::Ordering, time::Duration};

use derive_setters::Setters;
use lucent_ui::{CallbackWith, Color, Deadline, Point, Rect, SharedClock, Size};

use crate::{
    error::{self, ConfigError},
    glass_surface::{GlassPanel, GlassShadow, GlassSurface, GlassSurfaceArgs, RenderCapabilities},
    shape_def::GlassShape,
    touch_tracking::PanEvent,
};

/// Defaults for [`GlassSlider`].
pub struct SliderDefaults;

impl SliderDefaults {
    /// Knob diameter.
    pub const KNOB_SIZE: f32 = 28.0;
    /// Overall height.
    pub const HEIGHT: f32 = 44.0;
    /// Track thickness.
    pub const TRACK_HEIGHT: f32 = 4.0;
    /// Track background.
    pub const TRACK_BACKGROUND: Color = Color::new(0.47, 0.47, 0.5, 0.2);
    /// Filled part of the track.
    pub const TRACK_FOREGROUND: Color = Color::from_rgb(0.0, 0.48, 1.0);
    /// How long a tap holds the knob pressed.
    pub const TAP_RELEASE_DELAY: Duration = Duration::from_millis(100);

    /// Backdrop of the knob.
    pub fn knob() -> GlassSurfaceArgs {
        GlassSurfaceArgs::default()
            .shape(GlassShape::Circle)
            .tint_color(Color::WHITE)
            .highlight_color(Color::white(1.0, 0.15))
            .blur_radius(6.0)
            .shadow(GlassShadow {
                color: Color::BLACK,
                offset: glam::Vec2::new(0.0, 2.0),
                radius: 4.0,
                opacity: 0.2,
            })
    }
}

/// Arguments for [`GlassSlider`].
#[derive(Clone, PartialEq, Setters)]
pub struct GlassSliderArgs {
    /// Initial value, clamped into the range.
    pub value: f32,
    /// Lower bound.
    pub min_value: f32,
    /// Upper bound. Must be greater than `min_value`.
    pub max_value: f32,
    /// Knob diameter.
    pub knob_size: f32,
    /// Overall height.
    pub height: f32,
    /// Track thickness.
    pub track_height: f32,
    /// Track background.
    pub track_background_color: Color,
    /// Filled part of the track.
    pub track_foreground_color: Color,
    /// Knob backdrop.
    pub knob: GlassSurfaceArgs,
    /// Called with every committed value.
    #[setters(skip)]
    pub on_value_updated: Option<CallbackWith<f32>>,
    /// Called with `true` when a drag starts and `false` when it ends.
    #[setters(skip)]
    pub on_tracking_updated: Option<CallbackWith<bool>>,
}

impl GlassSliderArgs {
    /// Sets the value-change handler.
    pub fn on_value_updated<F>(mut self, on_value_updated: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_value_updated = Some(CallbackWith::new(on_value_updated));
        self
    }

    /// Sets the value-change handler using a shared callback.
    pub fn on_value_updated_shared(
        mut self,
        on_value_updated: impl Into<CallbackWith<f32>>,
    ) -> Self {
        self.on_value_updated = Some(on_value_updated.into());
        self
    }

    /// Sets the drag start/end handler.
    pub fn on_tracking_updated<F>(mut self, on_tracking_updated: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_tracking_updated = Some(CallbackWith::new(on_tracking_updated));
        self
    }

    /// Checks the range and geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_value.partial_cmp(&self.max_value) != Some(Ordering::Less) {
            return Err(ConfigError::EmptyRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        error::positive("knob_size", self.knob_size)?;
        error::positive("height", self.height)?;
        error::positive("track_height", self.track_height)?;
        self.knob.animation_config.validate()
    }

    fn range(&self) -> f32 {
        self.max_value - self.min_value
    }

    fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.min_value
        } else {
            value.clamp(self.min_value, self.max_value)
        }
    }
}

impl Default for GlassSliderArgs {
    fn default() -> Self {
        Self {
            value: 0.0,
            min_value: 0.0,
            max_value: 1.0,
            knob_size: SliderDefaults::KNOB_SIZE,
            height: SliderDefaults::HEIGHT,
            track_height: SliderDefaults::TRACK_HEIGHT,
            track_background_color: SliderDefaults::TRACK_BACKGROUND,
            track_foreground_color: SliderDefaults::TRACK_FOREGROUND,
            knob: SliderDefaults::knob(),
            on_value_updated: None,
            on_tracking_updated: None,
        }
    }
}

/// Frames of a laid-out slider, in slider-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderLayout {
    /// Overall size.
    pub size: Size,
    /// Full track.
    pub track_background: Rect,
    /// Filled part of the track.
    pub track_foreground: Rect,
    /// Knob.
    pub knob: Rect,
}

/// Panels of a slider, in slider-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderPanels {
    /// Full track.
    pub track_background: GlassPanel,
    /// Filled part of the track.
    pub track_foreground: GlassPanel,
    /// Knob.
    pub knob: GlassPanel,
}

#[derive(Debug, Clone, Copy)]
struct DragStart {
    value: f32,
    location: Point,
}

/// A value slider with a glass knob.
pub struct GlassSlider {
    args: GlassSliderArgs,
    clock: SharedClock,
    value: f32,
    layout: SliderLayout,
    knob: GlassSurface,
    drag: Option<DragStart>,
    tap_release: Deadline,
}

impl GlassSlider {
    /// Creates a slider. Fails if the range is empty or the geometry is
    /// degenerate.
    pub fn new(args: GlassSliderArgs, clock: SharedClock) -> Result<Self, ConfigError> {
        args.validate()?;
        let value = args.clamp(args.value);
        let knob = GlassSurface::new(args.knob.clone(), clock.clone());
        Ok(Self {
            args,
            clock,
            value,
            layout: SliderLayout::default(),
            knob,
            drag: None,
            tap_release: Deadline::new(),
        })
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the value from the host, clamped into range. Does not call
    /// `on_value_updated`.
    pub fn set_value(&mut self, value: f32) {
        self.value = self.args.clamp(value);
        self.relayout();
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_tracking(&self) -> bool {
        self.drag.is_some()
    }

    /// The knob surface.
    pub fn knob(&self) -> &GlassSurface {
        &self.knob
    }

    /// The knob surface, for styling.
    pub fn knob_mut(&mut self) -> &mut GlassSurface {
        &mut self.knob
    }

    /// The last computed layout.
    pub fn current_layout(&self) -> SliderLayout {
        self.layout
    }

    /// Lays the slider out across `width`.
    ///
    /// The knob keeps its frame while a drag is in progress; the drag moves it.
    pub fn layout(&mut self, width: f32) -> SliderLayout {
        let knob_size = self.args.knob_size;
        let height = self.args.height;
        let track_height = self.args.track_height;
        let track_y = (height - track_height) / 2.0;
        let track_width = (width - knob_size).max(0.0);
        let foreground_width = track_width * self.normalized();

        let knob = if self.is_tracking() {
            self.layout.knob
        } else {
            self.knob_frame(foreground_width)
        };
        self.layout = SliderLayout {
            size: Size::new(width, height),
            track_background: Rect::new(knob_size / 2.0, track_y, track_width, track_height),
            track_foreground: Rect::new(knob_size / 2.0, track_y, foreground_width, track_height),
            knob,
        };
        self.knob.set_frame(knob);
        self.layout
    }

    /// Jumps to the value under `location` and briefly presses the knob.
    pub fn handle_tap(&mut self, location: Point) {
        let knob_size = self.args.knob_size;
        let track_width = self.track_width();
        let normalized = if track_width > 0.0 {
            ((location.x - knob_size / 2.0) / track_width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let value = self.args.min_value + normalized * self.args.range();

        self.knob.animator_mut().press(None);
        self.tap_release
            .arm(self.clock.now() + SliderDefaults::TAP_RELEASE_DELAY);
        tracing::debug!(value, "slider tapped");
        self.commit(value);
    }

    /// Applies a drag gesture. A drag that does not begin on the knob is
    /// ignored until the next `Began`.
    pub fn handle_pan(&mut self, event: PanEvent) {
        match event {
            PanEvent::Began(location) => {
                if !self.layout.knob.contains(location) {
                    tracing::trace!(?location, "slider drag began off the knob");
                    return;
                }
                self.drag = Some(DragStart {
                    value: self.value,
                    location,
                });
                self.knob.animator_mut().press(None);
                self.notify_tracking(true);
            }
            PanEvent::Changed { location, .. } => {
                let Some(start) = self.drag else {
                    return;
                };
                let track_width = self.track_width();
                if track_width <= 0.0 {
                    return;
                }
                let delta = (location.x - start.location.x) / track_width * self.args.range();
                self.commit(start.value + delta);
                let knob = self.knob_frame(track_width * self.normalized());
                self.layout.knob = knob;
                self.knob.set_frame(knob);
            }
            PanEvent::Ended | PanEvent::Cancelled => {
                if self.drag.take().is_none() {
                    return;
                }
                self.knob.animator_mut().release();
                self.notify_tracking(false);
                self.relayout();
            }
        }
    }

    /// Advances animations and fires the delayed tap release. Returns `true`
    /// while anything is animating or pending.
    pub fn tick(&mut self) -> bool {
        if self.tap_release.take_due(self.clock.now()) {
            self.knob.animator_mut().release();
        }
        self.knob.tick() || self.tap_release.is_armed()
    }

    /// Describes the slider at its current animation state.
    pub fn render(&self, capabilities: RenderCapabilities) -> SliderPanels {
        let radius = self.args.track_height / 2.0;
        let track = |frame: Rect, color: Color| {
            let args = GlassSurfaceArgs {
                shape: GlassShape::rounded(radius),
                tint_color: color,
                blur_enabled: false,
                shadow_enabled: false,
                border: None,
                ..GlassSurfaceArgs::default()
            };
            GlassPanel::from_args(&args, frame, radius, capabilities)
        };
        SliderPanels {
            track_background: track(
                self.layout.track_background,
                self.args.track_background_color,
            ),
            track_foreground: track(
                self.layout.track_foreground,
                self.args.track_foreground_color,
            ),
            knob: self.knob.render(capabilities),
        }
    }

    fn normalized(&self) -> f32 {
        (self.value - self.args.min_value) / self.args.range()
    }

    fn track_width(&self) -> f32 {
        (self.layout.size.width - self.args.knob_size).max(0.0)
    }

    // Knob left edge sits at the end of the filled track.
    fn knob_frame(&self, foreground_width: f32) -> Rect {
        let knob_size = self.args.knob_size;
        Rect::new(
            foreground_width,
            (self.args.height - knob_size) / 2.0,
            knob_size,
            knob_size,
        )
    }

    fn relayout(&mut self) {
        if self.layout.size.width > 0.0 {
            self.layout(self.layout.size.width);
        }
    }

    fn commit(&mut self, value: f32) {
        let value = self.args.clamp(value);
        if value == self.value {
            return;
        }
        self.value = value;
        tracing::trace!(value, "slider value committed");
        if let Some(on_value_updated) = &self.args.on_value_updated {
            on_value_updated.call(value);
        }
        if !self.is_tracking() {
            self.relayout();
        } else {
            self.update_track_foreground();
        }
    }

    fn update_track_foreground(&mut self) {
        self.layout.track_foreground.width = self.track_width() * self.normalized();
    }

    fn notify_tracking(&self, tracking: bool) {
        if let Some(on_tracking_updated) = &self.args.on_tracking_updated {
            on_tracking_updated.call(tracking);
        }
    }
}

impl std::fmt::Debug for GlassSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlassSlider")
            .field("value", &self.value)
            .field("layout", &self.layout)
            .field("tracking", &self.drag.is_some())
            .finish()
    }
}

//! A switch (toggle) with a glass thumb.
//!
//! ## Usage
//!
//! Feed taps to [`GlassSwitch::handle_tap`] and drags to
//! [`GlassSwitch::handle_pan`]. `on_value_updated` fires synchronously from
//! those calls whenever the committed value changes.
use std::time::Duration;

use derive_setters::Setters;
use lucent_ui::{
    CallbackWith, Color, Deadline, Easing, Rect, Segment, SharedClock, Size, Timing, Track,
};

use crate::{
    error::{self, ConfigError},
    glass_surface::{GlassPanel, GlassShadow, GlassSurface, GlassSurfaceArgs, RenderCapabilities},
    shape_def::GlassShape,
    touch_tracking::PanEvent,
};

/// Defaults for [`GlassSwitch`].
pub struct SwitchDefaults;

impl SwitchDefaults {
    /// Track width.
    pub const WIDTH: f32 = 51.0;
    /// Track height.
    pub const HEIGHT: f32 = 31.0;
    /// Thumb diameter.
    pub const THUMB_SIZE: f32 = 27.0;
    /// Gap between thumb and track edge.
    pub const THUMB_PADDING: f32 = 2.0;
    /// Track color when off.
    pub const TRACK_OFF_COLOR: Color = Color::from_rgb(224.0 / 255.0, 224.0 / 255.0, 224.0 / 255.0);
    /// Track color when on.
    pub const TRACK_ON_COLOR: Color = Color::from_rgb(66.0 / 255.0, 212.0 / 255.0, 81.0 / 255.0);
    /// How long a tap holds the thumb pressed.
    pub const TAP_RELEASE_DELAY: Duration = Duration::from_millis(100);
    /// Thumb settle spring duration in seconds.
    pub const THUMB_SPRING_DURATION: f32 = 0.25;
    /// Thumb settle spring damping.
    pub const THUMB_SPRING_DAMPING: f32 = 0.8;
    /// Thumb settle spring initial velocity.
    pub const THUMB_SPRING_VELOCITY: f32 = 0.5;
    /// Track color transition in seconds.
    pub const TRACK_COLOR_DURATION: f32 = 0.2;

    /// Backdrop of the thumb.
    pub fn thumb() -> GlassSurfaceArgs {
        GlassSurfaceArgs::default()
            .shape(GlassShape::Capsule)
            .tint_color(Color::WHITE)
            .highlight_color(Color::white(1.0, 0.15))
            .blur_radius(6.0)
            .shadow(GlassShadow {
                color: Color::BLACK,
                offset: glam::Vec2::new(0.0, 1.0),
                radius: 3.0,
                opacity: 0.2,
            })
    }
}

/// Arguments for [`GlassSwitch`].
#[derive(Clone, PartialEq, Setters)]
pub struct GlassSwitchArgs {
    /// Initial value.
    pub on: bool,
    /// Track width.
    pub width: f32,
    /// Track height.
    pub height: f32,
    /// Thumb diameter.
    pub thumb_size: f32,
    /// Gap between thumb and track edge.
    pub thumb_padding: f32,
    /// Track color when off.
    pub track_off_color: Color,
    /// Track color when on.
    pub track_on_color: Color,
    /// Thumb backdrop.
    pub thumb: GlassSurfaceArgs,
    /// Called with the new value whenever input commits a change.
    #[setters(skip)]
    pub on_value_updated: Option<CallbackWith<bool>>,
}

impl GlassSwitchArgs {
    /// Sets the value-change handler.
    pub fn on_value_updated<F>(mut self, on_value_updated: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_value_updated = Some(CallbackWith::new(on_value_updated));
        self
    }

    /// Sets the value-change handler using a shared callback.
    pub fn on_value_updated_shared(
        mut self,
        on_value_updated: impl Into<CallbackWith<bool>>,
    ) -> Self {
        self.on_value_updated = Some(on_value_updated.into());
        self
    }

    /// Checks the geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        error::positive("width", self.width)?;
        error::positive("height", self.height)?;
        error::positive("thumb_size", self.thumb_size)?;
        error::positive(
            "thumb travel",
            self.width - self.thumb_size - 2.0 * self.thumb_padding,
        )?;
        self.thumb.animation_config.validate()
    }

    fn min_thumb_x(&self) -> f32 {
        self.thumb_padding
    }

    // Never below `min_thumb_x`, so a cramped switch has zero travel.
    fn max_thumb_x(&self) -> f32 {
        (self.width - self.thumb_size - self.thumb_padding).max(self.min_thumb_x())
    }

    fn resting_thumb_x(&self, on: bool) -> f32 {
        if on {
            self.max_thumb_x()
        } else {
            self.min_thumb_x()
        }
    }
}

impl Default for GlassSwitchArgs {
    fn default() -> Self {
        Self {
            on: false,
            width: SwitchDefaults::WIDTH,
            height: SwitchDefaults::HEIGHT,
            thumb_size: SwitchDefaults::THUMB_SIZE,
            thumb_padding: SwitchDefaults::THUMB_PADDING,
            track_off_color: SwitchDefaults::TRACK_OFF_COLOR,
            track_on_color: SwitchDefaults::TRACK_ON_COLOR,
            thumb: SwitchDefaults::thumb(),
            on_value_updated: None,
        }
    }
}

/// Panels of a switch, in switch-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchPanels {
    /// The colored track.
    pub track: GlassPanel,
    /// The glass thumb.
    pub thumb: GlassPanel,
}

/// A binary toggle with a draggable glass thumb.
pub struct GlassSwitch {
    args: GlassSwitchArgs,
    clock: SharedClock,
    is_on: bool,
    thumb: GlassSurface,
    thumb_x: Track<f32>,
    track_color: Track<Color>,
    tracking: bool,
    tap_release: Deadline,
}

impl GlassSwitch {
    /// Creates a switch resting at `args.on`.
    pub fn new(args: GlassSwitchArgs, clock: SharedClock) -> Self {
        let is_on = args.on;
        let thumb_x = Track::new(args.resting_thumb_x(is_on));
        let track_color = Track::new(if is_on {
            args.track_on_color
        } else {
            args.track_off_color
        });
        let thumb = GlassSurface::new(args.thumb.clone(), clock.clone());
        let mut switch = Self {
            args,
            clock,
            is_on,
            thumb,
            thumb_x,
            track_color,
            tracking: false,
            tap_release: Deadline::new(),
        };
        switch.sync_thumb_frame();
        switch
    }

    /// Current value.
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Sets the value from the host. Does not call `on_value_updated`.
    pub fn set_on(&mut self, on: bool, animated: bool) {
        if on == self.is_on {
            return;
        }
        self.is_on = on;
        self.update_thumb_position(animated);
        self.update_track_color();
    }

    /// Overall size.
    pub fn size(&self) -> Size {
        Size::new(self.args.width, self.args.height)
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Replaces the off and on track colors.
    pub fn set_track_colors(&mut self, off: Color, on: Color) {
        self.args.track_off_color = off;
        self.args.track_on_color = on;
        if !self.tracking {
            self.update_track_color();
        }
    }

    /// The thumb surface.
    pub fn thumb(&self) -> &GlassSurface {
        &self.thumb
    }

    /// The thumb surface, for styling.
    pub fn thumb_mut(&mut self) -> &mut GlassSurface {
        &mut self.thumb
    }

    /// The thumb frame at its current animation state.
    pub fn thumb_frame(&self) -> Rect {
        Rect::new(
            self.thumb_x.value(),
            self.args.thumb_padding,
            self.args.thumb_size,
            self.args.thumb_size,
        )
    }

    /// The track color at its current animation state.
    pub fn track_color(&self) -> Color {
        self.track_color.value()
    }

    /// Toggles the value with a short press of the thumb.
    pub fn handle_tap(&mut self) {
        self.is_on = !self.is_on;
        self.update_thumb_position(true);
        self.update_track_color();

        self.thumb.animator_mut().press(None);
        self.tap_release
            .arm(self.clock.now() + SwitchDefaults::TAP_RELEASE_DELAY);

        tracing::debug!(on = self.is_on, "switch tapped");
        self.notify();
    }

    /// Applies a drag gesture.
    pub fn handle_pan(&mut self, event: PanEvent) {
        match event {
            PanEvent::Began(_) => {
                self.tracking = true;
                self.thumb.animator_mut().press(None);
            }
            PanEvent::Changed { delta, .. } => {
                if !self.tracking {
                    return;
                }
                let x = (self.thumb_x.value() + delta.x)
                    .clamp(self.args.min_thumb_x(), self.args.max_thumb_x());
                self.thumb_x.set(x);
                self.sync_thumb_frame();

                let travel = self.args.max_thumb_x() - self.args.min_thumb_x();
                let progress = if travel > 0.0 {
                    (x - self.args.min_thumb_x()) / travel
                } else {
                    0.0
                };
                self.track_color.set(
                    self.args
                        .track_off_color
                        .interpolate(self.args.track_on_color, progress),
                );
            }
            PanEvent::Ended | PanEvent::Cancelled => {
                if !self.tracking {
                    return;
                }
                self.tracking = false;
                self.thumb.animator_mut().release();

                let on = self.thumb_frame().mid_x() > self.args.width / 2.0;
                let changed = on != self.is_on;
                self.is_on = on;
                self.update_thumb_position(true);
                self.update_track_color();
                tracing::debug!(on, changed, "switch drag ended");
                if changed {
                    self.notify();
                }
            }
        }
    }

    /// Advances animations and fires the delayed tap release. Returns `true`
    /// while anything is animating or pending.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        if self.tap_release.take_due(now) {
            self.thumb.animator_mut().release();
        }
        self.thumb_x.tick(now);
        self.track_color.tick(now);
        self.sync_thumb_frame();
        let thumb_animating = self.thumb.tick();
        thumb_animating
            || self.thumb_x.is_animating()
            || self.track_color.is_animating()
            || self.tap_release.is_armed()
    }

    /// Describes the switch at its current animation state.
    pub fn render(&self, capabilities: RenderCapabilities) -> SwitchPanels {
        let track_frame = Rect::new(0.0, 0.0, self.args.width, self.args.height);
        let track_args = GlassSurfaceArgs {
            shape: GlassShape::Capsule,
            tint_color: self.track_color.value(),
            blur_enabled: false,
            shadow_enabled: false,
            border: None,
            ..GlassSurfaceArgs::default()
        };
        let track = GlassPanel::from_args(
            &track_args,
            track_frame,
            self.args.height / 2.0,
            capabilities,
        );
        SwitchPanels {
            track,
            thumb: self.thumb.render(capabilities),
        }
    }

    fn notify(&self) {
        if let Some(on_value_updated) = &self.args.on_value_updated {
            on_value_updated.call(self.is_on);
        }
    }

    fn update_thumb_position(&mut self, animated: bool) {
        let target = self.args.resting_thumb_x(self.is_on);
        if animated {
            let spring = Timing::spring(
                SwitchDefaults::THUMB_SPRING_DURATION,
                SwitchDefaults::THUMB_SPRING_DAMPING,
                SwitchDefaults::THUMB_SPRING_VELOCITY,
            );
            self.thumb_x
                .animate(self.clock.now(), [Segment::new(target, spring)], None);
        } else {
            self.thumb_x.set(target);
        }
        self.sync_thumb_frame();
    }

    fn update_track_color(&mut self) {
        let target = if self.is_on {
            self.args.track_on_color
        } else {
            self.args.track_off_color
        };
        self.track_color.animate(
            self.clock.now(),
            [Segment::new(
                target,
                Timing::curve(SwitchDefaults::TRACK_COLOR_DURATION, Easing::EaseInOut),
            )],
            None,
        );
    }

    fn sync_thumb_frame(&mut self) {
        let frame = self.thumb_frame();
        self.thumb.set_frame(frame);
    }
}

impl std::fmt::Debug for GlassSwitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlassSwitch")
            .field("is_on", &self.is_on)
            .field("thumb_frame", &self.thumb_frame())
            .field("tracking", &self.tracking)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec2;
    use lucent_ui::{ManualClock, Point};
    use parking_lot::Mutex;

    use super::*;

    fn switch(on: bool) -> (Arc<ManualClock>, GlassSwitch, Arc<Mutex<Vec<bool>>>) {
        let clock = ManualClock::shared();
        let updates = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&updates);
        let switch = GlassSwitch::new(
            GlassSwitchArgs::default()
                .on(on)
                .on_value_updated(move |v| sink.lock().push(v)),
            clock.clone(),
        );
        (clock, switch, updates)
    }

    #[test]
    fn default_geometry_is_valid() {
        assert_eq!(GlassSwitchArgs::default().validate(), Ok(()));
        let cramped = GlassSwitchArgs::default().width(30.0);
        assert!(matches!(
            cramped.validate(),
            Err(ConfigError::NonPositive { .. })
        ));
    }

    #[test]
    fn cramped_switch_drags_without_travel() {
        let clock = ManualClock::shared();
        let mut switch = GlassSwitch::new(GlassSwitchArgs::default().width(30.0), clock);
        switch.handle_pan(PanEvent::Began(Point::new(15.0, 15.0)));
        switch.handle_pan(PanEvent::Changed {
            location: Point::new(16.0, 15.0),
            delta: Vec2::new(1.0, 0.0),
        });
        assert_eq!(switch.thumb_frame().x, 2.0);
        assert_eq!(switch.track_color(), SwitchDefaults::TRACK_OFF_COLOR);
        switch.handle_pan(PanEvent::Ended);
        assert_eq!(switch.thumb_frame().x, 2.0);
    }

    #[test]
    fn tap_holds_thumb_for_100ms() {
        let (clock, mut switch, _) = switch(false);
        switch.handle_tap();
        assert!(switch.thumb.animator().is_highlighted());
        clock.advance(Duration::from_millis(99));
        switch.tick();
        assert!(switch.thumb.animator().is_highlighted());
        clock.advance(Duration::from_millis(1));
        switch.tick();
        assert!(!switch.thumb.animator().is_highlighted());
    }

    #[test]
    fn set_on_snaps_without_callback() {
        let (_clock, mut switch, updates) = switch(false);
        switch.set_on(true, false);
        assert!(switch.is_on());
        assert_eq!(switch.thumb_frame().x, 22.0);
        switch.set_on(true, true);
        assert!(updates.lock().is_empty());
    }

    #[test]
    fn drag_clamps_and_blends_track_color() {
        let (_clock, mut switch, _) = switch(false);
        switch.handle_pan(PanEvent::Began(Point::new(15.0, 15.0)));
        switch.handle_pan(PanEvent::Changed {
            location: Point::new(-100.0, 15.0),
            delta: Vec2::new(-100.0, 0.0),
        });
        assert_eq!(switch.thumb_frame().x, 2.0);
        assert_eq!(switch.track_color(), SwitchDefaults::TRACK_OFF_COLOR);

        switch.handle_pan(PanEvent::Changed {
            location: Point::new(25.0, 15.0),
            delta: Vec2::new(10.0, 0.0),
        });
        assert_eq!(switch.thumb_frame().x, 12.0);
        let expected =
            SwitchDefaults::TRACK_OFF_COLOR.interpolate(SwitchDefaults::TRACK_ON_COLOR, 0.5);
        assert_eq!(switch.track_color(), expected);

        switch.handle_pan(PanEvent::Changed {
            location: Point::new(500.0, 15.0),
            delta: Vec2::new(500.0, 0.0),
        });
        assert_eq!(switch.thumb_frame().x, 22.0);
    }

    #[test]
    fn drag_past_midpoint_turns_on() {
        let (clock, mut switch, updates) = switch(false);
        switch.handle_pan(PanEvent::Began(Point::new(15.0, 15.0)));
        switch.handle_pan(PanEvent::Changed {
            location: Point::new(27.0, 15.0),
            delta: Vec2::new(12.0, 0.0),
        });
        switch.handle_pan(PanEvent::Ended);
        assert!(switch.is_on());
        assert_eq!(*updates.lock(), vec![true]);
        clock.advance(Duration::from_secs(1));
        switch.tick();
        assert_eq!(switch.thumb_frame().x, 22.0);
        assert_eq!(switch.track_color(), SwitchDefaults::TRACK_ON_COLOR);
    }

    #[test]
    fn drag_back_to_same_side_does_not_notify() {
        let (_clock, mut switch, updates) = switch(true);
        switch.handle_pan(PanEvent::Began(Point::new(35.0, 15.0)));
        switch.handle_pan(PanEvent::Changed {
            location: Point::new(33.0, 15.0),
            delta: Vec2::new(-2.0, 0.0),
        });
        switch.handle_pan(PanEvent::Cancelled);
        assert!(switch.is_on());
        assert!(updates.lock().is_empty());
        assert!(!switch.thumb.animator().is_highlighted());
    }

    #[test]
    fn track_panel_is_flat() {
        let (_clock, switch, _) = switch(false);
        let panels = switch.render(RenderCapabilities::default());
        assert_eq!(panels.track.blur, None);
        assert_eq!(panels.track.corner_radius, 15.5);
        assert_eq!(panels.thumb.frame, Rect::new(2.0, 2.0, 27.0, 27.0));
        assert!(panels.thumb.blur.is_some());
    }
}

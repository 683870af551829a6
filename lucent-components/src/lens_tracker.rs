//! The lens: a single glass indicator that follows the selected tab.
//!
//! The lens snaps into place on first appearance and fades in. Later
//! selection changes morph it: the frame first stretches into a bridge
//! spanning the old and new positions, then contracts onto the new tab while
//! a gradient overlay swings out and back in the direction of travel.
use std::{f32::consts::FRAC_PI_6, time::Duration};

use derive_setters::Setters;
use glam::Vec2;
use lucent_ui::{Color, Easing, Rect, Segment, SharedClock, SurfaceTransform, Timing, Track};

use crate::{
    animation_config::PulseSpec,
    glass_surface::{GlassBorder, GlassPanel, GlassShadow, GlassSurfaceArgs, RenderCapabilities},
    shape_def::GlassShape,
    surface_animator::SurfaceAnimator,
};

/// Geometry and timing of the lens.
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LensConfig {
    /// Lens height.
    pub height: f32,
    /// Corner radius at rest.
    pub corner_radius: f32,
    /// Horizontal padding added on each side of the tab content.
    pub padding: f32,
    /// Distance from the top of the bar.
    pub top_inset: f32,
    /// Seconds to fade in on first appearance.
    pub fade_in_duration: f32,
    /// Seconds for a full morph.
    pub morph_duration: f32,
    /// Fraction of the morph spent stretching into the bridge.
    pub morph_split: f32,
    /// Bridge height relative to the target height.
    pub bridge_height_factor: f32,
    /// Bridge corner radius relative to `corner_radius`.
    pub bridge_radius_factor: f32,
    /// Peak gradient overlay rotation in radians.
    pub gradient_rotation: f32,
    /// Spring returning the transform to identity after a morph.
    pub settle: Timing,
    /// Pulse played when the selected tab is tapped again.
    pub bounce: PulseSpec,
    /// Pulse layered over a selection change.
    pub selection: PulseSpec,
    /// Backdrop of the lens.
    pub surface: GlassSurfaceArgs,
}

impl LensConfig {
    /// Rest frame of the lens over a tab whose content is `content_width` wide.
    pub fn target_frame(&self, tab_frame: Rect, content_width: f32) -> Rect {
        let width = content_width + self.padding * 2.0;
        Rect::new(
            tab_frame.mid_x() - width / 2.0,
            self.top_inset,
            width,
            self.height,
        )
    }

    fn morph_phases(&self) -> (Timing, Timing) {
        let split = self.morph_split.clamp(0.0, 1.0);
        (
            Timing::curve(self.morph_duration * split, Easing::EaseInOut),
            Timing::curve(self.morph_duration * (1.0 - split), Easing::EaseInOut),
        )
    }
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            height: 36.0,
            corner_radius: 18.0,
            padding: 16.0,
            top_inset: 1.0,
            fade_in_duration: 0.2,
            morph_duration: 0.35,
            morph_split: 0.4,
            bridge_height_factor: 0.92,
            bridge_radius_factor: 0.85,
            gradient_rotation: FRAC_PI_6,
            settle: Timing::spring(0.25, 0.6, 0.5),
            bounce: PulseSpec::scale(1.08, 0.1, 0.5, 0.45, 1.2),
            selection: PulseSpec::scale(0.96, 0.08, 0.5, 0.5, 1.0),
            surface: GlassSurfaceArgs {
                shape: GlassShape::Capsule,
                tint_color: Color::white(1.0, 0.3),
                highlight_color: Color::white(1.0, 0.2),
                blur_enabled: true,
                blur_radius: 12.0,
                shadow_enabled: true,
                shadow: GlassShadow {
                    color: Color::BLACK,
                    offset: Vec2::new(0.0, 4.0),
                    radius: 12.0,
                    opacity: 0.2,
                },
                border: Some(GlassBorder {
                    color: Color::white(1.0, 0.3),
                    width: 0.5,
                }),
                ..GlassSurfaceArgs::default()
            },
        }
    }
}

/// One entry of the tab frame table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabFrame {
    /// Tab frame in bar-local coordinates.
    pub frame: Rect,
    /// Width of the tab's icon and title.
    pub content_width: f32,
}

/// Overlays drawn on top of the lens panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LensDecoration {
    /// Rotation of the conic iridescent gradient in radians.
    pub gradient_rotation: f32,
    /// Whether the iridescent gradient is drawn.
    pub iridescent: bool,
    /// Whether the specular highlight is drawn.
    pub specular_highlight: bool,
}

/// Keeps the lens in sync with the selected tab.
pub struct LensTracker {
    clock: SharedClock,
    config: LensConfig,
    frame: Track<Rect>,
    corner_radius: Track<f32>,
    opacity: Track<f32>,
    gradient_rotation: Track<f32>,
    animator: SurfaceAnimator,
    shown: bool,
    last_selected_index: Option<usize>,
    applied_target: Option<Rect>,
    morph_end: Option<Duration>,
}

impl LensTracker {
    /// Creates a hidden lens.
    pub fn new(config: LensConfig, clock: SharedClock) -> Self {
        let animator =
            SurfaceAnimator::with_config(clock.clone(), config.surface.animation_config);
        Self {
            clock,
            corner_radius: Track::new(config.corner_radius),
            config,
            frame: Track::new(Rect::ZERO),
            opacity: Track::new(0.0),
            gradient_rotation: Track::new(0.0),
            animator,
            shown: false,
            last_selected_index: None,
            applied_target: None,
            morph_end: None,
        }
    }

    /// The lens configuration.
    pub fn config(&self) -> &LensConfig {
        &self.config
    }

    /// Rest frame over `tab`.
    pub fn target_frame(&self, tab: &TabFrame) -> Rect {
        self.config.target_frame(tab.frame, tab.content_width)
    }

    /// Returns `true` once the lens has appeared.
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Index the lens was last moved to.
    pub fn last_selected_index(&self) -> Option<usize> {
        self.last_selected_index
    }

    /// Target frame of the last move.
    pub fn applied_target(&self) -> Option<Rect> {
        self.applied_target
    }

    /// Presentation frame.
    pub fn current_frame(&self) -> Rect {
        self.frame.value()
    }

    /// Presentation corner radius.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius.value()
    }

    /// Presentation opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    /// Presentation transform.
    pub fn transform(&self) -> SurfaceTransform {
        self.animator.transform()
    }

    /// Returns `true` while a morph is in flight.
    pub fn is_morphing(&self) -> bool {
        self.morph_end.is_some()
    }

    /// Places the lens over `index` without animating the frame. On first
    /// appearance the lens fades in.
    pub fn show_at(&mut self, index: usize, table: &[TabFrame]) {
        let Some(tab) = table.get(index) else {
            tracing::debug!(index, "lens show skipped: no such tab");
            return;
        };
        let target = self.target_frame(tab);
        self.snap(index, target);
        if !self.shown {
            self.shown = true;
            self.opacity.set(0.0);
            self.opacity.animate(
                self.clock.now(),
                [Segment::new(
                    1.0,
                    Timing::curve(self.config.fade_in_duration, Easing::EaseOut),
                )],
                None,
            );
            tracing::debug!(index, ?target, "lens shown");
        }
    }

    /// Moves the lens to `to`.
    ///
    /// With `animated` and a previous index the lens morphs; re-selecting the
    /// same index bounces and leaves the frame alone. Otherwise it snaps.
    pub fn move_to(
        &mut self,
        to: usize,
        from: Option<usize>,
        animated: bool,
        table: &[TabFrame],
    ) {
        let Some(tab) = table.get(to) else {
            tracing::debug!(to, "lens move skipped: no such tab");
            return;
        };
        if !self.shown {
            self.show_at(to, table);
            return;
        }
        let target = self.target_frame(tab);
        match from {
            Some(from) if animated && from == to => self.bounce(),
            Some(from) if animated => {
                tracing::debug!(from, to, "lens morph");
                self.morph(target);
                self.last_selected_index = Some(to);
                self.applied_target = Some(target);
            }
            _ => self.snap(to, target),
        }
    }

    /// Re-syncs after the tab frame table was rebuilt.
    ///
    /// Shows the lens if it never appeared; snaps it if the selected index or
    /// its target frame changed.
    pub fn update_layout(&mut self, selected: usize, table: &[TabFrame]) {
        if !self.shown {
            self.show_at(selected, table);
            return;
        }
        let Some(tab) = table.get(selected) else {
            tracing::debug!(selected, "lens relayout skipped: no such tab");
            return;
        };
        let target = self.target_frame(tab);
        if self.last_selected_index != Some(selected) || self.applied_target != Some(target) {
            tracing::trace!(selected, ?target, "lens relayout");
            self.snap(selected, target);
        }
    }

    /// Plays the bounce pulse.
    pub fn bounce(&mut self) {
        tracing::debug!("lens bounce");
        self.animator.pulse(self.config.bounce, None);
    }

    /// Plays the selection pulse.
    pub fn selection_pulse(&mut self) {
        self.animator.pulse(self.config.selection, None);
    }

    /// Hides the lens. The next appearance fades in again.
    pub fn hide(&mut self) {
        self.shown = false;
        self.morph_end = None;
        self.opacity.set(0.0);
    }

    /// Advances every animation. Returns `true` while anything is animating.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        self.frame.tick(now);
        self.corner_radius.tick(now);
        self.opacity.tick(now);
        self.gradient_rotation.tick(now);
        if let Some(end) = self.morph_end
            && now >= end
        {
            self.morph_end = None;
            self.animator.settle_from(end, self.config.settle);
            tracing::trace!("lens morph settled");
        }
        self.animator.tick();
        self.is_animating()
    }

    /// Returns `true` while anything is animating.
    pub fn is_animating(&self) -> bool {
        self.frame.is_animating()
            || self.corner_radius.is_animating()
            || self.opacity.is_animating()
            || self.gradient_rotation.is_animating()
            || self.animator.is_animating()
            || self.morph_end.is_some()
    }

    /// Describes the lens at its current animation state.
    pub fn render(&self, capabilities: RenderCapabilities) -> (GlassPanel, LensDecoration) {
        let mut panel = GlassPanel::from_args(
            &self.config.surface,
            self.frame.value(),
            self.corner_radius.value(),
            capabilities,
        );
        panel.transform = self.animator.transform();
        panel.apply_opacity(self.opacity.value());
        let effects = !capabilities.reduce_transparency;
        let decoration = LensDecoration {
            gradient_rotation: self.gradient_rotation.value(),
            iridescent: effects,
            specular_highlight: effects,
        };
        (panel, decoration)
    }

    fn snap(&mut self, index: usize, target: Rect) {
        self.morph_end = None;
        self.frame.set(target);
        self.corner_radius.set(self.config.corner_radius);
        self.gradient_rotation.set(0.0);
        self.last_selected_index = Some(index);
        self.applied_target = Some(target);
    }

    // Bridge spans both centers and keeps the wider of the two widths.
    fn morph(&mut self, target: Rect) {
        let now = self.clock.now();
        let from = self.frame.value();
        let config = &self.config;
        let (stretch, contract) = config.morph_phases();

        let mid_x = (from.mid_x() + target.mid_x()) / 2.0;
        let width = (target.mid_x() - from.mid_x()).abs() + from.width.max(target.width);
        let bridge = Rect::new(
            mid_x - width / 2.0,
            target.y,
            width,
            target.height * config.bridge_height_factor,
        );
        let radius = config.corner_radius;
        let bridge_radius = radius * config.bridge_radius_factor;

        let direction = if target.mid_x() > from.mid_x() { 1.0 } else { -1.0 };
        let swing = Timing::curve(config.morph_duration, Easing::EaseInOut);
        let rotation = direction * config.gradient_rotation;

        self.frame.animate(
            now,
            [Segment::new(bridge, stretch), Segment::new(target, contract)],
            None,
        );
        self.corner_radius.animate(
            now,
            [
                Segment::new(bridge_radius, stretch),
                Segment::new(radius, contract),
            ],
            None,
        );
        self.gradient_rotation.animate(
            now,
            [Segment::new(rotation, swing), Segment::new(0.0, swing)],
            None,
        );
        self.morph_end = Some(now + stretch.duration() + contract.duration());
    }
}

impl std::fmt::Debug for LensTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LensTracker")
            .field("shown", &self.shown)
            .field("last_selected_index", &self.last_selected_index)
            .field("frame", &self.frame.value())
            .field("morphing", &self.is_morphing())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lucent_ui::ManualClock;

    use super::*;

    fn table() -> Vec<TabFrame> {
        (0..4)
            .map(|i| TabFrame {
                frame: Rect::new(i as f32 * 90.0, 0.0, 90.0, 49.0),
                content_width: 40.0,
            })
            .collect()
    }

    fn lens() -> (Arc<ManualClock>, LensTracker) {
        let clock = ManualClock::shared();
        let lens = LensTracker::new(LensConfig::default(), clock.clone());
        (clock, lens)
    }

    fn step(clock: &ManualClock, lens: &mut LensTracker, millis: u64) {
        clock.advance(Duration::from_millis(millis));
        lens.tick();
    }

    #[test]
    fn target_frame_centers_on_tab() {
        let config = LensConfig::default();
        let frame = config.target_frame(Rect::new(180.0, 0.0, 90.0, 49.0), 40.0);
        assert_eq!(frame, Rect::new(189.0, 1.0, 72.0, 36.0));
    }

    #[test]
    fn first_show_snaps_and_fades_in() {
        let (clock, mut lens) = lens();
        let table = table();
        lens.show_at(2, &table);
        assert!(lens.is_shown());
        assert_eq!(lens.current_frame(), Rect::new(189.0, 1.0, 72.0, 36.0));
        assert_eq!(lens.opacity(), 0.0);
        step(&clock, &mut lens, 200);
        assert_eq!(lens.opacity(), 1.0);
        assert_eq!(lens.last_selected_index(), Some(2));
    }

    #[test]
    fn missing_index_is_skipped() {
        let (_clock, mut lens) = lens();
        let table = table();
        lens.show_at(1, &table);
        let before = lens.current_frame();
        lens.move_to(9, Some(1), true, &table);
        lens.update_layout(7, &table);
        assert_eq!(lens.current_frame(), before);
        assert_eq!(lens.last_selected_index(), Some(1));
    }

    #[test]
    fn morph_passes_through_bridge() {
        let (clock, mut lens) = lens();
        let table = table();
        lens.show_at(2, &table);
        lens.move_to(0, Some(2), true, &table);
        assert!(lens.is_morphing());

        step(&clock, &mut lens, 100);
        assert!(lens.render(RenderCapabilities::default()).1.gradient_rotation < 0.0);

        step(&clock, &mut lens, 40);
        let bridge = lens.current_frame();
        let expected = Rect::new(9.0, 1.0, 252.0, 36.0 * 0.92);
        assert!(bridge.approx_eq(&expected, 1e-4), "{bridge:?}");
        assert!((lens.corner_radius() - 18.0 * 0.85).abs() < 1e-4);

        step(&clock, &mut lens, 210);
        assert_eq!(lens.current_frame(), Rect::new(9.0, 1.0, 72.0, 36.0));
        assert_eq!(lens.corner_radius(), 18.0);
        assert!(!lens.is_morphing());
        let peak = lens.render(RenderCapabilities::default()).1.gradient_rotation;
        assert!((peak + FRAC_PI_6).abs() < 1e-5, "{peak}");

        step(&clock, &mut lens, 350);
        assert_eq!(lens.render(RenderCapabilities::default()).1.gradient_rotation, 0.0);
    }

    #[test]
    fn morph_settles_transform_after_selection_pulse() {
        let (clock, mut lens) = lens();
        let table = table();
        lens.show_at(0, &table);
        lens.move_to(3, Some(0), true, &table);
        lens.selection_pulse();
        step(&clock, &mut lens, 80);
        assert!((lens.transform().scale.x - 0.96).abs() < 1e-5);
        step(&clock, &mut lens, 270);
        step(&clock, &mut lens, 250);
        assert!(lens.transform().is_identity(1e-6));
        // The gradient swings back for a second morph duration.
        assert!(lens.tick());
        step(&clock, &mut lens, 150);
        assert!(!lens.tick());
    }

    #[test]
    fn reselect_bounces_in_place() {
        let (clock, mut lens) = lens();
        let table = table();
        lens.show_at(0, &table);
        lens.move_to(0, Some(0), true, &table);
        assert!(!lens.is_morphing());
        step(&clock, &mut lens, 100);
        assert!((lens.transform().scale.x - 1.08).abs() < 1e-5);
        assert_eq!(lens.current_frame().x, 9.0);
    }

    #[test]
    fn relayout_snaps_to_new_target() {
        let (_clock, mut lens) = lens();
        let mut table = table();
        lens.update_layout(1, &table);
        assert_eq!(lens.current_frame().x, 99.0);
        for (i, tab) in table.iter_mut().enumerate() {
            tab.frame = Rect::new(i as f32 * 100.0, 0.0, 100.0, 49.0);
        }
        lens.update_layout(1, &table);
        assert_eq!(lens.current_frame().x, 114.0);
    }

    #[test]
    fn reduced_transparency_drops_decorations() {
        let (_clock, mut lens) = lens();
        lens.show_at(0, &table());
        let (panel, decoration) = lens.render(RenderCapabilities {
            reduce_transparency: true,
        });
        assert_eq!(panel.blur, None);
        assert_eq!(panel.corner_radius, 18.0);
        assert!(!decoration.iridescent && !decoration.specular_highlight);
    }
}

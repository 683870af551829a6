//! Translucent glass panels and the surface that owns one.
//!
//! ## Usage
//!
//! A [`GlassSurface`] pairs a backdrop description with a
//! [`SurfaceAnimator`]. Each frame the host calls [`GlassSurface::tick`] and
//! hands [`GlassSurface::render`]'s [`GlassPanel`] to its
//! [`GlassRenderer`].
use derive_setters::Setters;
use glam::Vec2;
use lucent_ui::{Color, Rect, SharedClock, SurfaceTransform};

use crate::{
    animation_config::AnimationConfig, shape_def::GlassShape, surface_animator::SurfaceAnimator,
};

/// Default visual parameters of glass surfaces.
pub struct GlassSurfaceDefaults;

impl GlassSurfaceDefaults {
    /// Backdrop blur radius.
    pub const BLUR_RADIUS: f32 = 10.0;
    /// Backdrop tint.
    pub const TINT: Color = Color::white(1.0, 0.3);
    /// Highlight overlay color at full opacity.
    pub const HIGHLIGHT: Color = Color::white(1.0, 0.2);
    /// Hairline border.
    pub const BORDER: GlassBorder = GlassBorder {
        color: Color::white(1.0, 0.3),
        width: 0.5,
    };
    /// Soft drop shadow.
    pub const SHADOW: GlassShadow = GlassShadow {
        color: Color::BLACK,
        offset: Vec2::new(0.0, 2.0),
        radius: 8.0,
        opacity: 0.15,
    };
}

/// Border stroked along the panel outline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlassBorder {
    /// Stroke color.
    pub color: Color,
    /// Stroke width.
    pub width: f32,
}

/// Drop shadow cast by the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlassShadow {
    /// Shadow color.
    pub color: Color,
    /// Offset from the panel.
    pub offset: Vec2,
    /// Blur radius.
    pub radius: f32,
    /// Shadow opacity.
    pub opacity: f32,
}

/// Backdrop blur applied behind the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurStyle {
    /// Gaussian radius.
    pub radius: f32,
}

/// What the host renderer can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderCapabilities {
    /// Backdrop blur is unavailable or the user asked for reduced
    /// transparency. Panels are drawn with a flat tint.
    pub reduce_transparency: bool,
}

/// Arguments describing a glass surface's backdrop.
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlassSurfaceArgs {
    /// Outline shape.
    pub shape: GlassShape,
    /// Backdrop tint fill.
    pub tint_color: Color,
    /// Highlight overlay color.
    pub highlight_color: Color,
    /// Whether the backdrop is blurred.
    pub blur_enabled: bool,
    /// Blur radius when enabled.
    pub blur_radius: f32,
    /// Whether the drop shadow is drawn.
    pub shadow_enabled: bool,
    /// Shadow drawn when enabled.
    pub shadow: GlassShadow,
    /// Optional border.
    #[setters(strip_option)]
    pub border: Option<GlassBorder>,
    /// Press and pulse animation parameters.
    pub animation_config: AnimationConfig,
}

impl Default for GlassSurfaceArgs {
    fn default() -> Self {
        Self {
            shape: GlassShape::Circle,
            tint_color: GlassSurfaceDefaults::TINT,
            highlight_color: GlassSurfaceDefaults::HIGHLIGHT,
            blur_enabled: true,
            blur_radius: GlassSurfaceDefaults::BLUR_RADIUS,
            shadow_enabled: true,
            shadow: GlassSurfaceDefaults::SHADOW,
            border: Some(GlassSurfaceDefaults::BORDER),
            animation_config: AnimationConfig::DEFAULT,
        }
    }
}

/// Everything a renderer needs to draw one glass panel.
#[derive(Debug, Clone, PartialEq)]
pub struct GlassPanel {
    /// Untransformed frame in the parent's coordinates.
    pub frame: Rect,
    /// Resolved corner radius.
    pub corner_radius: f32,
    /// Tint fill.
    pub tint: Color,
    /// Backdrop blur, omitted when unsupported or disabled.
    pub blur: Option<BlurStyle>,
    /// Border stroke.
    pub border: Option<GlassBorder>,
    /// Drop shadow.
    pub shadow: Option<GlassShadow>,
    /// Highlight overlay color.
    pub highlight: Color,
    /// Highlight overlay opacity.
    pub highlight_opacity: f32,
    /// Transform about the frame center.
    pub transform: SurfaceTransform,
    /// Whole-panel opacity.
    pub opacity: f32,
}

impl GlassPanel {
    /// Builds a panel from backdrop arguments.
    pub fn from_args(
        args: &GlassSurfaceArgs,
        frame: Rect,
        corner_radius: f32,
        capabilities: RenderCapabilities,
    ) -> Self {
        let blur = (args.blur_enabled && !capabilities.reduce_transparency).then_some(BlurStyle {
            radius: args.blur_radius,
        });
        Self {
            frame,
            corner_radius,
            tint: args.tint_color,
            blur,
            border: args.border,
            shadow: args.shadow_enabled.then_some(args.shadow),
            highlight: args.highlight_color,
            highlight_opacity: 0.0,
            transform: SurfaceTransform::IDENTITY,
            opacity: 1.0,
        }
    }

    /// Multiplies the panel opacity by `opacity`.
    pub fn apply_opacity(&mut self, opacity: f32) {
        self.opacity *= opacity.clamp(0.0, 1.0);
    }
}

/// Host-side drawing backend.
pub trait GlassRenderer {
    /// What the backend supports.
    fn capabilities(&self) -> RenderCapabilities {
        RenderCapabilities::default()
    }

    /// Draws one panel.
    fn draw_panel(&mut self, panel: &GlassPanel);
}

/// A glass backdrop with its own press and pulse animations.
#[derive(Debug)]
pub struct GlassSurface {
    args: GlassSurfaceArgs,
    frame: Rect,
    animator: SurfaceAnimator,
    needs_redraw: bool,
}

impl GlassSurface {
    /// Creates a surface with an empty frame.
    pub fn new(args: GlassSurfaceArgs, clock: SharedClock) -> Self {
        let animator = SurfaceAnimator::with_config(clock, args.animation_config);
        Self {
            args,
            frame: Rect::ZERO,
            animator,
            needs_redraw: true,
        }
    }

    /// Backdrop arguments.
    pub fn args(&self) -> &GlassSurfaceArgs {
        &self.args
    }

    /// Frame in the parent's coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Lays the surface out.
    pub fn set_frame(&mut self, frame: Rect) {
        if self.frame != frame {
            self.frame = frame;
            self.animator.set_size(frame.size());
            self.needs_redraw = true;
        }
    }

    /// The surface's animator.
    pub fn animator(&self) -> &SurfaceAnimator {
        &self.animator
    }

    /// Mutable access to the surface's animator.
    pub fn animator_mut(&mut self) -> &mut SurfaceAnimator {
        &mut self.animator
    }

    /// Sets the outline shape.
    pub fn set_shape(&mut self, shape: GlassShape) {
        self.args.shape = shape;
        self.needs_redraw = true;
    }

    /// Sets the backdrop tint.
    pub fn set_tint_color(&mut self, color: Color) {
        self.args.tint_color = color;
        self.needs_redraw = true;
    }

    /// Sets the highlight overlay color.
    pub fn set_highlight_color(&mut self, color: Color) {
        self.args.highlight_color = color;
        self.needs_redraw = true;
    }

    /// Enables or disables the backdrop blur.
    pub fn set_blur_enabled(&mut self, enabled: bool) {
        self.args.blur_enabled = enabled;
        self.needs_redraw = true;
    }

    /// Sets the blur radius.
    pub fn set_blur_radius(&mut self, radius: f32) {
        self.args.blur_radius = radius.max(0.0);
        self.needs_redraw = true;
    }

    /// Enables or disables the drop shadow.
    pub fn set_shadow_enabled(&mut self, enabled: bool) {
        self.args.shadow_enabled = enabled;
        self.needs_redraw = true;
    }

    /// Sets the border.
    pub fn set_border(&mut self, border: Option<GlassBorder>) {
        self.args.border = border;
        self.needs_redraw = true;
    }

    /// Swaps the animation config without touching animations in flight.
    pub fn set_animation_config(&mut self, config: AnimationConfig) {
        self.args.animation_config = config;
        self.animator.set_config(config);
    }

    /// Returns whether the backdrop changed since the last call and clears
    /// the flag.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Advances animations. Returns `true` while anything is animating.
    pub fn tick(&mut self) -> bool {
        self.animator.tick()
    }

    /// Describes the surface at its current animation state.
    pub fn render(&self, capabilities: RenderCapabilities) -> GlassPanel {
        let corner_radius = self.args.shape.corner_radius(self.frame.size());
        let mut panel = GlassPanel::from_args(&self.args, self.frame, corner_radius, capabilities);
        panel.highlight_opacity = self.animator.highlight_opacity();
        panel.transform = self.animator.transform();
        panel
    }

    /// Renders and draws the surface.
    pub fn draw<R: GlassRenderer + ?Sized>(&self, renderer: &mut R) {
        let panel = self.render(renderer.capabilities());
        renderer.draw_panel(&panel);
    }
}

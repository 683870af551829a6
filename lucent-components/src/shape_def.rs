//! Outline shapes of glass surfaces.

use lucent_ui::Size;

/// The outline of a glass surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GlassShape {
    /// Radius derived from `min(width, height) / 2`.
    #[default]
    Circle,
    /// Fixed corner radius regardless of size.
    RoundedRect {
        /// Corner radius.
        radius: f32,
    },
    /// Pill shape. Resolves like [`GlassShape::Circle`]; on non-square
    /// surfaces that is `height / 2` for wide ones and `width / 2` for tall
    /// ones.
    Capsule,
}

impl GlassShape {
    /// A rounded rectangle.
    pub const fn rounded(radius: f32) -> Self {
        Self::RoundedRect { radius }
    }

    /// Resolves the corner radius for `size`. Call on every layout; the result
    /// depends on the size.
    pub fn corner_radius(self, size: Size) -> f32 {
        match self {
            GlassShape::Circle | GlassShape::Capsule => size.min_side().max(0.0) / 2.0,
            GlassShape::RoundedRect { radius } => radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_and_capsule_use_shorter_side() {
        let size = Size::new(51.0, 31.0);
        assert_eq!(GlassShape::Circle.corner_radius(size), 15.5);
        assert_eq!(GlassShape::Capsule.corner_radius(size), 15.5);
        assert_eq!(GlassShape::Capsule.corner_radius(Size::new(10.0, 40.0)), 5.0);
    }

    #[test]
    fn rounded_rect_ignores_size() {
        let shape = GlassShape::rounded(12.0);
        assert_eq!(shape.corner_radius(Size::new(200.0, 44.0)), 12.0);
        assert_eq!(shape.corner_radius(Size::ZERO), 12.0);
    }
}

//! Scale + translation transforms applied to a whole surface.

use glam::{Affine2, Vec2};

/// A 2D surface transform: scale about the surface center, then translate.
///
/// The translation is expressed in the scaled space, matching
/// `scale(s) * translate(t)`:
///
/// ```
/// use glam::Vec2;
/// use lucent_ui::SurfaceTransform;
///
/// let t = SurfaceTransform::uniform(0.5).translated(Vec2::new(10.0, 0.0));
/// let p = t.to_affine().transform_point2(Vec2::ZERO);
/// assert_eq!(p, Vec2::new(5.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceTransform {
    /// Per-axis scale factors.
    pub scale: Vec2,
    /// Translation applied after scaling.
    pub translation: Vec2,
}

impl SurfaceTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale: Vec2::ONE,
        translation: Vec2::ZERO,
    };

    /// A uniform scale.
    pub fn uniform(scale: f32) -> Self {
        Self::scaled(Vec2::splat(scale))
    }

    /// A per-axis scale.
    pub fn scaled(scale: Vec2) -> Self {
        Self {
            scale,
            translation: Vec2::ZERO,
        }
    }

    /// Returns this transform with a translation composed on top.
    pub fn translated(self, translation: Vec2) -> Self {
        Self {
            translation: self.translation + translation,
            ..self
        }
    }

    /// Returns `true` if the transform is within `epsilon` of identity.
    pub fn is_identity(&self, epsilon: f32) -> bool {
        self.scale.abs_diff_eq(Vec2::ONE, epsilon)
            && self.translation.abs_diff_eq(Vec2::ZERO, epsilon)
    }

    /// Converts to an affine matrix about the surface center.
    pub fn to_affine(&self) -> Affine2 {
        Affine2::from_scale(self.scale) * Affine2::from_translation(self.translation)
    }
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_maps_points_to_themselves() {
        let p = Vec2::new(12.0, -4.0);
        assert_eq!(SurfaceTransform::IDENTITY.to_affine().transform_point2(p), p);
        assert!(SurfaceTransform::default().is_identity(0.0));
    }

    #[test]
    fn translation_is_in_scaled_space() {
        let t = SurfaceTransform::uniform(0.92).translated(Vec2::new(1.0, 2.0));
        let origin = t.to_affine().transform_point2(Vec2::ZERO);
        assert!((origin.x - 0.92).abs() < 1e-6);
        assert!((origin.y - 1.84).abs() < 1e-6);
    }
}

//! Linear RGBA colors used for glass tints, borders and track fills.

use bytemuck::{Pod, Zeroable};

/// A color in the linear sRGB color space with an alpha component.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Color` from three `f32` values (red, green, blue).
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a gray with the given white level and alpha.
    #[inline]
    pub const fn white(level: f32, a: f32) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
            a,
        }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates an opaque color from a packed `0xRRGGBB` value.
    ///
    /// ```
    /// use lucent_ui::Color;
    ///
    /// let green = Color::from_hex(0x42d451);
    /// assert_eq!(green, Color::from_rgba_u8(0x42, 0xd4, 0x51, 0xff));
    /// ```
    #[inline]
    pub fn from_hex(rgb: u32) -> Self {
        Self::from_rgba_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255)
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Converts the color to an array of `[f32; 4]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linearly interpolates every channel from `self` to `other`.
    ///
    /// `progress` is clamped to `[0.0, 1.0]` first, so the result always lies
    /// between the two endpoints and `progress <= 0` returns `self` exactly.
    pub fn interpolate(self, other: Color, progress: f32) -> Color {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFF: Color = Color::new(0.88, 0.88, 0.88, 1.0);
    const ON: Color = Color::new(0.26, 0.83, 0.32, 1.0);

    #[test]
    fn interpolate_hits_endpoints() {
        assert_eq!(OFF.interpolate(ON, 0.0), OFF);
        assert_eq!(OFF.interpolate(ON, 1.0), ON);
    }

    #[test]
    fn interpolate_clamps_progress() {
        assert_eq!(OFF.interpolate(ON, -3.0), OFF);
        assert_eq!(OFF.interpolate(ON, 7.5), ON);
        assert_eq!(OFF.interpolate(ON, f32::NAN), OFF);
    }

    #[test]
    fn interpolate_is_monotonic_per_channel() {
        let mut previous = OFF;
        for step in 1..=20 {
            let current = OFF.interpolate(ON, step as f32 / 20.0);
            // r, g, b all move towards ON monotonically
            assert!(current.r <= previous.r);
            assert!(current.g <= previous.g);
            assert!(current.b <= previous.b);
            assert!(current.a >= previous.a - f32::EPSILON);
            previous = current;
        }
    }

    #[test]
    fn hex_roundtrip() {
        let c = Color::from_hex(0xe0e0e0);
        assert!((c.r - 224.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }
}

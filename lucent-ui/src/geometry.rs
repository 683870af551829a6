//! Logical point geometry for surfaces, tab frames and the lens.
//!
//! Coordinates are `f32` logical points with the origin at the top-left
//! corner, x growing to the right and y growing downward. Fractional values
//! are kept as-is because animated frames interpolate between layouts.
//!
//! ```
//! use lucent_ui::{Point, Rect, Size};
//!
//! let tab = Rect::new(180.0, 0.0, 90.0, 49.0);
//! assert_eq!(tab.mid_x(), 225.0);
//! assert_eq!(tab.center(), Point::new(225.0, 24.5));
//! assert_eq!(tab.size(), Size::new(90.0, 49.0));
//! ```

use std::ops::{Add, Sub};

use glam::Vec2;

/// A 2D position in logical points.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by the given offsets.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f32 {
        Vec2::from(self).distance(Vec2::from(other))
    }
}

impl From<Point> for Vec2 {
    fn from(point: Point) -> Self {
        Vec2::new(point.x, point.y)
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl Add<Vec2> for Point {
    type Output = Point;

    fn add(self, rhs: Vec2) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Vec2;

    fn sub(self, rhs: Point) -> Self::Output {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size in logical points.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// A zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a square size.
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// The smaller of the two dimensions.
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    /// Returns `true` when either dimension is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<Size> for Vec2 {
    fn from(size: Size) -> Self {
        Vec2::new(size.width, size.height)
    }
}

/// An axis-aligned rectangle in logical points.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The x-coordinate of the top-left corner.
    pub x: f32,
    /// The y-coordinate of the top-left corner.
    pub y: f32,
    /// The width of the rectangle.
    pub width: f32,
    /// The height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// A zero rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from its origin and size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Creates a rectangle of `size` whose center is `center`.
    pub fn from_center_size(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal center.
    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Vertical center.
    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Returns `true` if `point` lies inside the half-open rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.max_x() && point.y >= self.y && point.y < self.max_y()
    }

    /// Returns this rectangle grown by `dx` on the left and right and `dy` on
    /// the top and bottom. Negative values shrink it.
    pub fn outset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(
            self.x - dx,
            self.y - dy,
            self.width + dx * 2.0,
            self.height + dy * 2.0,
        )
    }

    /// Returns `true` if every edge is within `epsilon` of `other`'s.
    pub fn approx_eq(&self, other: &Rect, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.width - other.width).abs() <= epsilon
            && (self.height - other.height).abs() <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.max_x(), 40.0);
        assert_eq!(rect.max_y(), 60.0);
        assert_eq!(rect.mid_x(), 25.0);
        assert_eq!(rect.mid_y(), 40.0);
    }

    #[test]
    fn test_rect_from_center() {
        let rect = Rect::from_center_size(Point::new(225.0, 19.0), Size::new(72.0, 36.0));
        assert_eq!(rect, Rect::new(189.0, 1.0, 72.0, 36.0));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(0.0, 0.0, 90.0, 49.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(89.9, 48.9)));
        assert!(!rect.contains(Point::new(90.0, 10.0)));
        assert!(!rect.contains(Point::new(-0.1, 10.0)));
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(30.0, 10.0);
        let b = Point::new(20.0, 25.0);
        assert_eq!(a - b, Vec2::new(10.0, -15.0));
        assert_eq!(b + Vec2::new(10.0, -15.0), a);
        assert_eq!(Point::ZERO.distance_to(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_size_min_side() {
        assert_eq!(Size::new(51.0, 31.0).min_side(), 31.0);
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(!Size::square(27.0).is_empty());
    }
}

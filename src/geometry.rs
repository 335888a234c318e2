//! Points, rectangles and the two predicates the tree is built on.
//!
//! Both edges of a [`Bounds`] are inclusive. A point sitting exactly on the
//! line shared by two sibling quadrants is therefore contained by both; the
//! tree resolves that tie at insertion time (see [`crate::BoundaryPolicy`]).

use std::fmt;

/// A 2D point. Plain value, no identity beyond its coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate. Smaller values are "top".
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle with inclusive `min` and `max` corners.
///
/// `min.x <= max.x` and `min.y <= max.y` is assumed, not enforced. A rectangle
/// with `min > max` on some axis is empty: it contains no point and only
/// intersects what the separating-axis test lets through.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Inclusive minimum (top-left) corner.
    pub min: Point,
    /// Inclusive maximum (bottom-right) corner.
    pub max: Point,
}

impl Bounds {
    /// Creates a rectangle from its two corners.
    #[inline]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates a rectangle from raw coordinates in `(min_x, min_y, max_x, max_y)` order.
    #[inline]
    pub const fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Returns true if `point` lies inside or on the edge of the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.y >= self.min.y
            && point.x <= self.max.x
            && point.y <= self.max.y
    }

    /// Returns true if the two rectangles overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.max.x < self.min.x
            || other.max.y < self.min.y
            || other.min.x > self.max.x
            || other.min.y > self.max.y)
    }

    /// Midpoint of the rectangle.
    ///
    /// Halves before adding so that `[-f64::MAX, f64::MAX]` stays finite.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.min.x * 0.5 + self.max.x * 0.5,
            self.min.y * 0.5 + self.max.y * 0.5,
        )
    }

    /// The four quadrants around [`center`](Self::center), in
    /// top-left, top-right, bottom-left, bottom-right order.
    ///
    /// Their union is exactly `self`; neighbours share their common edge.
    pub fn quadrants(&self) -> [Self; 4] {
        let c = self.center();
        let (min, max) = (self.min, self.max);
        [
            Self::from_coords(min.x, min.y, c.x, c.y),
            Self::from_coords(c.x, min.y, max.x, c.y),
            Self::from_coords(min.x, c.y, c.x, max.y),
            Self::from_coords(c.x, c.y, max.x, max.y),
        ]
    }

    /// True if splitting at [`center`](Self::center) shrinks the rectangle
    /// on at least one axis.
    ///
    /// Fails once an axis is down to adjacent floats, where the center rounds
    /// onto `min` or `max`. A node holding coincident points ends up there.
    pub fn is_divisible(&self) -> bool {
        let c = self.center();
        (self.min.x < c.x && c.x < self.max.x) || (self.min.y < c.y && c.y < self.max.y)
    }

    /// True when no coordinate is NaN and `min <= max` on both axes.
    ///
    /// Informational only; the tree never rejects a rectangle for failing it.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.min, self.max)
    }
}

//! Geometry primitives: [`Point`] and the Euclidean distance helpers used for
//! arc weights and search heuristics.

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Scale both coordinates by `factor`, truncating toward zero.
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(
            (f64::from(self.x) * factor) as i32,
            (f64::from(self.y) * factor) as i32,
        )
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        euclidean(self, other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Distances
// ---------------------------------------------------------------------------

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    dx.hypot(dy)
}

/// Euclidean distance rounded to the nearest integer.
///
/// This is the unit used for arc weights and heuristics, so both sides of a
/// cost comparison are measured the same way.
#[inline]
pub fn euclidean_rounded(a: Point, b: Point) -> u32 {
    euclidean(a, b).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_display() {
        assert_eq!(Point::new(-3, 7).to_string(), "(-3, 7)");
    }

    #[test]
    fn scaled_truncates() {
        // 2 / 1.1 ≈ 1.818
        let p = Point::new(10, 3).scaled(2.0 / 1.1);
        assert_eq!(p, Point::new(18, 5));
    }

    #[test]
    fn euclidean_pythagorean_triple() {
        assert!((euclidean(Point::ZERO, Point::new(3, 4)) - 5.0).abs() < 1e-9);
        assert!((Point::new(3, 4).distance(Point::ZERO) - 5.0).abs() < 1e-9);
        assert_eq!(euclidean_rounded(Point::new(1, 1), Point::new(4, 5)), 5);
    }

    #[test]
    fn euclidean_rounds_to_nearest() {
        // sqrt(2) ≈ 1.414, sqrt(8) ≈ 2.828
        assert_eq!(euclidean_rounded(Point::ZERO, Point::new(1, 1)), 1);
        assert_eq!(euclidean_rounded(Point::ZERO, Point::new(2, 2)), 3);
        assert_eq!(euclidean_rounded(Point::new(7, 7), Point::new(7, 7)), 0);
    }
}

//! Basic planar types and tolerances: points, implicit lines, side tests.
//!
//! - `EPS`: shared tolerance for equality, classification, and determinants.
//! - `Point`: plain 2D coordinate with tolerance-based equality.
//! - `Line`: implicit line `Ax + By + C = 0` through two points.
//!
//! Code cross-refs: `hull::convex_hull`, `polygon::ConvexPolygon`

use nalgebra::{matrix, Matrix2, Vector2};

use super::error::GeomError;

/// Numerical tolerance used by all geometric predicates.
///
/// Coordinate differences, classification values, and determinants below
/// this magnitude are treated as zero. Value tuned for coordinate scales of
/// roughly O(1)..O(100); callers with wildly different scales should rescale.
pub const EPS: f64 = 1e-4;

/// Immutable 2D coordinate.
///
/// Equality is tolerance-based (`eq_eps`), never exact. A constructed point
/// always holds meaningful coordinates: operations that can fail to produce
/// a point report `GeomError` instead of encoding the failure in the
/// coordinate values, and `is_finite` screens out caller-supplied NaN or
/// infinity before they reach any predicate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Tolerance equality: both coordinate differences below `EPS`.
    #[inline]
    pub fn eq_eps(self, other: Point) -> bool {
        (self.x - other.x).abs() < EPS && (self.y - other.y).abs() < EPS
    }

    /// Squared distance to `other`.
    #[inline]
    pub fn dist2(self, other: Point) -> f64 {
        (self - other).norm_squared()
    }

    #[inline]
    pub fn coords(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Vector2<f64>;
    #[inline]
    fn sub(self, rhs: Point) -> Vector2<f64> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add<Vector2<f64>> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vector2<f64>) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Signed parallelogram area of `(p1 - base, p2 - base)`.
///
/// Positive when `p1 -> p2` turns counterclockwise around `base`.
#[inline]
pub fn cross(p1: Point, p2: Point, base: Point) -> f64 {
    Matrix2::from_columns(&[p1 - base, p2 - base]).determinant()
}

/// Half-plane classification relative to a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
    On,
}

/// Implicit line `Ax + By + C = 0` through two points.
///
/// Immutable once constructed. Coincident input points yield the zero line
/// `0 = 0`: it classifies every point as `On`, and intersecting it fails
/// with `ParallelLines` (zero determinant).
#[derive(Clone, Copy, Debug)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Line through `p` and `q`.
    ///
    /// Fails with `InvalidPoint` when either input has non-finite
    /// coordinates.
    pub fn from_points(p: Point, q: Point) -> Result<Self, GeomError> {
        if !p.is_finite() || !q.is_finite() {
            return Err(GeomError::InvalidPoint);
        }
        // A = y2 - y1, B = x1 - x2, C = x2*y1 - x1*y2
        Ok(Self {
            a: q.y - p.y,
            b: p.x - q.x,
            c: q.x * p.y - p.x * q.y,
        })
    }

    /// Half-plane test: the sign of `A*x + B*y + C` against `EPS`.
    pub fn classify(&self, p: Point) -> Side {
        let val = self.a * p.x + self.b * p.y + self.c;
        if val < -EPS {
            Side::Below
        } else if val > EPS {
            Side::Above
        } else {
            Side::On
        }
    }

    /// Crossing point with `other` via Cramer's rule.
    ///
    /// The 2x2 determinant is checked against `EPS` before dividing;
    /// parallel and coincident lines fail with `ParallelLines` instead of
    /// producing a non-finite point.
    pub fn intersection(&self, other: &Line) -> Result<Point, GeomError> {
        let m = matrix![self.a, self.b; other.a, other.b];
        if m.determinant().abs() <= EPS {
            return Err(GeomError::ParallelLines);
        }
        let inv = m.try_inverse().ok_or(GeomError::ParallelLines)?;
        let p = inv * Vector2::new(-self.c, -other.c);
        Ok(Point::from(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_eps_tolerates_small_differences() {
        let p = Point::new(1.0, 2.0);
        assert!(p.eq_eps(Point::new(1.0 + 0.5 * EPS, 2.0 - 0.5 * EPS)));
        assert!(!p.eq_eps(Point::new(1.0 + 2.0 * EPS, 2.0)));
        assert!(!p.eq_eps(Point::new(1.0, 2.0 - 2.0 * EPS)));
    }

    #[test]
    fn classify_splits_the_plane() {
        // x-axis, oriented left to right.
        let line = Line::from_points(Point::new(0.0, 0.0), Point::new(1.0, 0.0)).unwrap();
        assert_eq!(line.classify(Point::new(0.5, 1.0)), Side::Above);
        assert_eq!(line.classify(Point::new(0.5, -1.0)), Side::Below);
        assert_eq!(line.classify(Point::new(42.0, 0.0)), Side::On);
        assert_eq!(line.classify(Point::new(0.0, 0.5 * EPS)), Side::On);
    }

    #[test]
    fn intersection_of_crossing_lines() {
        let d1 = Line::from_points(Point::new(0.0, 0.0), Point::new(1.0, 1.0)).unwrap();
        let d2 = Line::from_points(Point::new(0.0, 2.0), Point::new(2.0, 0.0)).unwrap();
        let p = d1.intersection(&d2).unwrap();
        assert!(p.eq_eps(Point::new(1.0, 1.0)));
        // Same crossing regardless of operand order.
        let q = d2.intersection(&d1).unwrap();
        assert!(q.eq_eps(p));
    }

    #[test]
    fn parallel_lines_are_an_error() {
        let l1 = Line::from_points(Point::new(0.0, 0.0), Point::new(1.0, 0.0)).unwrap();
        let l2 = Line::from_points(Point::new(0.0, 1.0), Point::new(1.0, 1.0)).unwrap();
        assert!(matches!(l1.intersection(&l2), Err(GeomError::ParallelLines)));
    }

    #[test]
    fn zero_line_from_coincident_points() {
        let zero = Line::from_points(Point::new(3.0, 3.0), Point::new(3.0, 3.0)).unwrap();
        assert_eq!(zero.classify(Point::new(-7.0, 11.0)), Side::On);
        let other = Line::from_points(Point::new(0.0, 0.0), Point::new(1.0, 1.0)).unwrap();
        assert!(matches!(zero.intersection(&other), Err(GeomError::ParallelLines)));
    }

    #[test]
    fn non_finite_points_rejected() {
        let bad = Point::new(f64::NAN, 0.0);
        assert!(!bad.is_finite());
        assert!(matches!(
            Line::from_points(bad, Point::new(1.0, 1.0)),
            Err(GeomError::InvalidPoint)
        ));
        assert!(matches!(
            Line::from_points(Point::new(0.0, 0.0), Point::new(f64::INFINITY, 0.0)),
            Err(GeomError::InvalidPoint)
        ));
    }
}

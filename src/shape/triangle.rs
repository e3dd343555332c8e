//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::Line;
use crate::utils::Interval;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Creates a triangle from an array of three points.
    #[inline]
    pub fn from_array(pts: [Point<Real>; 3]) -> Triangle {
        Triangle::new(pts[0], pts[1], pts[2])
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The edges `AB`, `BC` and `CA` of this triangle.
    #[inline]
    pub fn edges(&self) -> [Line; 3] {
        [
            Line::new(self.a, self.b),
            Line::new(self.b, self.c),
            Line::new(self.c, self.a),
        ]
    }

    /// The edge directions `B - A`, `C - B` and `A - C`.
    #[inline]
    pub fn edges_scaled_directions(&self) -> [Vector<Real>; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// The normal of this triangle scaled by twice its area.
    ///
    /// Points toward the side from which `a`, `b`, `c` appear counter-clockwise.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The unit normal of this triangle, or `None` if it is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<Vector<Real>> {
        self.scaled_normal().try_normalize(DEFAULT_EPSILON)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The barycenter of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Projects this triangle onto `axis`.
    #[inline]
    pub fn interval(&self, axis: &Vector<Real>) -> Interval {
        Interval::from_points(axis, &self.vertices())
    }
}

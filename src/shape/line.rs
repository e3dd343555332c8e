//! Definition of the line segment shape.

use crate::math::{Point, Real, Vector};

/// A line segment between two points.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Line {
    /// The first endpoint.
    pub start: Point<Real>,
    /// The second endpoint.
    pub end: Point<Real>,
}

impl Line {
    /// Creates a new segment from its endpoints.
    #[inline]
    pub fn new(start: Point<Real>, end: Point<Real>) -> Line {
        Line { start, end }
    }

    /// The direction of this segment scaled by its length.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.end - self.start
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The squared length of this segment.
    #[inline]
    pub fn length_squared(&self) -> Real {
        self.scaled_direction().norm_squared()
    }

    /// The point `start + (end - start) * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.start + self.scaled_direction() * t
    }

    /// The parameter in `[0, 1]` of the point of this segment closest to `pt`.
    ///
    /// A degenerate segment (both endpoints equal) returns `0`.
    pub fn closest_parameter(&self, pt: &Point<Real>) -> Real {
        let dir = self.scaled_direction();
        let len_sq = dir.norm_squared();

        if len_sq == 0.0 {
            return 0.0;
        }

        ((pt - self.start).dot(&dir) / len_sq).clamp(0.0, 1.0)
    }
}

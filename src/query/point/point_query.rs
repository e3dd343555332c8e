use crate::math::{Point, Real};

/// Description of the projection of a point on a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointProjection {
    /// Whether or not the point to project was inside of the shape.
    pub is_inside: bool,
    /// The projection result.
    pub point: Point<Real>,
}

impl PointProjection {
    /// Initializes a new `PointProjection`.
    pub fn new(is_inside: bool, point: Point<Real>) -> Self {
        PointProjection { is_inside, point }
    }
}

/// Trait of objects that can be tested for point inclusion and projection.
///
/// All points are expressed in world-space, like the shapes themselves.
pub trait PointQuery {
    /// Tests if the given point is inside of `self`.
    ///
    /// For planes, triangles, rays and segments this means lying on the shape, up
    /// to a small tolerance (see [`crate::utils::ON_SURFACE_TOLERANCE`]).
    fn contains_point(&self, pt: &Point<Real>) -> bool;

    /// Computes the point of `self` closest to `pt`.
    ///
    /// For solid boxes, a point inside of the box is its own closest point. A
    /// sphere always projects on its boundary.
    fn closest_point(&self, pt: &Point<Real>) -> Point<Real>;

    /// Projects a point on `self`, also reporting whether it was inside.
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        PointProjection::new(self.contains_point(pt), self.closest_point(pt))
    }

    /// Computes the distance between a point and `self`, zero if the point is inside.
    #[inline]
    fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        if self.contains_point(pt) {
            0.0
        } else {
            na::distance(&self.closest_point(pt), pt)
        }
    }
}

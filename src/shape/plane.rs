//! Infinite plane in Hesse normal form.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{ShapeError, Triangle};
use crate::utils;

/// An infinite plane given by its unit normal and its signed offset from the origin.
///
/// A point `p` lies on the plane iff. `normal.dot(p) == distance`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Plane {
    /// The unit normal of the plane.
    pub normal: Vector<Real>,
    /// The signed distance from the origin to the plane, along `normal`.
    pub distance: Real,
}

impl Plane {
    /// Creates a plane from a unit normal and a signed offset.
    #[inline]
    pub fn new(normal: Vector<Real>, distance: Real) -> Plane {
        Plane { normal, distance }
    }

    /// Creates a plane from any non-zero normal, normalizing it.
    ///
    /// The offset is expressed along the normalized normal.
    pub fn try_new(normal: Vector<Real>, distance: Real) -> Result<Plane, ShapeError> {
        let normal = normal
            .try_normalize(DEFAULT_EPSILON)
            .ok_or(ShapeError::ZeroNormal)?;
        Ok(Plane::new(normal, distance))
    }

    /// Creates the plane with the given normal passing through `point`.
    #[inline]
    pub fn from_point_and_normal(point: &Point<Real>, normal: Vector<Real>) -> Plane {
        Plane::new(normal, normal.dot(&point.coords))
    }

    /// The plane containing the given triangle, oriented by its counter-clockwise normal.
    pub fn try_from_triangle(triangle: &Triangle) -> Result<Plane, ShapeError> {
        let normal = triangle
            .normal()
            .ok_or(ShapeError::DegenerateTriangle)?;
        Ok(Plane::from_point_and_normal(&triangle.a, normal))
    }

    /// The plane equation evaluated at `pt`: its signed distance to this plane.
    ///
    /// Positive on the side the normal points to, negative on the other side.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.distance
    }

    /// A point of this plane: the projection of the origin onto it.
    #[inline]
    pub fn origin_projection(&self) -> Point<Real> {
        Point::from(self.normal * self.distance)
    }

    /// Are the normals of these two planes parallel (or anti-parallel)?
    #[inline]
    pub fn is_parallel_to(&self, other: &Plane) -> bool {
        utils::approx_zero(self.normal.cross(&other.normal).norm_squared())
    }
}

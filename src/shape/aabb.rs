//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};
use crate::shape::ShapeError;
use crate::utils::Interval;

/// An Axis-Aligned Bounding Box (AABB) stored in center/half-extents form.
///
/// The corners are not stored: [`Aabb::mins`] and [`Aabb::maxs`] derive them
/// from the center and the half-extents on demand.
///
/// # Example
///
/// ```
/// use sat3d::shape::Aabb;
/// use sat3d::na::{Point3, Vector3};
///
/// let aabb = Aabb::from_min_max(Point3::new(-1.0, 0.0, 2.0), Point3::new(1.0, 4.0, 5.0));
/// assert_eq!(aabb.center, Point3::new(0.0, 2.0, 3.5));
/// assert_eq!(aabb.half_extents, Vector3::new(1.0, 2.0, 1.5));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The center of the box.
    pub center: Point<Real>,
    /// The half-width of the box along each coordinate axis.
    pub half_extents: Vector<Real>,
}

impl Aabb {
    /// Creates a new AABB from its center and half-extents.
    ///
    /// Each half-extent must be positive or zero.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>) -> Aabb {
        Aabb {
            center,
            half_extents,
        }
    }

    /// Creates a new AABB, checking that no half-extent is negative.
    pub fn try_new(center: Point<Real>, half_extents: Vector<Real>) -> Result<Aabb, ShapeError> {
        check_half_extents(&half_extents)?;
        Ok(Aabb::new(center, half_extents))
    }

    /// Creates the AABB with the given corners.
    ///
    /// The corners must satisfy `mins <= maxs` componentwise.
    #[inline]
    pub fn from_min_max(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb {
            center: na::center(&mins, &maxs),
            half_extents: (maxs - mins) * 0.5,
        }
    }

    /// Creates the AABB with the given corners, checking that `mins <= maxs` componentwise.
    pub fn try_from_min_max(mins: Point<Real>, maxs: Point<Real>) -> Result<Aabb, ShapeError> {
        match (0..DIM).find(|i| mins[*i] > maxs[*i]) {
            Some(i) => Err(ShapeError::InvertedBounds(i)),
            None => Ok(Aabb::from_min_max(mins, maxs)),
        }
    }

    /// The AABB enclosing all the given points, or `None` if `pts` is empty.
    pub fn from_points(pts: &[Point<Real>]) -> Option<Aabb> {
        let (first, rest) = pts.split_first()?;
        let mut mins = *first;
        let mut maxs = *first;

        for pt in rest {
            mins = mins.inf(pt);
            maxs = maxs.sup(pt);
        }

        Some(Aabb::from_min_max(mins, maxs))
    }

    /// The corner with the smallest coordinates.
    #[inline]
    pub fn mins(&self) -> Point<Real> {
        let p1 = self.center + self.half_extents;
        let p2 = self.center - self.half_extents;
        p1.inf(&p2)
    }

    /// The corner with the largest coordinates.
    #[inline]
    pub fn maxs(&self) -> Point<Real> {
        let p1 = self.center + self.half_extents;
        let p2 = self.center - self.half_extents;
        p1.sup(&p2)
    }

    /// The full width of the box along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.half_extents * 2.0
    }

    /// The eight corners of this box.
    ///
    /// The `i`-th bit of a vertex index is set iff. the `i`-th coordinate of that
    /// vertex is the minimum one.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let mins = self.mins();
        let maxs = self.maxs();

        core::array::from_fn(|vid| {
            Point::new(
                if vid & 0b001 != 0 { mins.x } else { maxs.x },
                if vid & 0b010 != 0 { mins.y } else { maxs.y },
                if vid & 0b100 != 0 { mins.z } else { maxs.z },
            )
        })
    }

    /// Projects this box onto `axis`.
    #[inline]
    pub fn interval(&self, axis: &Vector<Real>) -> Interval {
        Interval::from_points(axis, &self.vertices())
    }
}

pub(crate) fn check_half_extents(half_extents: &Vector<Real>) -> Result<(), ShapeError> {
    match (0..DIM).find(|i| half_extents[*i] < 0.0) {
        Some(component) => Err(ShapeError::NegativeHalfExtents {
            component,
            value: half_extents[component],
        }),
        None => Ok(()),
    }
}

use crate::math::{Point, Real, DIM};
use crate::query::PointQuery;
use crate::shape::Obb;

impl PointQuery for Obb {
    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        obb_contains_point_with_tolerance(self, pt, 0.0)
    }

    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        let dpt = pt - self.center;
        let mut result = self.center;

        for i in 0..DIM {
            let axis = self.axis(i);
            let dist = dpt
                .dot(&axis)
                .clamp(-self.half_extents[i], self.half_extents[i]);
            result += axis * dist;
        }

        result
    }
}

/// Tests if `pt` lies inside of `obb` enlarged by `tolerance` along each of its axes.
///
/// Points computed to lie exactly on a face (e.g. by clipping against its
/// plane) may land slightly outside because of rounding, a small tolerance
/// keeps them.
#[inline]
pub fn obb_contains_point_with_tolerance(obb: &Obb, pt: &Point<Real>, tolerance: Real) -> bool {
    let dpt = pt - obb.center;
    (0..DIM).all(|i| dpt.dot(&obb.axis(i)).abs() <= obb.half_extents[i] + tolerance)
}

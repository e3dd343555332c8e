use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::Plane;
use crate::utils;

impl PointQuery for Plane {
    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        utils::on_surface_eq(self.normal.dot(&pt.coords), self.distance)
    }

    #[inline]
    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt - self.normal * self.signed_distance(pt)
    }
}

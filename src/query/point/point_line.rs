use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::Line;
use crate::utils;

impl PointQuery for Line {
    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        let closest = self.closest_point(pt);
        utils::on_surface_eq(na::distance(&closest, pt), 0.0)
    }

    #[inline]
    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.point_at(self.closest_parameter(pt))
    }
}

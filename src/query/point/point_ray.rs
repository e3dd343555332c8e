use crate::math::{Point, Real};
use crate::query::{PointQuery, Ray};
use crate::utils;

impl PointQuery for Ray {
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        // The origin itself has no direction but lies on the ray.
        match (pt - self.origin).try_normalize(0.0) {
            Some(dir) => utils::approx_eq(dir.dot(self.dir()), 1.0),
            None => true,
        }
    }

    #[inline]
    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        let t = (pt - self.origin).dot(self.dir()).max(0.0);
        self.point_at(t)
    }
}

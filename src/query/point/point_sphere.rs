use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::PointQuery;
use crate::shape::Sphere;

impl PointQuery for Sphere {
    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(pt, &self.center) < self.radius * self.radius
    }

    #[inline]
    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        // The center is equally close to every boundary point: pick +x.
        let dir = (pt - self.center)
            .try_normalize(DEFAULT_EPSILON)
            .unwrap_or_else(Vector::x);
        self.center + dir * self.radius
    }
}

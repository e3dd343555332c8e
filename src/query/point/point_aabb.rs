use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::Aabb;

impl PointQuery for Aabb {
    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        let mins = self.mins();
        let maxs = self.maxs();
        (0..3).all(|i| pt[i] >= mins[i] && pt[i] <= maxs[i])
    }

    #[inline]
    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt.sup(&self.mins()).inf(&self.maxs())
    }
}

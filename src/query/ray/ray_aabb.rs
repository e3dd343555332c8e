use crate::math::{Real, DEFAULT_EPSILON, DIM};
use crate::query::{Ray, RayCast};
use crate::shape::Aabb;
use crate::utils;

impl RayCast for Aabb {
    #[inline]
    fn cast_ray(&self, ray: &Ray) -> Option<Real> {
        ray_toi_with_aabb(self, ray)
    }
}

/// Computes the distance along `ray` to the boundary of an AABB, using the slab method.
///
/// Direction components that are zero are replaced by [`DEFAULT_EPSILON`] instead
/// of being handled as a special case, which pushes the corresponding slab
/// intersections toward infinity.
pub fn ray_toi_with_aabb(aabb: &Aabb, ray: &Ray) -> Option<Real> {
    let mins = aabb.mins();
    let maxs = aabb.maxs();
    let mut tmin = -Real::MAX;
    let mut tmax = Real::MAX;

    for i in 0..DIM {
        let dir_i = if utils::approx_zero(ray.dir()[i]) {
            DEFAULT_EPSILON
        } else {
            ray.dir()[i]
        };
        let t1 = (mins[i] - ray.origin[i]) / dir_i;
        let t2 = (maxs[i] - ray.origin[i]) / dir_i;

        tmin = tmin.max(t1.min(t2));
        tmax = tmax.min(t1.max(t2));
    }

    slab_result(tmin, tmax)
}

/// Turns the entry and exit parameters of the slab method into a hit distance.
#[inline]
pub(crate) fn slab_result(tmin: Real, tmax: Real) -> Option<Real> {
    if tmax < 0.0 || tmin > tmax {
        None
    } else if tmin < 0.0 {
        // The ray starts inside of the box.
        Some(tmax)
    } else {
        Some(tmin)
    }
}

use crate::math::{Real, Vector, DEFAULT_EPSILON, DIM};
use crate::query::{Ray, RayCast};
use crate::shape::Obb;
use crate::utils;

use super::slab_result;

impl RayCast for Obb {
    #[inline]
    fn cast_ray(&self, ray: &Ray) -> Option<Real> {
        ray_toi_with_obb(self, ray)
    }
}

/// Computes the distance along `ray` to the boundary of an oriented box.
///
/// The ray is expressed in the box frame by projecting it on the box axes, then
/// the slab method is applied. A ray parallel to a pair of faces and not lying
/// between them is rejected right away.
pub fn ray_toi_with_obb(obb: &Obb, ray: &Ray) -> Option<Real> {
    let rot = obb.rotation_matrix();
    let dcenter = obb.center - ray.origin;
    // Direction and center offset in the box frame.
    let f = rot.tr_mul(ray.dir());
    let e: Vector<Real> = rot.tr_mul(&dcenter);

    let mut tmin = -Real::MAX;
    let mut tmax = Real::MAX;

    for i in 0..DIM {
        let size = obb.half_extents[i];
        let mut f_i = f[i];

        if utils::approx_zero(f_i) {
            if -e[i] - size > 0.0 || -e[i] + size < 0.0 {
                return None;
            }

            f_i = DEFAULT_EPSILON;
        }

        let t1 = (e[i] + size) / f_i;
        let t2 = (e[i] - size) / f_i;

        tmin = tmin.max(t1.min(t2));
        tmax = tmax.min(t1.max(t2));
    }

    slab_result(tmin, tmax)
}

use crate::math::Real;
use crate::query::{Ray, RayCast};
use crate::shape::Plane;

impl RayCast for Plane {
    #[inline]
    fn cast_ray(&self, ray: &Ray) -> Option<Real> {
        ray_toi_with_plane(self, ray)
    }
}

/// Computes the distance along `ray` to a plane.
///
/// Only the front side of the plane (the side its normal points to) can be hit:
/// rays travelling along the normal direction, or parallel to the plane, miss.
#[inline]
pub fn ray_toi_with_plane(plane: &Plane, ray: &Ray) -> Option<Real> {
    let nd = ray.dir().dot(&plane.normal);

    if nd >= 0.0 {
        return None;
    }

    let pn = ray.origin.coords.dot(&plane.normal);
    let toi = (plane.distance - pn) / nd;

    if toi >= 0.0 {
        Some(toi)
    } else {
        None
    }
}

use crate::math::{Point, Real};
use crate::query::{Ray, RayCast};
use crate::shape::Sphere;

impl RayCast for Sphere {
    #[inline]
    fn cast_ray(&self, ray: &Ray) -> Option<Real> {
        ray_toi_with_sphere(&self.center, self.radius, ray)
    }
}

/// Computes the distance along `ray` to the boundary of a sphere.
///
/// If the ray starts inside of the sphere, the distance to its exit point is
/// returned. Spheres lying entirely behind the ray origin are not hit.
#[inline]
pub fn ray_toi_with_sphere(center: &Point<Real>, radius: Real, ray: &Ray) -> Option<Real> {
    let e = center - ray.origin;
    let r_sq = radius * radius;
    let e_sq = e.norm_squared();
    // Projection of the center onto the ray.
    let a = e.dot(ray.dir());
    // Squared distance between the center and the ray line.
    let b_sq = e_sq - a * a;
    let delta = r_sq - b_sq;

    if delta < 0.0 {
        return None;
    }

    let f = delta.sqrt();
    let toi = if e_sq < r_sq { a + f } else { a - f };

    if toi < 0.0 {
        None
    } else {
        Some(toi)
    }
}

use crate::math::Vector;
use crate::query::ContactManifold;
use crate::shape::Sphere;
use crate::utils;

/// Computes the contact manifold between two spheres.
///
/// The normal points from the center of `sphere1` toward the center of `sphere2`,
/// and the depth is half of the overlap of both spheres. Spheres with
/// coincident centers use the `+x` normal.
pub fn contact_manifold_sphere_sphere(sphere1: &Sphere, sphere2: &Sphere) -> ContactManifold {
    let mut result = ContactManifold::new();

    let r = sphere1.radius + sphere2.radius;
    let delta = sphere2.center - sphere1.center;
    let dist_squared = delta.norm_squared();

    if dist_squared > r * r {
        return result;
    }

    let dist = dist_squared.sqrt();
    let normal = if utils::approx_zero(dist_squared) {
        log::debug!("Coincident sphere centers, falling back to the +x contact normal.");
        Vector::x()
    } else {
        delta / dist
    };

    result.colliding = true;
    result.depth = (dist - r).abs() * 0.5;
    result.normal = normal;
    result
        .points
        .push(sphere1.center + normal * (sphere1.radius - result.depth));
    result
}

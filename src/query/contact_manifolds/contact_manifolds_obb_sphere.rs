use crate::math::Vector;
use crate::query::{ContactManifold, PointQuery};
use crate::shape::{Obb, Sphere};
use crate::utils;

/// Computes the contact manifold between an oriented box and a sphere.
///
/// The normal points from the box toward the sphere. If the sphere center lies
/// inside of the box, the normal is the direction from the box center to the
/// closest point instead, or `+x` if the sphere is centered on the box center.
/// The single contact point is halfway between the
/// closest point on the box and the deepest point of the sphere, and the depth
/// is half their distance.
pub fn contact_manifold_obb_sphere(obb: &Obb, sphere: &Sphere) -> ContactManifold {
    let mut result = ContactManifold::new();

    let closest = obb.closest_point(&sphere.center);
    let dist_squared = na::distance_squared(&closest, &sphere.center);

    if dist_squared > sphere.radius * sphere.radius {
        return result;
    }

    let normal = if utils::approx_zero(dist_squared) {
        let dir = closest - obb.center;

        if utils::approx_zero(dir.norm_squared()) {
            log::debug!("Sphere centered on the box center, falling back to the +x contact normal.");
            Vector::x()
        } else {
            dir.normalize()
        }
    } else {
        (sphere.center - closest).normalize()
    };

    let outside_point = sphere.center - normal * sphere.radius;

    result.colliding = true;
    result.points.push(na::center(&closest, &outside_point));
    result.normal = normal;
    result.depth = na::distance(&closest, &outside_point) * 0.5;
    result
}

/// Computes the contact manifold between a sphere and an oriented box.
///
/// Same as [`contact_manifold_obb_sphere`] with the normal pointing from the
/// sphere toward the box.
#[inline]
pub fn contact_manifold_sphere_obb(sphere: &Sphere, obb: &Obb) -> ContactManifold {
    contact_manifold_obb_sphere(obb, sphere).flipped()
}

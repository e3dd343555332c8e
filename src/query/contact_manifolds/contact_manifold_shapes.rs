use crate::query::details::{
    contact_manifold_obb_obb, contact_manifold_obb_sphere, contact_manifold_sphere_obb,
    contact_manifold_sphere_sphere,
};
use crate::query::ContactManifold;
use crate::shape::ColliderShape;

/// Computes the contact manifold between two colliders of any supported shape.
///
/// The normal always points from `shape1` toward `shape2`, whatever the order
/// of their shape types.
pub fn contact_manifold(shape1: &ColliderShape, shape2: &ColliderShape) -> ContactManifold {
    match (shape1, shape2) {
        (ColliderShape::Sphere(s1), ColliderShape::Sphere(s2)) => {
            contact_manifold_sphere_sphere(s1, s2)
        }
        (ColliderShape::Sphere(s1), ColliderShape::Obb(b2)) => contact_manifold_sphere_obb(s1, b2),
        (ColliderShape::Obb(b1), ColliderShape::Sphere(s2)) => contact_manifold_obb_sphere(b1, s2),
        (ColliderShape::Obb(b1), ColliderShape::Obb(b2)) => contact_manifold_obb_obb(b1, b2),
    }
}

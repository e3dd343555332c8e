use crate::query::PointQuery;
use crate::shape::{Aabb, Obb, Sphere, Triangle};

use super::impl_intersects;

/// Intersection test between a sphere and any shape with a closest-point query.
///
/// The shapes touch iff. the point of `shape` closest to the sphere center lies
/// within the sphere radius.
#[inline]
pub fn intersection_test_sphere_point_query<G: ?Sized + PointQuery>(sphere: &Sphere, shape: &G) -> bool {
    let closest = shape.closest_point(&sphere.center);
    na::distance_squared(&closest, &sphere.center) <= sphere.radius * sphere.radius
}

/// Intersection test between a sphere and an AABB.
#[inline]
pub fn intersection_test_sphere_aabb(sphere: &Sphere, aabb: &Aabb) -> bool {
    intersection_test_sphere_point_query(sphere, aabb)
}

/// Intersection test between a sphere and an oriented box.
#[inline]
pub fn intersection_test_sphere_obb(sphere: &Sphere, obb: &Obb) -> bool {
    intersection_test_sphere_point_query(sphere, obb)
}

/// Intersection test between a sphere and a triangle.
#[inline]
pub fn intersection_test_sphere_triangle(sphere: &Sphere, triangle: &Triangle) -> bool {
    intersection_test_sphere_point_query(sphere, triangle)
}

impl_intersects!(Sphere, Aabb, intersection_test_sphere_aabb);
impl_intersects!(Sphere, Obb, intersection_test_sphere_obb);
impl_intersects!(Sphere, Triangle, intersection_test_sphere_triangle);

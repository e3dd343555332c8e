use crate::math::{Point, Real, Vector};
use crate::shape::{Aabb, Obb, Plane, Sphere, Triangle};
use crate::utils;

use super::impl_intersects;

/// Intersection test between a plane and a box with the given center, axes and half-extents.
///
/// The box touches the plane iff. the distance from its center to the plane does
/// not exceed the radius of the box projected on the plane normal.
#[inline]
pub fn intersection_test_plane_box(
    plane: &Plane,
    center: &Point<Real>,
    axes: &[Vector<Real>; 3],
    half_extents: &Vector<Real>,
) -> bool {
    let projected_radius: Real = (0..3)
        .map(|i| half_extents[i] * plane.normal.dot(&axes[i]).abs())
        .sum();
    plane.signed_distance(center).abs() <= projected_radius
}

/// Intersection test between a sphere and a plane.
#[inline]
pub fn intersection_test_sphere_plane(sphere: &Sphere, plane: &Plane) -> bool {
    plane.signed_distance(&sphere.center).abs() <= sphere.radius
}

/// Intersection test between an AABB and a plane.
#[inline]
pub fn intersection_test_aabb_plane(aabb: &Aabb, plane: &Plane) -> bool {
    let axes = [Vector::x(), Vector::y(), Vector::z()];
    intersection_test_plane_box(plane, &aabb.center, &axes, &aabb.half_extents)
}

/// Intersection test between an oriented box and a plane.
#[inline]
pub fn intersection_test_obb_plane(obb: &Obb, plane: &Plane) -> bool {
    intersection_test_plane_box(plane, &obb.center, &obb.axes(), &obb.half_extents)
}

/// Intersection test between two planes: they intersect unless they are parallel.
#[inline]
pub fn intersection_test_plane_plane(plane1: &Plane, plane2: &Plane) -> bool {
    !plane1.is_parallel_to(plane2)
}

/// Intersection test between a triangle and a plane.
///
/// A triangle lying in the plane intersects it. Otherwise they intersect unless
/// all three vertices lie strictly on the same side of the plane.
pub fn intersection_test_triangle_plane(triangle: &Triangle, plane: &Plane) -> bool {
    let sides = triangle.vertices().map(|pt| plane.signed_distance(&pt));

    if sides.iter().all(|side| utils::approx_zero(*side)) {
        return true;
    }

    !(sides.iter().all(|side| *side > 0.0) || sides.iter().all(|side| *side < 0.0))
}

impl_intersects!(Sphere, Plane, intersection_test_sphere_plane);
impl_intersects!(Aabb, Plane, intersection_test_aabb_plane);
impl_intersects!(Obb, Plane, intersection_test_obb_plane);
impl_intersects!(Plane, intersection_test_plane_plane);
impl_intersects!(Triangle, Plane, intersection_test_triangle_plane);

use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::query::sat;
use crate::shape::{Aabb, Obb, Triangle};

use super::impl_intersects;

/// Separating Axis Theorem test between a triangle and a box with the given world-space axes.
fn intersection_test_triangle_box<S>(triangle: &Triangle, box_shape: &S, box_axes: &[Vector<Real>; 3]) -> bool
where
    S: ?Sized + sat::IntervalProjection,
{
    let axes = sat::box_triangle_candidate_axes(box_axes, &triangle.edges_scaled_directions());
    sat::sat_find_separating_axis(triangle, box_shape, &axes, DEFAULT_EPSILON).is_none()
}

/// Intersection test between a triangle and an AABB.
#[inline]
pub fn intersection_test_triangle_aabb(triangle: &Triangle, aabb: &Aabb) -> bool {
    let axes = [Vector::x(), Vector::y(), Vector::z()];
    intersection_test_triangle_box(triangle, aabb, &axes)
}

/// Intersection test between a triangle and an oriented box.
#[inline]
pub fn intersection_test_triangle_obb(triangle: &Triangle, obb: &Obb) -> bool {
    intersection_test_triangle_box(triangle, obb, &obb.axes())
}

/// Intersection test between two triangles.
///
/// Parallel edges contribute an axis lying in the triangles plane, so that
/// disjoint coplanar triangles are reported as separated.
pub fn intersection_test_triangle_triangle(triangle1: &Triangle, triangle2: &Triangle) -> bool {
    let axes =
        sat::triangle_triangle_candidate_axes(&triangle1.vertices(), &triangle2.vertices());
    sat::sat_find_separating_axis(triangle1, triangle2, &axes, DEFAULT_EPSILON).is_none()
}

impl_intersects!(Triangle, Aabb, intersection_test_triangle_aabb);
impl_intersects!(Triangle, Obb, intersection_test_triangle_obb);
impl_intersects!(Triangle, intersection_test_triangle_triangle);

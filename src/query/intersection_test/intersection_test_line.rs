use crate::math::{Real, Vector};
use crate::query::details::clip_segment_plane;
use crate::query::{PointQuery, Ray, RayCast};
use crate::shape::{Aabb, Line, Obb, Plane, Sphere, Triangle};

use super::impl_intersects;

/// Tests a segment against a shape by casting a ray along it.
///
/// A segment starting inside of (or on) the shape always intersects it. A degenerate
/// segment is reduced to its start point.
fn intersection_test_line_solid<G>(line: &Line, shape: &G) -> bool
where
    G: ?Sized + RayCast + PointQuery,
{
    if shape.contains_point(&line.start) {
        return true;
    }

    match Ray::try_new(line.start, line.scaled_direction()) {
        Ok(ray) => shape
            .cast_ray(&ray)
            .is_some_and(|toi: Real| toi * toi <= line.length_squared()),
        Err(_) => false,
    }
}

/// Intersection test between a segment and a sphere.
#[inline]
pub fn intersection_test_line_sphere(line: &Line, sphere: &Sphere) -> bool {
    let closest = line.closest_point(&sphere.center);
    na::distance_squared(&closest, &sphere.center) <= sphere.radius * sphere.radius
}

/// Intersection test between a segment and an AABB.
#[inline]
pub fn intersection_test_line_aabb(line: &Line, aabb: &Aabb) -> bool {
    intersection_test_line_solid(line, aabb)
}

/// Intersection test between a segment and an oriented box.
#[inline]
pub fn intersection_test_line_obb(line: &Line, obb: &Obb) -> bool {
    intersection_test_line_solid(line, obb)
}

/// Intersection test between a segment and a plane.
///
/// A segment lying in the plane intersects it.
#[inline]
pub fn intersection_test_line_plane(line: &Line, plane: &Plane) -> bool {
    plane.contains_point(&line.start) || clip_segment_plane(plane, line).is_some()
}

/// Intersection test between a segment and a triangle.
///
/// A segment lying in the plane of the triangle is tested against its edges.
pub fn intersection_test_line_triangle(line: &Line, triangle: &Triangle) -> bool {
    if intersection_test_line_solid(line, triangle) {
        return true;
    }

    match Plane::try_from_triangle(triangle) {
        Ok(plane) if plane.contains_point(&line.start) && plane.contains_point(&line.end) => {
            triangle.contains_point(&line.end)
                || triangle
                    .edges()
                    .iter()
                    .any(|edge| coplanar_segments_intersect(&plane.normal, line, edge))
        }
        _ => false,
    }
}

/// Intersection test between two segments lying in a plane with the given normal.
fn coplanar_segments_intersect(normal: &Vector<Real>, seg1: &Line, seg2: &Line) -> bool {
    let dir1 = seg1.scaled_direction();
    let dir2 = seg2.scaled_direction();
    // Side of each endpoint relative to the other segment.
    let side_start2 = normal.dot(&dir1.cross(&(seg2.start - seg1.start)));
    let side_end2 = normal.dot(&dir1.cross(&(seg2.end - seg1.start)));
    let side_start1 = normal.dot(&dir2.cross(&(seg1.start - seg2.start)));
    let side_end1 = normal.dot(&dir2.cross(&(seg1.end - seg2.start)));

    if side_start2 * side_end2 < 0.0 && side_start1 * side_end1 < 0.0 {
        return true;
    }

    // Touching or collinear segments.
    seg1.contains_point(&seg2.start)
        || seg1.contains_point(&seg2.end)
        || seg2.contains_point(&seg1.start)
        || seg2.contains_point(&seg1.end)
}

impl_intersects!(Line, Sphere, intersection_test_line_sphere);
impl_intersects!(Line, Aabb, intersection_test_line_aabb);
impl_intersects!(Line, Obb, intersection_test_line_obb);
impl_intersects!(Line, Plane, intersection_test_line_plane);
impl_intersects!(Line, Triangle, intersection_test_line_triangle);

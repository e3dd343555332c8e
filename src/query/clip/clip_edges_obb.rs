use alloc::vec::Vec;

use crate::math::{Point, Real};
use crate::query::point::obb_contains_point_with_tolerance;
use crate::shape::{Line, Obb};

use super::clip_segment_plane;

/// Clips a set of edges against the face planes of `obb`.
///
/// Every intersection between an edge and a face plane is kept if it lies
/// inside of `obb` (enlarged by `tolerance`). The points are appended to `out`,
/// which is not cleared first.
pub fn clip_edges_obb(edges: &[Line], obb: &Obb, tolerance: Real, out: &mut Vec<Point<Real>>) {
    for plane in &obb.face_planes() {
        for edge in edges {
            if let Some(pt) = clip_segment_plane(plane, edge) {
                if obb_contains_point_with_tolerance(obb, &pt, tolerance) {
                    out.push(pt);
                }
            }
        }
    }
}

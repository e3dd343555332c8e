use crate::math::{Point, Real};
use crate::shape::{Line, Plane};
use crate::utils;

/// Computes the intersection point between a segment and a plane.
///
/// Returns `None` if the segment is parallel to the plane or if the
/// intersection of the plane with the segment supporting line is not on the
/// segment, i.e., its parameter lies outside of `[0, 1]`.
#[inline]
pub fn clip_segment_plane(plane: &Plane, line: &Line) -> Option<Point<Real>> {
    let ab = line.scaled_direction();
    let n_a = plane.normal.dot(&line.start.coords);
    let n_ab = plane.normal.dot(&ab);

    if utils::approx_zero(n_ab) {
        return None;
    }

    let t = (plane.distance - n_a) / n_ab;

    if t >= 0.0 && t <= 1.0 {
        Some(line.start + ab * t)
    } else {
        None
    }
}

use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::query::sat::{self, IntervalProjection};
use crate::shape::{Aabb, Obb};

use super::impl_intersects;

const WORLD_AXES: [Vector<Real>; 3] = [
    Vector::new(1.0, 0.0, 0.0),
    Vector::new(0.0, 1.0, 0.0),
    Vector::new(0.0, 0.0, 1.0),
];

/// Intersection test between two AABBs.
#[inline]
pub fn intersection_test_aabb_aabb(aabb1: &Aabb, aabb2: &Aabb) -> bool {
    let (mins1, maxs1) = (aabb1.mins(), aabb1.maxs());
    let (mins2, maxs2) = (aabb2.mins(), aabb2.maxs());
    (0..3).all(|i| mins1[i] <= maxs2[i] && mins2[i] <= maxs1[i])
}

/// Separating Axis Theorem test between two boxes with the given world-space axes.
///
/// Returns `true` if none of the 15 candidate axes separates the boxes.
pub fn intersection_test_box_box<S1, S2>(
    box1: &S1,
    axes1: &[Vector<Real>; 3],
    box2: &S2,
    axes2: &[Vector<Real>; 3],
) -> bool
where
    S1: ?Sized + IntervalProjection,
    S2: ?Sized + IntervalProjection,
{
    let axes = sat::box_box_candidate_axes(axes1, axes2);
    sat::sat_find_separating_axis(box1, box2, &axes, DEFAULT_EPSILON).is_none()
}

/// Intersection test between an AABB and an oriented box.
#[inline]
pub fn intersection_test_aabb_obb(aabb: &Aabb, obb: &Obb) -> bool {
    intersection_test_box_box(aabb, &WORLD_AXES, obb, &obb.axes())
}

/// Intersection test between two oriented boxes.
#[inline]
pub fn intersection_test_obb_obb(obb1: &Obb, obb2: &Obb) -> bool {
    intersection_test_box_box(obb1, &obb1.axes(), obb2, &obb2.axes())
}

impl_intersects!(Aabb, intersection_test_aabb_aabb);
impl_intersects!(Aabb, Obb, intersection_test_aabb_obb);
impl_intersects!(Obb, intersection_test_obb_obb);

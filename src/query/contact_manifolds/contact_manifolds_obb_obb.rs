use alloc::vec::Vec;
use arrayvec::ArrayVec;

use crate::math::{Point, Real, Vector};
use crate::query::details::{clip_edges_obb, intersection_test_sphere_sphere};
use crate::query::sat::{self, IntervalProjection};
use crate::query::{ContactManifold, ContactOptions};
use crate::shape::Obb;

/// Computes the contact manifold between two oriented boxes, with default tolerances.
///
/// See [`contact_manifold_obb_obb_with_options`].
#[inline]
pub fn contact_manifold_obb_obb(obb1: &Obb, obb2: &Obb) -> ContactManifold {
    contact_manifold_obb_obb_with_options(obb1, obb2, &ContactOptions::default())
}

/// Computes the contact manifold between two oriented boxes.
///
/// The normal is the candidate axis of minimum penetration depth, oriented from
/// `obb1` toward `obb2`. The contact points are the intersections of the edges of
/// each box with the faces of the other box, projected on the plane halfway
/// through the overlap.
pub fn contact_manifold_obb_obb_with_options(
    obb1: &Obb,
    obb2: &Obb,
    options: &ContactOptions,
) -> ContactManifold {
    let mut result = ContactManifold::new();

    if !intersection_test_sphere_sphere(&obb1.bounding_sphere(), &obb2.bounding_sphere()) {
        return result;
    }

    let candidates = sat::box_box_candidate_axes(&obb1.axes(), &obb2.axes());
    let axes: ArrayVec<Vector<Real>, 15> = candidates
        .iter()
        .filter(|axis| axis.norm_squared() >= options.degenerate_axis_norm_squared)
        .copied()
        .collect();

    if axes.is_empty() {
        log::debug!("Every candidate separating axis is degenerate, reporting no contact.");
        return result;
    }

    let mut best_normal = None;

    for axis in &axes {
        let pd = sat::penetration_depth(obb1, obb2, axis);

        if pd.depth < options.separation_epsilon {
            return result;
        }

        if pd.depth < result.depth {
            let normal = axis.normalize();
            result.depth = pd.depth;
            best_normal = Some(if pd.should_flip { -normal } else { normal });
        }
    }

    let Some(normal) = best_normal else {
        return result;
    };

    log::trace!(
        "Minimum penetration axis: {:?}, depth: {}",
        normal,
        result.depth
    );

    let mut clipped = Vec::new();
    clip_edges_obb(&obb2.edges(), obb1, options.containment_tolerance, &mut clipped);
    clip_edges_obb(&obb1.edges(), obb2, options.containment_tolerance, &mut clipped);

    let len1 = obb1.project_on_axis(&normal).length();
    let point_on_plane = obb1.center + normal * (len1 * 0.5 - result.depth * 0.5);

    for pt in clipped {
        let projected = pt + normal * normal.dot(&(point_on_plane - pt));
        push_unique(&mut result.points, projected, options.dedup_distance_squared);
    }

    result.colliding = true;
    result.normal = normal;
    result
}

fn push_unique(points: &mut Vec<Point<Real>>, pt: Point<Real>, dedup_distance_squared: Real) {
    if points
        .iter()
        .all(|other| na::distance_squared(other, &pt) >= dedup_distance_squared)
    {
        points.push(pt);
    }
}

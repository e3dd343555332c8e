use crate::math::{Real, Vector};
use crate::shape::{Aabb, Obb, Triangle};
use crate::utils::Interval;

/// Trait of convex polyhedra that can be projected onto an axis.
///
/// This is all the Separating Axis Theorem needs to know about a shape.
pub trait IntervalProjection {
    /// Projects every vertex of `self` onto `axis` and returns the covered range.
    fn project_on_axis(&self, axis: &Vector<Real>) -> Interval;
}

impl IntervalProjection for Aabb {
    #[inline]
    fn project_on_axis(&self, axis: &Vector<Real>) -> Interval {
        self.interval(axis)
    }
}

impl IntervalProjection for Obb {
    #[inline]
    fn project_on_axis(&self, axis: &Vector<Real>) -> Interval {
        self.interval(axis)
    }
}

impl IntervalProjection for Triangle {
    #[inline]
    fn project_on_axis(&self, axis: &Vector<Real>) -> Interval {
        self.interval(axis)
    }
}

/// Tests the given candidate axes and returns the first one separating `shape1` from `shape2`.
///
/// Axes with a squared length smaller than `min_axis_norm_squared` are skipped:
/// they come from parallel edges and carry no information. Returns `None` if the
/// projections of both shapes overlap on every remaining axis, in which case the
/// shapes intersect.
pub fn sat_find_separating_axis<S1, S2>(
    shape1: &S1,
    shape2: &S2,
    axes: &[Vector<Real>],
    min_axis_norm_squared: Real,
) -> Option<Vector<Real>>
where
    S1: ?Sized + IntervalProjection,
    S2: ?Sized + IntervalProjection,
{
    axes.iter()
        .filter(|axis| axis.norm_squared() >= min_axis_norm_squared)
        .find(|axis| {
            !shape1
                .project_on_axis(axis)
                .intersects(&shape2.project_on_axis(axis))
        })
        .copied()
}

use crate::math::{Real, Vector};
use crate::query::sat::IntervalProjection;

/// The overlap of two shapes along an axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PenetrationDepth {
    /// How far the shapes would have to move apart along the axis to stop overlapping.
    ///
    /// Zero if their projections do not overlap at all.
    pub depth: Real,
    /// `true` if the projection of the second shape starts before the one of the
    /// first shape, in which case the axis must be negated to point from the
    /// first shape toward the second one.
    pub should_flip: bool,
}

/// Computes the penetration depth of two shapes along `axis`.
///
/// The axis does not need to be normalized, but must not be zero. Both shapes are
/// projected on the normalized axis, and the depth is the sum of both interval
/// lengths minus the length of their union.
pub fn penetration_depth<S1, S2>(shape1: &S1, shape2: &S2, axis: &Vector<Real>) -> PenetrationDepth
where
    S1: ?Sized + IntervalProjection,
    S2: ?Sized + IntervalProjection,
{
    let axis = axis.normalize();
    let i1 = shape1.project_on_axis(&axis);
    let i2 = shape2.project_on_axis(&axis);

    if !i1.intersects(&i2) {
        return PenetrationDepth {
            depth: 0.0,
            should_flip: false,
        };
    }

    let union = i1.merged(&i2);

    PenetrationDepth {
        depth: i1.length() + i2.length() - union.length(),
        should_flip: i2.min < i1.min,
    }
}

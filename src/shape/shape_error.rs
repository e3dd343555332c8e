use crate::math::Real;

/// Error returned by the validating constructors of the shapes of this crate.
///
/// The plain `new` constructors never fail: they trust their input. The `try_*`
/// constructors check the invariants documented on each shape and report the
/// first one that is violated.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A ray was given a direction with a (nearly) zero length.
    #[error("the ray direction has a zero length.")]
    ZeroDirection,
    /// A plane was given a normal with a (nearly) zero length.
    #[error("the plane normal has a zero length.")]
    ZeroNormal,
    /// A sphere was given a negative radius.
    #[error("the sphere radius {0} is negative.")]
    NegativeRadius(Real),
    /// A box was given at least one negative half-extent.
    #[error("the box half-extents must be non-negative, found the component {component} equal to {value}.")]
    NegativeHalfExtents {
        /// The index of the first negative component.
        component: usize,
        /// The value of that component.
        value: Real,
    },
    /// An axis-aligned box was built from bounds with `mins > maxs` on some axis.
    #[error("the box lower bound exceeds its upper bound along the axis {0}.")]
    InvertedBounds(usize),
    /// A plane was built from three collinear (or coincident) points.
    #[error("the triangle is degenerate: its three points are collinear.")]
    DegenerateTriangle,
}

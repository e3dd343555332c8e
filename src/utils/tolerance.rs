use crate::math::{Real, DEFAULT_EPSILON};

/// Is `value` zero up to the crate-wide tolerance?
///
/// The tolerance is relative to the magnitude of the compared values, so
/// this behaves like `approx_eq(value, 0.0)`.
#[inline]
pub fn approx_zero(value: Real) -> bool {
    approx_eq(value, 0.0)
}

/// Are `a` and `b` equal up to the crate-wide tolerance?
///
/// Uses an absolute tolerance of [`DEFAULT_EPSILON`] near zero and a relative
/// one for larger magnitudes.
#[inline]
pub fn approx_eq(a: Real, b: Real) -> bool {
    approx::relative_eq!(a, b, epsilon = DEFAULT_EPSILON, max_relative = DEFAULT_EPSILON)
}

/// Tolerance used when checking whether a point lies on a surface, a segment or
/// an edge.
///
/// Projecting a point on a plane or a triangle accumulates more rounding error
/// than [`DEFAULT_EPSILON`], so on-surface checks use this looser tolerance,
/// absolute near zero and relative to the compared magnitudes above one.
pub const ON_SURFACE_TOLERANCE: Real = 1.0e-9;

/// Are `a` and `b` equal up to [`ON_SURFACE_TOLERANCE`]?
#[inline]
pub fn on_surface_eq(a: Real, b: Real) -> bool {
    approx::relative_eq!(
        a,
        b,
        epsilon = ON_SURFACE_TOLERANCE,
        max_relative = ON_SURFACE_TOLERANCE
    )
}

use crate::math::{Real, DEFAULT_EPSILON};

/// Tolerances used when generating contact manifolds.
///
/// Use [`ContactOptions::default()`] unless the scale of the simulated world
/// is far from unit-sized.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactOptions {
    /// Two shapes overlapping by less than this along any axis are considered separated.
    pub separation_epsilon: Real,
    /// Candidate axes with a squared norm below this value are skipped.
    ///
    /// The cross product of two (almost) parallel edges has no meaningful direction.
    pub degenerate_axis_norm_squared: Real,
    /// Two contact points closer than the square root of this are merged.
    pub dedup_distance_squared: Real,
    /// How far outside of a box a clipped contact point may lie and still be kept.
    pub containment_tolerance: Real,
}

impl Default for ContactOptions {
    fn default() -> Self {
        Self {
            separation_epsilon: DEFAULT_EPSILON,
            degenerate_axis_norm_squared: 1.0e-6,
            dedup_distance_squared: 1.0e-8,
            containment_tolerance: 1.0e-6,
        }
    }
}

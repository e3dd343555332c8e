use crate::math::{Point, Real, Vector};

/// A closed range of scalars, typically the projection of a shape onto an axis.
///
/// Every box separating-axis test in this crate reduces to checking whether
/// two of these ranges overlap.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    /// The smallest projected value.
    pub min: Real,
    /// The largest projected value.
    pub max: Real,
}

impl Interval {
    /// Creates a new interval. The bounds are swapped if `min > max`.
    #[inline]
    pub fn new(min: Real, max: Real) -> Self {
        if min > max {
            Interval { min: max, max: min }
        } else {
            Interval { min, max }
        }
    }

    /// Projects every point of `pts` onto `axis` and returns the covered range.
    ///
    /// The axis is used as-is: projecting onto a non-unit axis scales the interval.
    /// An empty slice yields an inverted interval, which overlaps nothing.
    pub fn from_points(axis: &Vector<Real>, pts: &[Point<Real>]) -> Self {
        let mut result = Interval {
            min: Real::MAX,
            max: -Real::MAX,
        };

        for pt in pts {
            let proj = axis.dot(&pt.coords);
            result.min = result.min.min(proj);
            result.max = result.max.max(proj);
        }

        result
    }

    /// The width `max - min` of this interval.
    #[inline]
    pub fn length(&self) -> Real {
        self.max - self.min
    }

    /// The center of this interval.
    #[inline]
    pub fn midpoint(&self) -> Real {
        (self.min + self.max) * 0.5
    }

    /// Does this interval contain `value` (bounds included)?
    #[inline]
    pub fn contains(&self, value: Real) -> bool {
        value >= self.min && value <= self.max
    }

    /// Do these two intervals overlap? Touching bounds count as overlapping.
    #[inline]
    pub fn intersects(&self, other: &Interval) -> bool {
        other.min <= self.max && self.min <= other.max
    }

    /// The smallest interval containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Interval) -> Interval {
        Interval {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

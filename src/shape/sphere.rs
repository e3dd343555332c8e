use crate::math::{Point, Real};
use crate::shape::ShapeError;

/// A sphere, given by its world-space center and radius.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Sphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius.
    ///
    /// The radius must be positive or zero.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Sphere {
        Sphere { center, radius }
    }

    /// Creates a new sphere, checking that the radius is not negative.
    pub fn try_new(center: Point<Real>, radius: Real) -> Result<Sphere, ShapeError> {
        if radius < 0.0 {
            Err(ShapeError::NegativeRadius(radius))
        } else {
            Ok(Sphere::new(center, radius))
        }
    }

    /// A unit sphere centered at the origin.
    #[inline]
    pub fn unit() -> Sphere {
        Sphere::new(Point::origin(), 1.0)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere::unit()
    }
}

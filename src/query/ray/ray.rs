//! Traits and structure needed to cast rays.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::ShapeError;

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending
/// infinitely in a direction. Its direction is always normalized, so that the
/// parameters returned by ray casts are distances from the origin.
///
/// # Example
///
/// ```
/// use sat3d::query::{Ray, RayCast};
/// use sat3d::shape::Sphere;
/// use sat3d::na::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::origin(), Vector3::new(2.0, 0.0, 0.0));
/// assert_eq!(*ray.dir(), Vector3::x());
///
/// let sphere = Sphere::new(Point3::new(5.0, 0.0, 0.0), 1.0);
/// assert_eq!(sphere.cast_ray(&ray), Some(4.0));
/// assert_eq!(ray.point_at(4.0), Point3::new(4.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray from an origin point and a direction.
    ///
    /// The direction is normalized and must not be zero; use [`Ray::try_new`]
    /// when it may be.
    #[inline]
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray {
            origin,
            dir: dir.normalize(),
        }
    }

    /// Creates a new ray, failing if `dir` has a zero length.
    pub fn try_new(origin: Point<Real>, dir: Vector<Real>) -> Result<Ray, ShapeError> {
        let dir = dir
            .try_normalize(DEFAULT_EPSILON)
            .ok_or(ShapeError::ZeroDirection)?;
        Ok(Ray { origin, dir })
    }

    /// The ray starting at `from` and passing through `to`.
    #[inline]
    pub fn from_points(from: Point<Real>, to: Point<Real>) -> Result<Ray, ShapeError> {
        Ray::try_new(from, to - from)
    }

    /// The unit direction of this ray.
    #[inline]
    pub fn dir(&self) -> &Vector<Real> {
        &self.dir
    }

    /// Sets the direction of this ray, normalizing it.
    #[inline]
    pub fn set_dir(&mut self, dir: Vector<Real>) {
        self.dir = dir.normalize();
    }

    /// Translates this ray by the given vector.
    #[inline]
    pub fn translate_by(&self, v: Vector<Real>) -> Self {
        Ray {
            origin: self.origin + v,
            dir: self.dir,
        }
    }

    /// Computes the point `origin + dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Traits of objects which can be tested for intersection with a ray.
///
/// All casts return the distance from the ray origin to the hit point, or
/// `None` if the ray misses. When the ray starts inside of a solid shape, the
/// distance to the point where it leaves the shape is returned.
pub trait RayCast {
    /// Computes the distance along `ray` of its first intersection with `self`.
    fn cast_ray(&self, ray: &Ray) -> Option<Real>;

    /// Computes the first intersection point between `ray` and `self`.
    #[inline]
    fn cast_ray_and_get_point(&self, ray: &Ray) -> Option<Point<Real>> {
        self.cast_ray(ray).map(|t| ray.point_at(t))
    }

    /// Tests whether a ray intersects `self`.
    #[inline]
    fn intersects_ray(&self, ray: &Ray) -> bool {
        self.cast_ray(ray).is_some()
    }
}

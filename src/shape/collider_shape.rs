use crate::math::{Point, Real};
use crate::shape::{Obb, Sphere};

/// A shape for which contact manifolds can be generated.
///
/// This is the set of shapes accepted by [`crate::query::contact_manifold`], for
/// callers storing heterogeneous colliders side by side.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum ColliderShape {
    /// A sphere collider.
    Sphere(Sphere),
    /// An oriented box collider.
    Obb(Obb),
}

impl ColliderShape {
    /// The world-space center of the wrapped shape.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        match self {
            ColliderShape::Sphere(s) => s.center,
            ColliderShape::Obb(b) => b.center,
        }
    }

    /// Moves the wrapped shape so that its center lies at `center`.
    #[inline]
    pub fn set_center(&mut self, center: Point<Real>) {
        match self {
            ColliderShape::Sphere(s) => s.center = center,
            ColliderShape::Obb(b) => b.center = center,
        }
    }
}

impl From<Sphere> for ColliderShape {
    fn from(s: Sphere) -> Self {
        ColliderShape::Sphere(s)
    }
}

impl From<Obb> for ColliderShape {
    fn from(b: Obb) -> Self {
        ColliderShape::Obb(b)
    }
}

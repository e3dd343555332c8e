use alloc::vec::Vec;

use crate::math::{Point, Real, Vector};

/// The result of a narrow-phase collision query between two shapes.
///
/// The normal points from the first shape toward the second one, i.e., moving
/// the second shape by `normal * depth` separates both shapes. `points` and
/// `depth` are only meaningful if `colliding` is `true`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ContactManifold {
    /// Are the two shapes touching or penetrating?
    pub colliding: bool,
    /// The world-space contact points.
    pub points: Vec<Point<Real>>,
    /// The unit contact normal, pointing from the first shape toward the second one.
    pub normal: Vector<Real>,
    /// The penetration depth along `normal`.
    pub depth: Real,
}

impl ContactManifold {
    /// A manifold reporting no collision.
    pub fn new() -> Self {
        ContactManifold {
            colliding: false,
            points: Vec::new(),
            normal: Vector::zeros(),
            depth: Real::INFINITY,
        }
    }

    /// The number of contact points.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Negates the normal, so that it points from the second shape toward the first one.
    #[inline]
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Returns this manifold with its normal negated.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// Resets this manifold so it reports no collision.
    pub fn clear(&mut self) {
        self.colliding = false;
        self.points.clear();
        self.normal = Vector::zeros();
        self.depth = Real::INFINITY;
    }
}

impl Default for ContactManifold {
    fn default() -> Self {
        Self::new()
    }
}

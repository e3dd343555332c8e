//! Oriented bounding box.

use crate::math::{Matrix, Point, Real, Rotation, Vector};
use crate::shape::aabb::check_half_extents;
use crate::shape::{Line, Plane, ShapeError, Sphere};
use crate::utils::Interval;

/// The pairs of vertex indices forming the 12 edges of a box.
///
/// Vertex `i` has its `k`-th local coordinate negated iff. the `k`-th bit of `i` is set,
/// so each edge joins two vertices differing by exactly one bit.
const EDGE_VERTICES: [(usize, usize); 12] = [
    (0b000, 0b001),
    (0b010, 0b011),
    (0b100, 0b101),
    (0b110, 0b111),
    (0b000, 0b010),
    (0b001, 0b011),
    (0b100, 0b110),
    (0b101, 0b111),
    (0b000, 0b100),
    (0b001, 0b101),
    (0b010, 0b110),
    (0b011, 0b111),
];

/// An Oriented Bounding Box: a box with a world-space center and an arbitrary rotation.
///
/// The rotation is stored both as a quaternion and as a rotation matrix. The
/// matrix is a cache used by every query (its columns are the box axes) and is
/// recomputed each time the rotation is set through [`Obb::set_rotation`]. The
/// two can never be modified independently.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Obb {
    /// The center of the box.
    pub center: Point<Real>,
    /// The half-width of the box along each of its local axes.
    pub half_extents: Vector<Real>,
    rotation: Rotation<Real>,
    rotation_matrix: Matrix<Real>,
}

impl Obb {
    /// Creates a new oriented box.
    ///
    /// Each half-extent must be positive or zero.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>, rotation: Rotation<Real>) -> Obb {
        Obb {
            center,
            half_extents,
            rotation,
            rotation_matrix: rotation.to_rotation_matrix().into_inner(),
        }
    }

    /// Creates a new oriented box, checking that no half-extent is negative.
    pub fn try_new(
        center: Point<Real>,
        half_extents: Vector<Real>,
        rotation: Rotation<Real>,
    ) -> Result<Obb, ShapeError> {
        check_half_extents(&half_extents)?;
        Ok(Obb::new(center, half_extents, rotation))
    }

    /// Creates an oriented box with an identity rotation.
    #[inline]
    pub fn axis_aligned(center: Point<Real>, half_extents: Vector<Real>) -> Obb {
        Obb::new(center, half_extents, Rotation::identity())
    }

    /// The rotation of this box.
    #[inline]
    pub fn rotation(&self) -> &Rotation<Real> {
        &self.rotation
    }

    /// The cached rotation matrix of this box. Its columns are the box local axes.
    #[inline]
    pub fn rotation_matrix(&self) -> &Matrix<Real> {
        &self.rotation_matrix
    }

    /// Sets the rotation of this box and refreshes the cached rotation matrix.
    #[inline]
    pub fn set_rotation(&mut self, rotation: Rotation<Real>) {
        self.rotation = rotation;
        self.rotation_matrix = rotation.to_rotation_matrix().into_inner();
    }

    /// Returns a copy of this box with the given rotation.
    #[inline]
    pub fn with_rotation(mut self, rotation: Rotation<Real>) -> Obb {
        self.set_rotation(rotation);
        self
    }

    /// The `i`-th local axis of this box, expressed in world-space.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector<Real> {
        self.rotation_matrix.column(i).into_owned()
    }

    /// The three local axes of this box, expressed in world-space.
    #[inline]
    pub fn axes(&self) -> [Vector<Real>; 3] {
        [self.axis(0), self.axis(1), self.axis(2)]
    }

    /// The sphere centered on this box passing through all its corners.
    #[inline]
    pub fn bounding_sphere(&self) -> Sphere {
        Sphere::new(self.center, self.half_extents.norm())
    }

    /// The eight world-space corners of this box.
    ///
    /// The `k`-th local coordinate of vertex `i` is negative iff. the `k`-th bit of `i` is set.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let [x, y, z] = self.axes();
        let he = self.half_extents;

        core::array::from_fn(|vid| {
            let sx = if vid & 0b001 != 0 { -he.x } else { he.x };
            let sy = if vid & 0b010 != 0 { -he.y } else { he.y };
            let sz = if vid & 0b100 != 0 { -he.z } else { he.z };
            self.center + x * sx + y * sy + z * sz
        })
    }

    /// The twelve world-space edges of this box.
    pub fn edges(&self) -> [Line; 12] {
        let vtx = self.vertices();
        EDGE_VERTICES.map(|(a, b)| Line::new(vtx[a], vtx[b]))
    }

    /// The six world-space face planes of this box, with outward normals.
    ///
    /// Plane `i < 3` has the normal `axis(i)`, plane `i + 3` the normal `-axis(i)`.
    pub fn face_planes(&self) -> [Plane; 6] {
        let axes = self.axes();

        core::array::from_fn(|fid| {
            let (axis, sign) = if fid < 3 {
                (axes[fid], 1.0)
            } else {
                (axes[fid - 3], -1.0)
            };
            let normal = axis * sign;
            let face_center = self.center + normal * self.half_extents[fid % 3];
            Plane::new(normal, normal.dot(&face_center.coords))
        })
    }

    /// Projects this box onto `axis`.
    #[inline]
    pub fn interval(&self, axis: &Vector<Real>) -> Interval {
        Interval::from_points(axis, &self.vertices())
    }
}

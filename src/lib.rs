/*!
sat3d
========

**sat3d** is a 3-dimensional narrow-phase collision library written with
the rust programming language.

It provides bounded primitives (spheres, axis-aligned and oriented boxes,
planes, rays, segments and triangles), containment and closest-point queries,
pairwise intersection tests, ray casts, and a Separating Axis Theorem engine
producing contact manifolds for oriented boxes and spheres.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

/// Aliases for mathematical types.
pub mod math {
    pub use na::{Matrix3, Point3, UnitQuaternion, UnitVector3, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f64;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;
}

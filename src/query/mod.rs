//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::contact_manifold()`](crate::query::contact_manifold) to compute the contact manifold between two colliders.
//! * [`query::Intersects`](crate::query::Intersects) to determine if two shapes are intersecting or not.
//!
//! Ray-casting and point-projection can be achieved by importing traits:
//!
//! * [`query::RayCast`](crate::query::RayCast) for ray-casting.
//! * [`query::PointQuery`](crate::query::PointQuery) for point inclusion and projection.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the specific versions used by the
//! traits above. The specific functions have the form `[operation]_[shape1]_[shape2]()` where:
//!
//! * `[operation]` can be `intersection_test`, `contact_manifold`, `ray_toi_with` or `clip`.
//! * `[shape1]` is the type of the first shape passed to the function, e.g., `sphere`, or `obb`.
//! * `[shape2]` is the type of the second shape passed to the function, e.g., `sphere`, or `obb`.

pub use self::contact_manifolds::{contact_manifold, ContactManifold};
pub use self::contact_options::ContactOptions;
pub use self::intersection_test::Intersects;
pub use self::point::{PointProjection, PointQuery};
pub use self::ray::{Ray, RayCast};

mod clip;
mod contact_manifolds;
mod contact_options;
mod intersection_test;
pub mod point;
mod ray;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::clip::*;
    pub use super::contact_manifolds::{
        contact_manifold_obb_obb, contact_manifold_obb_obb_with_options,
        contact_manifold_obb_sphere, contact_manifold_sphere_obb, contact_manifold_sphere_sphere,
    };
    pub use super::intersection_test::*;
    pub use super::ray::{
        ray_toi_with_aabb, ray_toi_with_obb, ray_toi_with_plane, ray_toi_with_sphere,
        ray_toi_with_triangle,
    };
}

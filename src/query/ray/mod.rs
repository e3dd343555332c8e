//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayCast};
pub use self::ray_aabb::ray_toi_with_aabb;
pub(crate) use self::ray_aabb::slab_result;
pub use self::ray_obb::ray_toi_with_obb;
pub use self::ray_plane::ray_toi_with_plane;
pub use self::ray_sphere::ray_toi_with_sphere;
pub use self::ray_triangle::ray_toi_with_triangle;

mod ray;
mod ray_aabb;
mod ray_obb;
mod ray_plane;
mod ray_sphere;
mod ray_triangle;

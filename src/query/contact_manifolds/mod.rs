//! Contact manifold generation between oriented boxes and spheres.

pub use self::contact_manifold::ContactManifold;
pub use self::contact_manifold_shapes::contact_manifold;
pub use self::contact_manifolds_obb_obb::{
    contact_manifold_obb_obb, contact_manifold_obb_obb_with_options,
};
pub use self::contact_manifolds_obb_sphere::{
    contact_manifold_obb_sphere, contact_manifold_sphere_obb,
};
pub use self::contact_manifolds_sphere_sphere::contact_manifold_sphere_sphere;

mod contact_manifold;
mod contact_manifold_shapes;
mod contact_manifolds_obb_obb;
mod contact_manifolds_obb_sphere;
mod contact_manifolds_sphere_sphere;

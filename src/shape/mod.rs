//! Shapes supported by sat3d.

pub use self::aabb::Aabb;
pub use self::collider_shape::ColliderShape;
pub use self::line::Line;
pub use self::obb::Obb;
pub use self::plane::Plane;
pub use self::shape_error::ShapeError;
pub use self::sphere::Sphere;
pub use self::triangle::Triangle;

pub use crate::query::Ray;

pub(crate) mod aabb;
mod collider_shape;
mod line;
mod obb;
mod plane;
mod shape_error;
mod sphere;
mod triangle;

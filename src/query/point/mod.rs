//! Point inclusion and projection.

#[doc(inline)]
pub use self::point_obb::obb_contains_point_with_tolerance;
#[doc(inline)]
pub use self::point_query::{PointProjection, PointQuery};
pub(crate) use self::point_triangle::barycentric_coordinates_inside;

mod point_aabb;
mod point_line;
mod point_obb;
mod point_plane;
mod point_query;
mod point_ray;
mod point_sphere;
mod point_triangle;

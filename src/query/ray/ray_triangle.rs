use crate::math::Real;
use crate::query::point::barycentric_coordinates_inside;
use crate::query::{Ray, RayCast};
use crate::shape::Triangle;
use crate::utils;

impl RayCast for Triangle {
    #[inline]
    fn cast_ray(&self, ray: &Ray) -> Option<Real> {
        ray_toi_with_triangle(self, ray)
    }
}

/// Computes the distance along `ray` to a triangle.
///
/// Both sides of the triangle can be hit. Degenerate triangles and rays
/// parallel to the triangle plane never hit.
pub fn ray_toi_with_triangle(triangle: &Triangle, ray: &Ray) -> Option<Real> {
    let normal = triangle.normal()?;
    let nd = ray.dir().dot(&normal);

    if utils::approx_zero(nd) {
        return None;
    }

    let toi = (triangle.a - ray.origin).dot(&normal) / nd;

    if toi < 0.0 {
        return None;
    }

    let bcoords = triangle.barycentric_coordinates(&ray.point_at(toi))?;

    if barycentric_coordinates_inside(&bcoords) {
        Some(toi)
    } else {
        None
    }
}

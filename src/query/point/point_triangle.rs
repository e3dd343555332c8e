use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::{Plane, Triangle};
use crate::utils;

impl Triangle {
    /// Computes the barycentric coordinates `[u, v, w]` of the projection of `pt`
    /// on the plane of this triangle, such that the projection is `u * a + v * b + w * c`.
    ///
    /// Returns `None` if the triangle is degenerate.
    pub fn barycentric_coordinates(&self, pt: &Point<Real>) -> Option<[Real; 3]> {
        let v0 = self.b - self.a;
        let v1 = self.c - self.a;
        let v2 = pt - self.a;
        let d00 = v0.dot(&v0);
        let d01 = v0.dot(&v1);
        let d11 = v1.dot(&v1);
        let d20 = v2.dot(&v0);
        let d21 = v2.dot(&v1);
        let denom = d00 * d11 - d01 * d01;

        if utils::approx_zero(denom) {
            return None;
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Some([1.0 - v - w, v, w])
    }
}

/// Are all these barycentric coordinates within `[0, 1]`, up to [`utils::ON_SURFACE_TOLERANCE`]?
#[inline]
pub(crate) fn barycentric_coordinates_inside(bcoords: &[Real; 3]) -> bool {
    bcoords.iter().all(|c| {
        (*c >= 0.0 || utils::on_surface_eq(*c, 0.0))
            && (*c <= 1.0 || utils::on_surface_eq(*c, 1.0))
    })
}

impl PointQuery for Triangle {
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        match Plane::try_from_triangle(self) {
            Ok(plane) => {
                plane.contains_point(pt)
                    && self
                        .barycentric_coordinates(pt)
                        .is_some_and(|bcoords| barycentric_coordinates_inside(&bcoords))
            }
            Err(_) => self.edges().iter().any(|e| e.contains_point(pt)),
        }
    }

    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        if let Ok(plane) = Plane::try_from_triangle(self) {
            let proj = plane.closest_point(pt);

            if self
                .barycentric_coordinates(&proj)
                .is_some_and(|bcoords| barycentric_coordinates_inside(&bcoords))
            {
                return proj;
            }
        }

        let [ab, bc, ca] = self.edges().map(|e| e.closest_point(pt));
        let mut best = ab;

        for candidate in [bc, ca] {
            if na::distance_squared(&candidate, pt) < na::distance_squared(&best, pt) {
                best = candidate;
            }
        }

        best
    }
}

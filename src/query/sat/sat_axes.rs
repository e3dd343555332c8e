use crate::math::{Point, Real, Vector};
use crate::utils;

/// The 15 candidate separating axes of two boxes with the given local axes.
///
/// The first 3 axes are `axes1`, the next 3 are `axes2`, and axis `6 + 3 * i + j`
/// is `axes1[i].cross(&axes2[j])`. Cross products of parallel edges are zero
/// and must be skipped by the caller.
pub fn box_box_candidate_axes(
    axes1: &[Vector<Real>; 3],
    axes2: &[Vector<Real>; 3],
) -> [Vector<Real>; 15] {
    let mut result = [Vector::zeros(); 15];
    result[..3].copy_from_slice(axes1);
    result[3..6].copy_from_slice(axes2);

    for i in 0..3 {
        for j in 0..3 {
            result[6 + i * 3 + j] = axes1[i].cross(&axes2[j]);
        }
    }

    result
}

/// The 13 candidate separating axes of a box and a triangle.
///
/// These are the three box axes, the triangle normal, and the 9 cross products
/// of a box axis with a triangle edge.
pub fn box_triangle_candidate_axes(
    box_axes: &[Vector<Real>; 3],
    triangle_edges: &[Vector<Real>; 3],
) -> [Vector<Real>; 13] {
    let mut result = [Vector::zeros(); 13];
    result[..3].copy_from_slice(box_axes);
    result[3] = triangle_edges[0].cross(&triangle_edges[1]);

    for i in 0..3 {
        for j in 0..3 {
            result[4 + i * 3 + j] = box_axes[i].cross(&triangle_edges[j]);
        }
    }

    result
}

/// A separating axis candidate orthogonal to the edges `ab` and `cd`.
///
/// When the edges are parallel their cross product vanishes. The axis lying in
/// the plane of both edges and orthogonal to `ab` is used instead, which is the
/// relevant axis for coplanar triangles. Returns zero if the edges are collinear.
pub fn edge_edge_robust_axis(
    ab: &Vector<Real>,
    cd: &Vector<Real>,
    ac: &Vector<Real>,
) -> Vector<Real> {
    let result = ab.cross(cd);

    if !utils::approx_zero(result.norm_squared()) {
        return result;
    }

    let normal = ab.cross(ac);
    let result = ab.cross(&normal);

    if !utils::approx_zero(result.norm_squared()) {
        result
    } else {
        Vector::zeros()
    }
}

/// The 11 candidate separating axes of two triangles.
///
/// These are the two normals and the 9 [`edge_edge_robust_axis`] of an edge of
/// the first triangle with an edge of the second.
pub fn triangle_triangle_candidate_axes(
    vertices1: &[Point<Real>; 3],
    vertices2: &[Point<Real>; 3],
) -> [Vector<Real>; 11] {
    let edges = |v: &[Point<Real>; 3]| [v[1] - v[0], v[2] - v[1], v[0] - v[2]];
    let edges1 = edges(vertices1);
    let edges2 = edges(vertices2);

    let mut result = [Vector::zeros(); 11];
    result[0] = edges1[0].cross(&edges1[1]);
    result[1] = edges2[0].cross(&edges2[1]);

    for i in 0..3 {
        for j in 0..3 {
            let ac = vertices2[j] - vertices1[i];
            result[2 + i * 3 + j] = edge_edge_robust_axis(&edges1[i], &edges2[j], &ac);
        }
    }

    result
}

//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! Two convex shapes are disjoint if and only if there exists an axis onto which
//! their projections do not overlap. For two boxes, 15 candidate axes suffice:
//! the 3 + 3 face normals and the 9 cross products of an edge direction of each
//! box. The same machinery gives the penetration depth along each axis, from
//! which the contact manifolds pick the axis of minimum penetration.

pub use self::sat_axes::{
    box_box_candidate_axes, box_triangle_candidate_axes, edge_edge_robust_axis,
    triangle_triangle_candidate_axes,
};
pub use self::sat_penetration_depth::{penetration_depth, PenetrationDepth};
pub use self::sat_projection::{sat_find_separating_axis, IntervalProjection};

mod sat_axes;
mod sat_penetration_depth;
mod sat_projection;

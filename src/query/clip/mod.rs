//! Clipping of segments against planes and boxes.

pub use self::clip_edges_obb::clip_edges_obb;
pub use self::clip_segment_plane::clip_segment_plane;

mod clip_edges_obb;
mod clip_segment_plane;

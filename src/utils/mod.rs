//! Various unsorted geometrical and numerical operators.

pub use self::interval::Interval;
pub use self::tolerance::{approx_eq, approx_zero, on_surface_eq, ON_SURFACE_TOLERANCE};

mod interval;
mod tolerance;

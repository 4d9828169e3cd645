//! Geometry kernel
//!
//! Integer points, point-set transforms, and fixed-point trigonometry.

pub mod path;
pub mod point;
pub mod trig;

pub use path::{draw_polyline, scale_points, tween_points};
pub use point::Point;
pub use trig::{cos_lookup, sin_lookup, TRIG_MAX_ANGLE, TRIG_MAX_RATIO};

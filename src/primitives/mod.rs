//! Floating-point geometric primitives and operations.

mod point2;
mod segment2;
mod triangle2;
mod vec2;

pub use point2::Point2;
pub use segment2::{point_to_segment_distance, Segment2};
pub use triangle2::Triangle2;
pub use vec2::Vec2;

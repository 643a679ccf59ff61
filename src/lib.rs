//! sdfring - Signed distance fields, iso-contours, and rings for 2D polygons
//!
//! Evaluates the signed distance field of a simple polygon, samples it on a
//! uniform grid, extracts iso-contours with Marching Squares, stitches them into
//! ordered loops, resamples them by arc length, and triangulates the ring
//! between two contours into a flat vertex buffer ready for rendering.
//!
//! Most callers only need [`SdfProcessor`]; the individual stages are exposed in
//! their modules for direct use.

pub mod bounds;
pub mod contour;
pub mod distance;
pub mod error;
pub mod polygon;
pub mod primitives;
pub mod processor;
pub mod triangulation;

pub use bounds::Aabb2;
pub use error::SdfError;
pub use polygon::{point_in_polygon, polygon_bounds, Polygon};
pub use primitives::{point_to_segment_distance, Point2, Segment2, Triangle2, Vec2};
pub use processor::{ContourResult, RingResult, SdfConfig, SdfProcessor};

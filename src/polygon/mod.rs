//! Polygon type, winding-number containment, and padded bounds.
//!
//! # Example
//!
//! ```
//! use sdfring::polygon::{point_in_polygon, Polygon};
//! use sdfring::Point2;
//!
//! let triangle = Polygon::new(vec![
//!     Point2::new(0.0, 0.5),
//!     Point2::new(-0.5, -0.5),
//!     Point2::new(0.5, -0.5),
//! ]);
//!
//! assert!(triangle.contains(Point2::new(0.0, 0.0)));
//! assert!(!point_in_polygon(Point2::new(1.0, 1.0), &triangle.vertices));
//! ```

mod core;

pub use self::core::{point_in_polygon, polygon_bounds, Polygon, BOUNDS_MARGIN};

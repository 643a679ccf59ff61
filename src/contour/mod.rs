//! Iso-contour extraction and post-processing.
//!
//! The pipeline turns a sampled [`SdfGrid`](crate::distance::SdfGrid) into a
//! usable closed outline:
//!
//! 1. [`marching_squares`] emits an unordered segment soup for one iso-value.
//! 2. [`connect_segments`] links the soup into one ordered loop.
//! 3. [`resample_contour`] spaces the loop's points evenly by arc length.
//!
//! Only a single loop is recovered; grids whose iso-line splits into several
//! components yield the component containing the first segment.

mod marching;
mod resample;
mod stitch;

pub use marching::{extract_iso_contour, marching_squares};
pub use resample::{closed_length, resample_contour, CLOSURE_EPSILON};
pub use stitch::{connect_segments, CONNECT_EPSILON};

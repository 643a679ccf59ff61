//! Error types for sdfring operations.

use thiserror::Error;

/// Errors that can occur while building grids, contours, or rings.
///
/// Every variant is recoverable: retrying with another polygon, threshold, or
/// configuration is always allowed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SdfError {
    /// The polygon has fewer than three vertices, or none was set.
    #[error("invalid polygon: {vertices} vertices, at least 3 required")]
    InvalidPolygon {
        /// Number of vertices supplied.
        vertices: usize,
    },

    /// Ring thresholds are not strictly ordered.
    #[error("outer threshold {outer} must be greater than inner threshold {inner}")]
    InvalidThresholds {
        /// Requested outer threshold.
        outer: f64,
        /// Requested inner threshold.
        inner: f64,
    },

    /// The configuration cannot produce a usable grid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        reason: &'static str,
    },

    /// Marching Squares found fewer than two segments at the threshold.
    #[error("no contour found at threshold {threshold}")]
    NoContour {
        /// Threshold that was searched.
        threshold: f64,
    },

    /// Segment stitching collapsed to fewer than three points.
    #[error("segment stitching produced only {points} points")]
    StitchFailed {
        /// Number of points in the stitched chain.
        points: usize,
    },

    /// The contours could not be resampled into a triangle strip.
    #[error("ring triangulation failed")]
    TriangulationFailed,
}

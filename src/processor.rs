//! High-level polygon → contour → ring processing with a cached SDF grid.
//!
//! [`SdfProcessor`] owns one polygon and one [`SdfConfig`]. The SDF grid is
//! built on the first request that needs it and dropped whenever the polygon
//! or the configuration changes, so callers never deal with grid sizing,
//! Marching Squares, stitching, or resampling directly.
//!
//! # Example
//!
//! ```
//! use sdfring::{Point2, SdfProcessor};
//!
//! let mut processor: SdfProcessor<f32> = SdfProcessor::default();
//! assert!(processor.set_polygon(&[
//!     Point2::new(-0.5, -0.5),
//!     Point2::new(0.5, -0.5),
//!     Point2::new(0.5, 0.5),
//!     Point2::new(-0.5, 0.5),
//! ]));
//!
//! let boundary = processor.extract_contour(0.0);
//! assert!(boundary.is_valid);
//!
//! let ring = processor.generate_ring(0.2, 0.0);
//! assert!(ring.is_valid);
//! assert_eq!(ring.triangle_vertices.len(), ring.triangle_count * 3);
//! ```

use crate::bounds::Aabb2;
use crate::contour::{connect_segments, marching_squares, resample_contour};
use crate::distance::{generate_sdf_grid, sdf_polygon, SdfGrid};
use crate::error::SdfError;
use crate::polygon::Polygon;
use crate::primitives::Point2;
use crate::triangulation::{triangles_to_vertices, triangulate_ring};
use num_traits::Float;

/// Tunables for grid construction and resampling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SdfConfig<F> {
    /// Grid cell size in world units.
    pub grid_size: F,
    /// World-space margin added around the polygon bounds before gridding.
    pub padding: F,
    /// Upper limit on grid width and height, in samples.
    pub max_grid_size: usize,
    /// Default point count for [`SdfProcessor::resample`].
    ///
    /// Ring triangulation picks its own count and ignores this value.
    pub resample_points: usize,
}

impl<F: Float> Default for SdfConfig<F> {
    fn default() -> Self {
        Self {
            grid_size: F::from(0.1).unwrap(),
            padding: F::from(0.5).unwrap(),
            max_grid_size: 512,
            resample_points: 64,
        }
    }
}

impl<F: Float> SdfConfig<F> {
    /// Sets the grid cell size.
    pub fn with_grid_size(mut self, grid_size: F) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Sets the padding around the polygon bounds.
    pub fn with_padding(mut self, padding: F) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the maximum grid dimension.
    pub fn with_max_grid_size(mut self, max_grid_size: usize) -> Self {
        self.max_grid_size = max_grid_size;
        self
    }

    /// Sets the default resampling point count.
    pub fn with_resample_points(mut self, resample_points: usize) -> Self {
        self.resample_points = resample_points;
        self
    }

    /// Checks that a grid can be built from this configuration.
    pub fn validate(&self) -> Result<(), SdfError> {
        if !self.grid_size.is_finite() || self.grid_size <= F::zero() {
            return Err(SdfError::InvalidConfig {
                reason: "grid size must be finite and positive",
            });
        }
        if !self.padding.is_finite() {
            return Err(SdfError::InvalidConfig {
                reason: "padding must be finite",
            });
        }
        if self.max_grid_size == 0 {
            return Err(SdfError::InvalidConfig {
                reason: "max grid size must be at least 1",
            });
        }
        Ok(())
    }

    /// Number of samples along an extent of `range` world units.
    ///
    /// `floor(range / grid_size) + 1`, capped at `max_grid_size`.
    fn samples_for(&self, range: F) -> Result<usize, SdfError> {
        let cap = F::from(self.max_grid_size).unwrap();
        (range / self.grid_size)
            .floor()
            .min(cap)
            .to_usize()
            .map(|cells| (cells + 1).min(self.max_grid_size))
            .ok_or(SdfError::InvalidConfig {
                reason: "padded polygon bounds cannot be gridded",
            })
    }
}

/// Result of [`SdfProcessor::extract_contour`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContourResult<F> {
    /// Ordered, implicitly closed contour.
    pub ordered_points: Vec<Point2<F>>,
    /// Raw Marching Squares segments, two points per segment.
    pub line_segments: Vec<Point2<F>>,
    /// Whether extraction succeeded.
    pub is_valid: bool,
}

impl<F> ContourResult<F> {
    /// An empty, failed result.
    pub fn invalid() -> Self {
        Self {
            ordered_points: Vec::new(),
            line_segments: Vec::new(),
            is_valid: false,
        }
    }
}

/// Result of [`SdfProcessor::generate_ring`].
#[derive(Debug, Clone, PartialEq)]
pub struct RingResult<F> {
    /// Triangle corners, three consecutive points per triangle.
    pub triangle_vertices: Vec<Point2<F>>,
    /// Number of triangles in `triangle_vertices`.
    pub triangle_count: usize,
    /// Stitched contour at the outer threshold.
    pub outer_contour: Vec<Point2<F>>,
    /// Stitched contour at the inner threshold.
    pub inner_contour: Vec<Point2<F>>,
    /// Whether generation succeeded.
    pub is_valid: bool,
}

impl<F> RingResult<F> {
    /// An empty, failed result.
    pub fn invalid() -> Self {
        Self {
            triangle_vertices: Vec::new(),
            triangle_count: 0,
            outer_contour: Vec::new(),
            inner_contour: Vec::new(),
            is_valid: false,
        }
    }
}

/// Owns a polygon, its configuration, and the lazily built SDF grid.
///
/// Not meant to be shared between threads; use one processor per thread.
#[derive(Debug, Clone)]
pub struct SdfProcessor<F = f32> {
    polygon: Polygon<F>,
    config: SdfConfig<F>,
    grid: Option<SdfGrid<F>>,
}

impl<F: Float> Default for SdfProcessor<F> {
    fn default() -> Self {
        Self::new(SdfConfig::default())
    }
}

impl<F: Float> SdfProcessor<F> {
    /// Creates a processor without a polygon.
    pub fn new(config: SdfConfig<F>) -> Self {
        Self {
            polygon: Polygon::empty(),
            config,
            grid: None,
        }
    }

    /// Replaces the polygon. Returns false and clears it if fewer than 3 points are given.
    pub fn set_polygon(&mut self, points: &[Point2<F>]) -> bool {
        match self.try_set_polygon(points) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("rejected polygon: {}", err);
                false
            }
        }
    }

    /// Replaces the polygon, reporting why it was rejected.
    ///
    /// The cached grid is dropped either way; a rejected polygon leaves the
    /// processor without any polygon.
    pub fn try_set_polygon(&mut self, points: &[Point2<F>]) -> Result<(), SdfError> {
        self.invalidate_grid();

        if points.len() < 3 {
            self.polygon = Polygon::empty();
            return Err(SdfError::InvalidPolygon {
                vertices: points.len(),
            });
        }

        self.polygon = Polygon::new(points.to_vec());
        Ok(())
    }

    /// Returns the current polygon vertices (empty if none is set).
    pub fn polygon(&self) -> &[Point2<F>] {
        &self.polygon.vertices
    }

    /// Returns true if a polygon with at least 3 vertices is set.
    pub fn is_valid(&self) -> bool {
        self.polygon.is_valid()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SdfConfig<F> {
        &self.config
    }

    /// Replaces the configuration and drops the cached grid.
    pub fn set_config(&mut self, config: SdfConfig<F>) {
        self.config = config;
        self.invalidate_grid();
    }

    /// Returns true if a grid is currently cached.
    pub fn has_cached_grid(&self) -> bool {
        self.grid.is_some()
    }

    /// Exact signed distance from `point` to the polygon, without the grid.
    ///
    /// Returns zero when no polygon is set.
    pub fn query_sdf_value(&self, point: Point2<F>) -> F {
        if !self.is_valid() {
            return F::zero();
        }
        sdf_polygon(point, &self.polygon.vertices)
    }

    /// Polygon bounding box with the fixed 0.1 margin, or all zeros without a polygon.
    pub fn bounds(&self) -> Aabb2<F> {
        if !self.is_valid() {
            return Aabb2::zero();
        }
        self.polygon.bounds()
    }

    /// Returns the cached SDF grid, building it first if needed.
    pub fn sdf_grid(&mut self) -> Result<&SdfGrid<F>, SdfError> {
        let grid = match self.grid.take() {
            Some(grid) => grid,
            None => self.build_grid()?,
        };
        Ok(self.grid.insert(grid))
    }

    /// Extracts the closed iso-contour at `threshold`.
    pub fn extract_contour(&mut self, threshold: F) -> ContourResult<F> {
        match self.try_extract_contour(threshold) {
            Ok(contour) => contour,
            Err(err) => {
                log::warn!("contour extraction failed: {}", err);
                ContourResult::invalid()
            }
        }
    }

    /// Extracts the closed iso-contour at `threshold`, reporting why it failed.
    pub fn try_extract_contour(&mut self, threshold: F) -> Result<ContourResult<F>, SdfError> {
        self.require_polygon()?;

        let grid = self.sdf_grid()?;
        let line_segments = marching_squares(grid, threshold);

        if line_segments.len() < 4 {
            return Err(SdfError::NoContour {
                threshold: to_f64(threshold),
            });
        }

        let ordered_points = connect_segments(&line_segments);
        if ordered_points.len() < 3 {
            return Err(SdfError::StitchFailed {
                points: ordered_points.len(),
            });
        }

        log::debug!(
            "contour at {}: {} segments, {} points",
            to_f64(threshold),
            line_segments.len() / 2,
            ordered_points.len()
        );

        Ok(ContourResult {
            ordered_points,
            line_segments,
            is_valid: true,
        })
    }

    /// Triangulates the ring between the contours at `outer_threshold` and `inner_threshold`.
    pub fn generate_ring(&mut self, outer_threshold: F, inner_threshold: F) -> RingResult<F> {
        match self.try_generate_ring(outer_threshold, inner_threshold) {
            Ok(ring) => ring,
            Err(err) => {
                log::warn!("ring generation failed: {}", err);
                RingResult::invalid()
            }
        }
    }

    /// Triangulates a ring, reporting why it failed.
    ///
    /// `outer_threshold` must be strictly greater than `inner_threshold`; this is
    /// checked before any grid work.
    pub fn try_generate_ring(
        &mut self,
        outer_threshold: F,
        inner_threshold: F,
    ) -> Result<RingResult<F>, SdfError> {
        self.require_polygon()?;

        // Also rejects NaN thresholds
        if !(outer_threshold > inner_threshold) {
            return Err(SdfError::InvalidThresholds {
                outer: to_f64(outer_threshold),
                inner: to_f64(inner_threshold),
            });
        }

        let outer = self.try_extract_contour(outer_threshold)?;
        let inner = self.try_extract_contour(inner_threshold)?;

        let triangles = triangulate_ring(&outer.ordered_points, &inner.ordered_points);
        if triangles.is_empty() {
            return Err(SdfError::TriangulationFailed);
        }

        Ok(RingResult {
            triangle_vertices: triangles_to_vertices(&triangles),
            triangle_count: triangles.len(),
            outer_contour: outer.ordered_points,
            inner_contour: inner.ordered_points,
            is_valid: true,
        })
    }

    /// Resamples a contour to the configured `resample_points` count.
    pub fn resample(&self, contour: &[Point2<F>]) -> Vec<Point2<F>> {
        resample_contour(contour, self.config.resample_points)
    }

    fn require_polygon(&self) -> Result<(), SdfError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SdfError::InvalidPolygon {
                vertices: self.polygon.len(),
            })
        }
    }

    fn build_grid(&self) -> Result<SdfGrid<F>, SdfError> {
        self.require_polygon()?;
        self.config.validate()?;

        let bounds = self.polygon.bounds().expanded(self.config.padding);
        let width = self.config.samples_for(bounds.width())?;
        let height = self.config.samples_for(bounds.height())?;

        let mut grid = SdfGrid::try_new(width, height, bounds).ok_or(SdfError::InvalidConfig {
            reason: "grid dimensions are too large to allocate",
        })?;

        log::debug!("building {}x{} SDF grid", width, height);
        generate_sdf_grid(width, height, bounds, &self.polygon.vertices, &mut grid.values);
        Ok(grid)
    }

    fn invalidate_grid(&mut self) {
        if self.grid.take().is_some() {
            log::debug!("SDF grid cache invalidated");
        }
    }
}

#[inline]
fn to_f64<F: Float>(v: F) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

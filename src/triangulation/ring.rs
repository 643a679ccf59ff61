//! Triangle strips between two closed contours.
//!
//! Both contours are resampled to a common point count, then corresponding
//! points are joined into quads, each split into two triangles:
//!
//! ```text
//!  outer[i] ----- outer[i+1]
//!     |  \           |
//!     |    \         |
//!     |      \       |
//!  inner[i] ----- inner[i+1]
//! ```
//!
//! Triangle orientation follows the input; if the contours wind in opposite
//! directions the strip twists. Consumers should not cull back faces.

use crate::contour::resample_contour;
use crate::primitives::{Point2, Triangle2};
use num_traits::Float;

/// Lower bound on the number of points each contour is resampled to.
pub const MIN_RING_POINTS: usize = 32;

/// Triangulates the annulus between an outer and an inner closed contour.
///
/// Both contours are resampled to `max(outer.len(), inner.len(), 32)` points.
/// With `n` the smaller of the two resampled counts, the result holds exactly
/// `2 * n` triangles whose corners are all resampled points. Returns an empty
/// vector if either contour has fewer than 3 points or cannot be resampled.
///
/// # Example
///
/// ```
/// use sdfring::triangulation::triangulate_ring;
/// use sdfring::Point2;
///
/// let square = |h: f64| vec![
///     Point2::new(-h, -h),
///     Point2::new(h, -h),
///     Point2::new(h, h),
///     Point2::new(-h, h),
/// ];
/// let triangles = triangulate_ring(&square(2.0), &square(1.0));
/// assert_eq!(triangles.len(), 64);
/// ```
pub fn triangulate_ring<F: Float>(outer: &[Point2<F>], inner: &[Point2<F>]) -> Vec<Triangle2<F>> {
    let mut triangles = Vec::new();

    if outer.len() < 3 || inner.len() < 3 {
        return triangles;
    }

    let target = outer.len().max(inner.len()).max(MIN_RING_POINTS);
    let outer = resample_contour(outer, target);
    let inner = resample_contour(inner, target);

    if outer.len() < 3 || inner.len() < 3 {
        return triangles;
    }

    let n = outer.len().min(inner.len());
    triangles.reserve(2 * n);

    for i in 0..n {
        let next = (i + 1) % n;
        triangles.push(Triangle2::new(outer[i], inner[i], outer[next]));
        triangles.push(Triangle2::new(outer[next], inner[i], inner[next]));
    }

    triangles
}

/// Flattens triangles into a vertex list, three consecutive points per triangle.
pub fn triangles_to_vertices<F: Float>(triangles: &[Triangle2<F>]) -> Vec<Point2<F>> {
    triangles.iter().flat_map(|t| t.vertices()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(half: f64) -> Vec<Point2<f64>> {
        vec![
            Point2::new(-half, -half),
            Point2::new(half, -half),
            Point2::new(half, half),
            Point2::new(-half, half),
        ]
    }

    fn circle(radius: f64, n: usize) -> Vec<Point2<f64>> {
        (0..n)
            .map(|i| {
                let a = i as f64 / n as f64 * std::f64::consts::TAU;
                Point2::new(radius * a.cos(), radius * a.sin())
            })
            .collect()
    }

    #[test]
    fn test_triangle_count_uses_minimum_of_32() {
        let triangles = triangulate_ring(&square(2.0), &square(1.0));
        assert_eq!(triangles.len(), 2 * MIN_RING_POINTS);
    }

    #[test]
    fn test_triangle_count_follows_larger_contour() {
        let outer = circle(2.0, 50);
        let inner = circle(1.0, 40);
        let triangles = triangulate_ring(&outer, &inner);
        assert_eq!(triangles.len(), 100);
    }

    #[test]
    fn test_vertices_are_resampled_points() {
        let outer = square(2.0);
        let inner = square(1.0);
        let resampled_outer = resample_contour(&outer, MIN_RING_POINTS);
        let resampled_inner = resample_contour(&inner, MIN_RING_POINTS);

        for tri in triangulate_ring(&outer, &inner) {
            for v in tri.vertices() {
                assert!(
                    resampled_outer.contains(&v) || resampled_inner.contains(&v),
                    "{:?} was not produced by resampling",
                    v
                );
            }
        }
    }

    #[test]
    fn test_strip_layout() {
        let outer = square(2.0);
        let inner = square(1.0);
        let o = resample_contour(&outer, MIN_RING_POINTS);
        let i = resample_contour(&inner, MIN_RING_POINTS);
        let triangles = triangulate_ring(&outer, &inner);

        assert_eq!(triangles[0], Triangle2::new(o[0], i[0], o[1]));
        assert_eq!(triangles[1], Triangle2::new(o[1], i[0], i[1]));

        // The strip closes back onto the first points
        let last = triangles[triangles.len() - 1];
        assert_eq!(last, Triangle2::new(o[0], i[31], i[0]));
    }

    #[test]
    fn test_covers_annulus_area() {
        let outer = square(2.0);
        let inner = square(1.0);
        let area: f64 = triangulate_ring(&outer, &inner)
            .iter()
            .map(|t| t.signed_area2().abs() / 2.0)
            .sum();
        assert!((area - 12.0).abs() < 1e-9, "area = {}", area);
    }

    #[test]
    fn test_invalid_inputs() {
        let two = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(triangulate_ring(&square(1.0), &two).is_empty());
        assert!(triangulate_ring(&two, &square(1.0)).is_empty());

        // Collapsed inner contour cannot be resampled
        let collapsed = vec![Point2::new(0.0, 0.0); 4];
        assert!(triangulate_ring(&square(1.0), &collapsed).is_empty());
    }

    #[test]
    fn test_triangles_to_vertices() {
        let triangles = triangulate_ring(&square(2.0), &square(1.0));
        let vertices = triangles_to_vertices(&triangles);
        assert_eq!(vertices.len(), triangles.len() * 3);
        assert_eq!(vertices[3], triangles[1].a);
        assert_eq!(vertices[5], triangles[1].c);
    }
}

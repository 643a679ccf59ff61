//! Signed distance field computations.
//!
//! Signed distance fields (SDFs) represent shapes as scalar fields where each point
//! stores the signed distance to the nearest surface. Positive values are outside,
//! negative values are inside.

use crate::polygon::{point_in_polygon, Polygon};
use crate::primitives::{point_to_segment_distance, Point2};
use num_traits::Float;

/// Trait for shapes that can compute signed distance.
pub trait Sdf2<F: Float> {
    /// Returns the signed distance from point `p` to this shape.
    ///
    /// - Positive: outside the shape
    /// - Zero: on the boundary
    /// - Negative: inside the shape
    fn signed_distance(&self, p: Point2<F>) -> F;

    /// Returns true if the point is inside the shape (negative distance).
    fn contains(&self, p: Point2<F>) -> bool {
        self.signed_distance(p) < F::zero()
    }
}

/// Signed distance to a closed polygon.
///
/// Uses the winding number to determine inside/outside.
/// Negative inside, positive outside.
///
/// # Arguments
///
/// * `p` - Query point
/// * `vertices` - Polygon vertices in order (first vertex should NOT be repeated at end)
///
/// # Returns
///
/// Signed distance, or `F::max_value()` when fewer than three vertices are given.
pub fn sdf_polygon<F: Float>(p: Point2<F>, vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::max_value();
    }

    let n = vertices.len();
    let dist = (0..n)
        .map(|i| point_to_segment_distance(p, vertices[i], vertices[(i + 1) % n]))
        .fold(F::max_value(), F::min);

    if point_in_polygon(p, vertices) {
        -dist
    } else {
        dist
    }
}

impl<F: Float> Sdf2<F> for Polygon<F> {
    fn signed_distance(&self, p: Point2<F>) -> F {
        sdf_polygon(p, &self.vertices)
    }
}

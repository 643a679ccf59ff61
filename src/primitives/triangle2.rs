//! 2D triangle type.

use super::Point2;
use num_traits::Float;

/// A triangle given by three corner points.
///
/// Corners keep the order they were constructed with; no winding is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2<F> {
    pub a: Point2<F>,
    pub b: Point2<F>,
    pub c: Point2<F>,
}

impl<F: Float> Triangle2<F> {
    /// Creates a new triangle.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// Returns the corners in construction order.
    #[inline]
    pub fn vertices(self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// Twice the signed area. Positive for counter-clockwise corners.
    #[inline]
    pub fn signed_area2(self) -> F {
        (self.b - self.a).cross(self.c - self.a)
    }
}

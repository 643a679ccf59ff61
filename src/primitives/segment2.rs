//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// Squared length below which a segment is treated as a single point.
const DEGENERATE_LENGTH_SQ: f64 = 1e-10;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `start`
    /// - `t = 1` returns `end`
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Computes the closest point on the segment to the given point.
    ///
    /// Returns a tuple of (closest_point, parameter_t) where t is in [0, 1].
    /// Segments shorter than `sqrt(1e-10)` collapse to their start point.
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.length_squared();

        if len_sq < F::from(DEGENERATE_LENGTH_SQ).unwrap() {
            return (self.start, F::zero());
        }

        // Project p onto the line, clamping to [0, 1]
        let t = (p - self.start).dot(v) / len_sq;
        let t_clamped = t.max(F::zero()).min(F::one());

        (self.point_at(t_clamped), t_clamped)
    }

    /// Computes the distance from a point to this segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance(closest)
    }
}

/// Euclidean distance from `p` to the closest point on segment `ab`.
///
/// ```
/// use sdfring::{point_to_segment_distance, Point2};
///
/// let d = point_to_segment_distance(
///     Point2::new(5.0_f64, 3.0),
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
/// );
/// assert!((d - 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn point_to_segment_distance<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>) -> F {
    Segment2::new(a, b).distance_to_point(p)
}

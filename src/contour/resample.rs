//! Arc-length resampling of closed contours.

use crate::primitives::Point2;
use num_traits::Float;

/// Gaps shorter than this (world units) count as already closed.
pub const CLOSURE_EPSILON: f64 = 0.001;

/// Total length of a contour treated as closed.
///
/// The closing edge from the last point back to the first is included unless
/// the two already coincide within [`CLOSURE_EPSILON`].
pub fn closed_length<F: Float>(contour: &[Point2<F>]) -> F {
    if contour.len() < 2 {
        return F::zero();
    }
    closed_walk(contour)
        .windows(2)
        .fold(F::zero(), |acc, w| acc + w[0].distance(w[1]))
}

/// Redistributes a closed contour to `target` points at equal arc-length spacing.
///
/// The first output point is always `contour[0]`; the rest are linearly
/// interpolated along the edges every `length / target` units, several per
/// edge if edges are long. Returns an empty vector for fewer than two input
/// points, `target < 3`, or a contour shorter than [`CLOSURE_EPSILON`].
///
/// ```
/// use sdfring::contour::resample_contour;
/// use sdfring::Point2;
///
/// let square = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// let resampled = resample_contour(&square, 8);
/// assert_eq!(resampled.len(), 8);
/// assert!((resampled[1].x - 0.5).abs() < 1e-12);
/// ```
pub fn resample_contour<F: Float>(contour: &[Point2<F>], target: usize) -> Vec<Point2<F>> {
    let mut resampled = Vec::new();

    if contour.len() < 2 || target < 3 {
        return resampled;
    }

    let total = closed_length(contour);
    if total < F::from(CLOSURE_EPSILON).unwrap() {
        return resampled;
    }

    let step = total / F::from(target).unwrap();
    resampled.reserve(target);
    resampled.push(contour[0]);

    let mut walked = F::zero();
    let mut next_sample = step;

    for edge in closed_walk(contour).windows(2) {
        let (p0, p1) = (edge[0], edge[1]);
        let edge_len = p0.distance(p1);

        if edge_len > F::zero() {
            while walked + edge_len >= next_sample && resampled.len() < target {
                let t = (next_sample - walked) / edge_len;
                resampled.push(p0.lerp(p1, t));
                next_sample = next_sample + step;
            }
        }

        walked = walked + edge_len;

        if resampled.len() >= target {
            break;
        }
    }

    resampled
}

/// The contour with its first point repeated at the end, unless already closed.
fn closed_walk<F: Float>(contour: &[Point2<F>]) -> Vec<Point2<F>> {
    let mut walk = contour.to_vec();
    if let (Some(&first), Some(&last)) = (contour.first(), contour.last()) {
        if last.distance(first) > F::from(CLOSURE_EPSILON).unwrap() {
            walk.push(first);
        }
    }
    walk
}

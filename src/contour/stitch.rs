//! Linking a segment soup into one ordered loop.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Endpoints closer than this (world units) are considered the same point.
pub const CONNECT_EPSILON: f64 = 0.001;

/// Links unordered segments into a single ordered, implicitly closed contour.
///
/// `soup` is read as consecutive point pairs; a trailing unpaired point is
/// ignored. The chain starts with the first segment and greedily appends the far
/// end of the first unused segment (in input order) that touches the current
/// tail within [`CONNECT_EPSILON`]. It stops when nothing connects or when it
/// holds twice as many points as there are segments. A final point that repeats
/// the first one is dropped.
///
/// Returns an empty vector for fewer than two segments.
///
/// Matching is a linear scan per step, O(E²) overall.
pub fn connect_segments<F: Float>(soup: &[Point2<F>]) -> Vec<Point2<F>> {
    let mut contour = Vec::new();

    let segments: Vec<Segment2<F>> = soup
        .chunks_exact(2)
        .map(|pair| Segment2::new(pair[0], pair[1]))
        .collect();

    if segments.len() < 2 {
        return contour;
    }

    let eps = F::from(CONNECT_EPSILON).unwrap();
    let mut used = vec![false; segments.len()];
    let max_points = segments.len() * 2;

    contour.push(segments[0].start);
    contour.push(segments[0].end);
    used[0] = true;
    let mut tail = segments[0].end;

    while contour.len() < max_points {
        let next = segments
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(i, _)| !used[*i])
            .find_map(|(i, seg)| {
                if tail.is_near(seg.start, eps) {
                    Some((i, seg.end))
                } else if tail.is_near(seg.end, eps) {
                    Some((i, seg.start))
                } else {
                    None
                }
            });

        match next {
            Some((i, far)) => {
                used[i] = true;
                contour.push(far);
                tail = far;
            }
            None => break,
        }
    }

    if contour.len() > 1 && contour[contour.len() - 1].is_near(contour[0], eps) {
        contour.pop();
    }

    contour
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soup_from_loop(points: &[Point2<f64>]) -> Vec<Point2<f64>> {
        let n = points.len();
        (0..n)
            .flat_map(|i| [points[i], points[(i + 1) % n]])
            .collect()
    }

    fn hexagon() -> Vec<Point2<f64>> {
        (0..6)
            .map(|i| {
                let a = i as f64 * std::f64::consts::PI / 3.0;
                Point2::new(a.cos(), a.sin())
            })
            .collect()
    }

    #[test]
    fn test_reconstructs_ordered_loop() {
        let hex = hexagon();
        let contour = connect_segments(&soup_from_loop(&hex));
        assert_eq!(contour, hex);
    }

    #[test]
    fn test_reconstructs_shuffled_and_flipped_segments() {
        let hex = hexagon();
        // Segments out of order, some reversed
        let soup = vec![
            hex[0], hex[1], //
            hex[3], hex[2], //
            hex[5], hex[0], //
            hex[1], hex[2], //
            hex[4], hex[5], //
            hex[4], hex[3], //
        ];
        let contour = connect_segments(&soup);
        assert_eq!(contour.len(), 6);
        assert_eq!(contour, hex);
    }

    #[test]
    fn test_point_count_matches_segment_count() {
        let square = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let soup = soup_from_loop(&square);
        let contour = connect_segments(&soup);
        assert_eq!(contour.len(), soup.len() / 2);
    }

    #[test]
    fn test_endpoints_within_epsilon_connect() {
        let soup = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0005, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0005),
        ];
        let contour = connect_segments(&soup);
        assert_eq!(contour.len(), 3);
        assert_eq!(contour[2], Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_first_match_wins() {
        // Two candidates touch the tail; the earlier one in the input is taken
        let soup = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 5.0),
        ];
        let contour = connect_segments(&soup);
        assert_eq!(contour[2], Point2::new(2.0, 0.0));
        assert_eq!(contour.len(), 3);
    }

    #[test]
    fn test_open_chain_stops_at_gap() {
        let soup = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(5.0, 5.0),
            Point2::new(6.0, 5.0),
        ];
        let contour = connect_segments(&soup);
        assert_eq!(contour, vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
    }

    #[test]
    fn test_too_few_segments() {
        let one = vec![Point2::new(0.0_f32, 0.0), Point2::new(1.0, 0.0)];
        assert!(connect_segments(&one).is_empty());

        let odd = vec![
            Point2::new(0.0_f32, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
        ];
        assert!(connect_segments(&odd).is_empty());
    }
}

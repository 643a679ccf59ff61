//! Marching Squares iso-contour extraction.
//!
//! Each 2×2 block of grid samples is classified against the iso-value and the
//! crossings on its edges are linearly interpolated. The result is an unordered
//! "segment soup": consecutive point pairs `(2i, 2i + 1)` are independent
//! segments.
//!
//! Samples are treated as cell *corners* here, so a grid of `width` samples spans
//! `bounds` with `width - 1` intervals. [`SdfGrid`] samples cell *centers* with
//! `width` intervals; the two spacings are intentionally different and extracted
//! contours are therefore slightly stretched towards the grid border.

use crate::bounds::Aabb2;
use crate::distance::SdfGrid;
use crate::primitives::Point2;
use num_traits::Float;

/// Cell edges, counter-clockwise from the bottom.
const BOTTOM: usize = 0;
const RIGHT: usize = 1;
const TOP: usize = 2;
const LEFT: usize = 3;

/// Edge pairs to connect for each of the 16 corner configurations.
///
/// Saddle cases 5 and 10 connect both pairs instead of disambiguating with a
/// center sample.
const EDGE_TABLE: [&[(usize, usize)]; 16] = [
    &[],
    &[(BOTTOM, LEFT)],
    &[(BOTTOM, RIGHT)],
    &[(RIGHT, LEFT)],
    &[(RIGHT, TOP)],
    &[(BOTTOM, LEFT), (RIGHT, TOP)],
    &[(BOTTOM, TOP)],
    &[(TOP, LEFT)],
    &[(TOP, LEFT)],
    &[(BOTTOM, TOP)],
    &[(BOTTOM, RIGHT), (TOP, LEFT)],
    &[(RIGHT, TOP)],
    &[(RIGHT, LEFT)],
    &[(BOTTOM, RIGHT)],
    &[(BOTTOM, LEFT)],
    &[],
];

/// Extracts the iso-contour of a sampled grid as a segment soup.
///
/// ```
/// use sdfring::contour::marching_squares;
/// use sdfring::distance::SdfGrid;
/// use sdfring::{Aabb2, Point2};
///
/// let square = vec![
///     Point2::new(-0.5_f64, -0.5),
///     Point2::new(0.5, -0.5),
///     Point2::new(0.5, 0.5),
///     Point2::new(-0.5, 0.5),
/// ];
/// let grid = SdfGrid::sample_polygon(&square, 32, 32, Aabb2::from_extents(-1.0, 1.0, -1.0, 1.0));
/// let soup = marching_squares(&grid, 0.0);
/// assert!(soup.len() >= 4 && soup.len() % 2 == 0);
/// ```
pub fn marching_squares<F: Float>(grid: &SdfGrid<F>, iso: F) -> Vec<Point2<F>> {
    extract_iso_contour(&grid.values, grid.width, grid.height, grid.bounds, iso)
}

/// Extracts the iso-contour of a raw row-major sample slice.
///
/// Returns an empty soup when either dimension is below 2 or `values` holds
/// fewer than `width * height` samples.
pub fn extract_iso_contour<F: Float>(
    values: &[F],
    width: usize,
    height: usize,
    bounds: Aabb2<F>,
    iso: F,
) -> Vec<Point2<F>> {
    let mut soup = Vec::new();

    if width < 2 || height < 2 {
        return soup;
    }
    match width.checked_mul(height) {
        Some(len) if values.len() >= len => {}
        _ => return soup,
    }

    let cell_w = bounds.width() / F::from(width - 1).unwrap();
    let cell_h = bounds.height() / F::from(height - 1).unwrap();

    for y in 0..height - 1 {
        for x in 0..width - 1 {
            let corners = [
                values[y * width + x],           // bottom-left
                values[y * width + x + 1],       // bottom-right
                values[(y + 1) * width + x + 1], // top-right
                values[(y + 1) * width + x],     // top-left
            ];

            let case = case_index(corners, iso);
            let pairs = EDGE_TABLE[case];
            if pairs.is_empty() {
                continue;
            }

            let x0 = bounds.min.x + F::from(x).unwrap() * cell_w;
            let x1 = bounds.min.x + F::from(x + 1).unwrap() * cell_w;
            let y0 = bounds.min.y + F::from(y).unwrap() * cell_h;
            let y1 = bounds.min.y + F::from(y + 1).unwrap() * cell_h;
            let cell = Aabb2::from_extents(x0, x1, y0, y1);

            for &(a, b) in pairs {
                soup.push(edge_crossing(a, cell, corners, iso));
                soup.push(edge_crossing(b, cell, corners, iso));
            }
        }
    }

    soup
}

/// Four-bit classification, bit `i` set when corner `i` lies above `iso`.
#[inline]
fn case_index<F: Float>(corners: [F; 4], iso: F) -> usize {
    let mut case = 0;
    for (bit, v) in corners.into_iter().enumerate() {
        if v > iso {
            case |= 1 << bit;
        }
    }
    case
}

/// Interpolated iso crossing on one edge of a cell.
///
/// Only called for edges the case table connects, whose end samples sit on
/// opposite sides of `iso`, so the denominator is never zero.
fn edge_crossing<F: Float>(edge: usize, cell: Aabb2<F>, corners: [F; 4], iso: F) -> Point2<F> {
    let [v0, v1, v2, v3] = corners;
    let (x0, x1, y0, y1) = cell.extents();
    let lerp = |a: F, b: F, t: F| a + (b - a) * t;

    match edge {
        BOTTOM => Point2::new(lerp(x0, x1, (iso - v0) / (v1 - v0)), y0),
        RIGHT => Point2::new(x1, lerp(y0, y1, (iso - v1) / (v2 - v1))),
        TOP => Point2::new(lerp(x0, x1, (iso - v3) / (v2 - v3)), y1),
        _ => Point2::new(x0, lerp(y0, y1, (iso - v0) / (v3 - v0))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_cell() -> Aabb2<f64> {
        Aabb2::from_extents(0.0, 1.0, 0.0, 1.0)
    }

    #[test]
    fn test_case_index_bit_order() {
        assert_eq!(case_index([1.0, -1.0, -1.0, -1.0], 0.0), 1);
        assert_eq!(case_index([-1.0, 1.0, -1.0, -1.0], 0.0), 2);
        assert_eq!(case_index([-1.0, -1.0, 1.0, -1.0], 0.0), 4);
        assert_eq!(case_index([-1.0, -1.0, -1.0, 1.0], 0.0), 8);
        assert_eq!(case_index([1.0, 1.0, 1.0, 1.0], 0.0), 15);
        // Equal to iso counts as below
        assert_eq!(case_index([0.0, 0.0, 0.0, 0.0], 0.0), 0);
    }

    #[test]
    fn test_uniform_grid_has_no_segments() {
        let below = vec![-1.0; 9];
        assert!(extract_iso_contour(&below, 3, 3, unit_cell(), 0.0).is_empty());

        let above = vec![1.0; 9];
        assert!(extract_iso_contour(&above, 3, 3, unit_cell(), 0.0).is_empty());
    }

    #[test]
    fn test_single_corner_case() {
        // Only bottom-left above: case 1 connects bottom and left edges
        let values = vec![1.0, -1.0, -1.0, -1.0];
        let soup = extract_iso_contour(&values, 2, 2, unit_cell(), 0.0);
        assert_eq!(soup.len(), 2);
        assert_relative_eq!(soup[0].x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(soup[0].y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(soup[1].x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(soup[1].y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolation_position() {
        // Bottom row above, top row below: case 3 connects right and left edges
        let values = vec![3.0, 3.0, -1.0, -1.0];
        let soup = extract_iso_contour(&values, 2, 2, unit_cell(), 0.0);
        assert_eq!(soup.len(), 2);
        // t = (0 - 3) / (-1 - 3) = 0.75 along both vertical edges
        assert_eq!(soup[0].x, 1.0);
        assert_relative_eq!(soup[0].y, 0.75, epsilon = 1e-12);
        assert_eq!(soup[1].x, 0.0);
        assert_relative_eq!(soup[1].y, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_saddle_cases_emit_two_segments() {
        // Samples are row-major: [bottom-left, bottom-right, top-left, top-right]
        let near = |p: Point2<f64>, x: f64, y: f64| {
            (p.x - x).abs() < 1e-12 && (p.y - y).abs() < 1e-12
        };

        // Case 5: bottom-left and top-right above, connects bottom-left and right-top
        let case5 = vec![1.0, -1.0, -1.0, 1.0];
        let soup5 = extract_iso_contour(&case5, 2, 2, unit_cell(), 0.0);
        assert_eq!(soup5.len(), 4);
        assert!(near(soup5[0], 0.5, 0.0), "bottom: {:?}", soup5[0]);
        assert!(near(soup5[1], 0.0, 0.5), "left: {:?}", soup5[1]);
        assert!(near(soup5[2], 1.0, 0.5), "right: {:?}", soup5[2]);
        assert!(near(soup5[3], 0.5, 1.0), "top: {:?}", soup5[3]);

        // Case 10: bottom-right and top-left above, connects bottom-right and top-left
        let case10 = vec![-1.0, 1.0, 1.0, -1.0];
        let soup10 = extract_iso_contour(&case10, 2, 2, unit_cell(), 0.0);
        assert_eq!(soup10.len(), 4);
        assert!(near(soup10[0], 0.5, 0.0), "bottom: {:?}", soup10[0]);
        assert!(near(soup10[1], 1.0, 0.5), "right: {:?}", soup10[1]);
        assert!(near(soup10[2], 0.5, 1.0), "top: {:?}", soup10[2]);
        assert!(near(soup10[3], 0.0, 0.5), "left: {:?}", soup10[3]);
    }

    #[test]
    fn test_equal_corner_values_produce_finite_points() {
        // Bottom edge has equal corners (v0 == v1) but is not crossed
        let values = vec![2.0, 2.0, -1.0, -1.0];
        let soup = extract_iso_contour(&values, 2, 2, unit_cell(), 0.0);
        assert!(soup.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn test_corner_spacing_uses_dimension_minus_one() {
        // 3 samples across [0, 2] puts corners at 0, 1, 2
        let values = vec![
            -1.0, -1.0, 1.0, //
            -1.0, -1.0, 1.0, //
        ];
        let bounds = Aabb2::from_extents(0.0, 2.0, 0.0, 1.0);
        let soup = extract_iso_contour(&values, 3, 2, bounds, 0.0);
        assert_eq!(soup.len(), 2);
        for p in &soup {
            assert_relative_eq!(p.x, 1.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_too_small_grid() {
        let values = vec![1.0, -1.0];
        assert!(extract_iso_contour(&values, 2, 1, unit_cell(), 0.0).is_empty());
        assert!(extract_iso_contour(&values, 2, 2, unit_cell(), 0.0).is_empty());
    }

    #[test]
    fn test_overflowing_dimensions() {
        let values = vec![1.0, -1.0, -1.0, -1.0];
        let huge = usize::MAX / 2;
        assert!(extract_iso_contour(&values, huge, huge, unit_cell(), 0.0).is_empty());
    }
}

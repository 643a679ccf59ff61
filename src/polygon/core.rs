//! Core polygon type: containment and bounds.

use crate::bounds::Aabb2;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Fixed margin added around the raw vertex extents by [`polygon_bounds`].
pub const BOUNDS_MARGIN: f64 = 0.1;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Fewer than three vertices is representable but treated as invalid by every
/// operation that consumes a polygon.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon<F> {
    /// The vertices of the polygon, in order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has at least three vertices.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Iterates over the edges, including the closing edge back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Tests if a point is inside the polygon (non-zero winding).
    pub fn contains(&self, point: Point2<F>) -> bool {
        point_in_polygon(point, &self.vertices)
    }

    /// Returns the padded bounding box, see [`polygon_bounds`].
    pub fn bounds(&self) -> Aabb2<F> {
        polygon_bounds(&self.vertices)
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        if self.vertices.len() < 3 {
            return F::zero();
        }

        let area = self
            .edges()
            .fold(F::zero(), |acc, e| acc + e.start.to_vec().cross(e.end.to_vec()));

        area / F::from(2.0).unwrap()
    }

    /// Returns the perimeter of the polygon.
    pub fn perimeter(&self) -> F {
        if self.vertices.len() < 2 {
            return F::zero();
        }
        self.edges().fold(F::zero(), |acc, e| acc + e.length())
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

/// Tests if a point is inside a polygon using the winding number.
///
/// Works for convex and concave simple polygons. Returns false for fewer
/// than three vertices.
pub fn point_in_polygon<F: Float>(p: Point2<F>, vertices: &[Point2<F>]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    winding_number(p, vertices) != 0
}

/// Computes the winding number of a point with respect to a polygon.
///
/// Returns 0 if the point is outside, non-zero if inside.
pub(crate) fn winding_number<F: Float>(p: Point2<F>, vertices: &[Point2<F>]) -> i32 {
    let mut winding = 0i32;
    let n = vertices.len();

    for i in 0..n {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % n];

        if v1.y <= p.y {
            if v2.y > p.y && is_left(v1, v2, p) > F::zero() {
                // Upward crossing
                winding += 1;
            }
        } else if v2.y <= p.y && is_left(v1, v2, p) < F::zero() {
            // Downward crossing
            winding -= 1;
        }
    }

    winding
}

/// Returns positive if p is left of line v1->v2, negative if right, zero if on line.
#[inline]
fn is_left<F: Float>(v1: Point2<F>, v2: Point2<F>, p: Point2<F>) -> F {
    (v2 - v1).cross(p - v1)
}

/// Bounding box of the vertices grown by [`BOUNDS_MARGIN`] on every side.
///
/// The margin is fixed and independent of any grid padding. An empty slice
/// yields an all-zero box.
pub fn polygon_bounds<F: Float>(vertices: &[Point2<F>]) -> Aabb2<F> {
    match Aabb2::from_points(vertices.iter().copied()) {
        Some(aabb) => aabb.expanded(F::from(BOUNDS_MARGIN).unwrap()),
        None => Aabb2::zero(),
    }
}

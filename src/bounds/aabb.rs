//! Axis-aligned bounding box.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners. This is also the world-space
/// rectangle an [`SdfGrid`](crate::distance::SdfGrid) samples.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates an AABB from the four extents, in `(min_x, max_x, min_y, max_y)` order.
    #[inline]
    pub fn from_extents(min_x: F, max_x: F, min_y: F, max_y: F) -> Self {
        Self {
            min: Point2::new(min_x, min_y),
            max: Point2::new(max_x, max_y),
        }
    }

    /// Creates a degenerate AABB with every extent at zero.
    #[inline]
    pub fn zero() -> Self {
        Self {
            min: Point2::origin(),
            max: Point2::origin(),
        }
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut aabb = Self::from_point(first);
        for p in iter {
            aabb = aabb.expand_to_include(p);
        }
        Some(aabb)
    }

    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the extents as `(min_x, max_x, min_y, max_y)`.
    #[inline]
    pub fn extents(self) -> (F, F, F, F) {
        (self.min.x, self.max.x, self.min.y, self.max.y)
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns a new AABB grown by `margin` on all four sides.
    #[inline]
    pub fn expanded(self, margin: F) -> Self {
        Self {
            min: Point2::new(self.min.x - margin, self.min.y - margin),
            max: Point2::new(self.max.x + margin, self.max.y + margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extents() {
        let aabb: Aabb2<f64> = Aabb2::from_extents(-1.0, 2.0, -3.0, 4.0);
        assert_eq!(aabb.extents(), (-1.0, 2.0, -3.0, 4.0));
        assert_eq!(aabb.width(), 3.0);
        assert_eq!(aabb.height(), 7.0);
    }

    #[test]
    fn test_from_points() {
        let points = vec![
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, 5.0),
            Point2::new(4.0, -1.0),
        ];
        let aabb: Aabb2<f64> = Aabb2::from_points(points).unwrap();
        assert_eq!(aabb.min.x, -3.0);
        assert_eq!(aabb.min.y, -1.0);
        assert_eq!(aabb.max.x, 4.0);
        assert_eq!(aabb.max.y, 5.0);
    }

    #[test]
    fn test_from_points_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(Aabb2::from_points(points).is_none());
    }

    #[test]
    fn test_expanded() {
        let aabb: Aabb2<f64> = Aabb2::from_extents(0.0, 1.0, 0.0, 2.0).expanded(0.5);
        assert_eq!(aabb.extents(), (-0.5, 1.5, -0.5, 2.5));
        assert_eq!(aabb.width(), 2.0);
    }
}

//! Displacement between two points.

use num_traits::Float;

/// A 2D displacement, produced by subtracting two [`Point2`](super::Point2)s.
///
/// Only the products needed for segment projection and orientation tests are
/// provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Scalar projection product.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product; positive when `other` turns
    /// counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Squared length, used to detect degenerate segments without a sqrt.
    #[inline]
    pub fn length_squared(self) -> F {
        self.dot(self)
    }
}

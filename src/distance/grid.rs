//! Uniform grids of sampled signed distance values.

use super::sdf::{sdf_polygon, Sdf2};
use crate::bounds::Aabb2;
use crate::primitives::Point2;
use num_traits::Float;

/// A 2D signed distance field stored on a regular grid.
///
/// Samples are taken at cell centers: cell `(x, y)` covers
/// `bounds.min + (x, y) * step` to `bounds.min + (x + 1, y + 1) * step` with
/// `step = bounds size / (width, height)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SdfGrid<F> {
    /// Width of the grid in cells.
    pub width: usize,
    /// Height of the grid in cells.
    pub height: usize,
    /// World-space rectangle covered by the grid.
    pub bounds: Aabb2<F>,
    /// Distance values (row-major order).
    pub values: Vec<F>,
}

impl<F: Float> SdfGrid<F> {
    /// Creates a new SDF grid with every value set to zero.
    pub fn new(width: usize, height: usize, bounds: Aabb2<F>) -> Self {
        Self {
            width,
            height,
            bounds,
            values: vec![F::zero(); width * height],
        }
    }

    /// Like [`SdfGrid::new`], but returns `None` instead of panicking when
    /// `width * height` overflows or the buffer cannot be allocated.
    pub fn try_new(width: usize, height: usize, bounds: Aabb2<F>) -> Option<Self> {
        let len = width.checked_mul(height)?;
        let mut values = Vec::new();
        values.try_reserve_exact(len).ok()?;
        values.resize(len, F::zero());
        Some(Self {
            width,
            height,
            bounds,
            values,
        })
    }

    /// Creates an SDF grid from a shape that implements Sdf2.
    pub fn from_shape<S: Sdf2<F>>(shape: &S, width: usize, height: usize, bounds: Aabb2<F>) -> Self {
        let mut grid = Self::new(width, height, bounds);
        grid.compute_from_shape(shape);
        grid
    }

    /// Creates an SDF grid for a polygon given as a vertex slice.
    pub fn sample_polygon(
        vertices: &[Point2<F>],
        width: usize,
        height: usize,
        bounds: Aabb2<F>,
    ) -> Self {
        let mut grid = Self::new(width, height, bounds);
        generate_sdf_grid(width, height, bounds, vertices, &mut grid.values);
        grid
    }

    /// Recomputes every value from a shape.
    pub fn compute_from_shape<S: Sdf2<F>>(&mut self, shape: &S) {
        let (width, height, bounds) = (self.width, self.height, self.bounds);
        fill_cell_centers(width, height, bounds, &mut self.values, |p| {
            shape.signed_distance(p)
        });
    }

    /// Returns the world-space size of one cell along x and y.
    #[inline]
    pub fn step(&self) -> (F, F) {
        cell_step(self.width, self.height, self.bounds)
    }

    /// Returns the world-space position of a grid cell center.
    pub fn cell_center(&self, x: usize, y: usize) -> Point2<F> {
        let (step_x, step_y) = self.step();
        cell_center(self.bounds, step_x, step_y, x, y)
    }

    /// Returns the value at grid coordinates.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> F {
        self.values[y * self.width + x]
    }

    /// Sets the value at grid coordinates.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: F) {
        self.values[y * self.width + x] = value;
    }

    /// Returns the smallest and largest stored values, or `None` for an empty grid.
    pub fn value_range(&self) -> Option<(F, F)> {
        let first = *self.values.first()?;
        Some(
            self.values
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }

    /// Samples the SDF at a world-space point using bilinear interpolation.
    ///
    /// Points outside the grid are clamped to the border cells. An empty grid
    /// returns `F::max_value()`.
    pub fn sample(&self, p: Point2<F>) -> F {
        if self.width == 0 || self.height == 0 {
            return F::max_value();
        }

        let half = F::from(0.5).unwrap();
        let (step_x, step_y) = self.step();

        // Convert to grid coordinates (cell centers)
        let gx = (p.x - self.bounds.min.x) / step_x - half;
        let gy = (p.y - self.bounds.min.y) / step_y - half;

        // Get integer cell coordinates
        let x0 = gx.floor().to_usize().unwrap_or(0).min(self.width - 1);
        let y0 = gy.floor().to_usize().unwrap_or(0).min(self.height - 1);
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        // Interpolation weights
        let fx = (gx - F::from(x0).unwrap()).max(F::zero()).min(F::one());
        let fy = (gy - F::from(y0).unwrap()).max(F::zero()).min(F::one());

        let v00 = self.get(x0, y0);
        let v10 = self.get(x1, y0);
        let v01 = self.get(x0, y1);
        let v11 = self.get(x1, y1);

        let one = F::one();
        let v0 = v00 * (one - fx) + v10 * fx;
        let v1 = v01 * (one - fx) + v11 * fx;
        v0 * (one - fy) + v1 * fy
    }
}

/// Samples the polygon SDF at the center of every cell of a `width × height` grid.
///
/// The world position of cell `(x, y)` is
/// `bounds.min + ((x, y) + 0.5) * bounds size / (width, height)`, and its value is
/// written to `out[y * width + x]`. Does nothing if either dimension is zero or
/// `out` holds fewer than `width * height` values.
pub fn generate_sdf_grid<F: Float>(
    width: usize,
    height: usize,
    bounds: Aabb2<F>,
    vertices: &[Point2<F>],
    out: &mut [F],
) {
    fill_cell_centers(width, height, bounds, out, |p| sdf_polygon(p, vertices));
}

fn fill_cell_centers<F, S>(width: usize, height: usize, bounds: Aabb2<F>, out: &mut [F], sdf: S)
where
    F: Float,
    S: Fn(Point2<F>) -> F,
{
    match width.checked_mul(height) {
        Some(len) if len > 0 && out.len() >= len => {}
        _ => return,
    }

    let (step_x, step_y) = cell_step(width, height, bounds);
    for y in 0..height {
        for x in 0..width {
            out[y * width + x] = sdf(cell_center(bounds, step_x, step_y, x, y));
        }
    }
}

#[inline]
fn cell_step<F: Float>(width: usize, height: usize, bounds: Aabb2<F>) -> (F, F) {
    (
        bounds.width() / F::from(width).unwrap(),
        bounds.height() / F::from(height).unwrap(),
    )
}

#[inline]
fn cell_center<F: Float>(bounds: Aabb2<F>, step_x: F, step_y: F, x: usize, y: usize) -> Point2<F> {
    let half = F::from(0.5).unwrap();
    Point2::new(
        bounds.min.x + (F::from(x).unwrap() + half) * step_x,
        bounds.min.y + (F::from(y).unwrap() + half) * step_y,
    )
}

//! Signed distance fields and their grid sampling.

mod grid;
mod sdf;

pub use grid::{generate_sdf_grid, SdfGrid};
pub use sdf::{sdf_polygon, Sdf2};

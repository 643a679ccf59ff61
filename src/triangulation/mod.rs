//! Triangulation of ring regions for rendering.

mod ring;

pub use ring::{triangles_to_vertices, triangulate_ring, MIN_RING_POINTS};

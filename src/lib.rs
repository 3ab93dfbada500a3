//! Loader for Wavefront-style OBJ geometry and its companion MTL material
//! file, producing an in-memory triangle mesh.
//!
//! The interesting work happens while assembling faces: per-corner
//! attribute references are resolved into unified vertices, vertices at
//! exactly repeated positions are shared rather than duplicated, and
//! quadrilateral faces are split into triangle pairs along the diagonal
//! bounded by the longest pair of adjacent boundary edges.
//!
//! Entry point: [`load`].

pub mod attributes;
pub mod faces;
pub mod geometry;
pub mod loader;
pub mod material;
pub mod triangulation;

pub use geometry::{Face, Material, Mesh, Vertex};
pub use loader::load;

//! Raw attribute lists accumulated from `v`/`vt`/`vn` lines, referenced
//! 1-based by face corners as the OBJ format prescribes.

use anyhow::{anyhow, Result};
use nalgebra::{Vector2, Vector3};

/// Append-only storage for the attributes declared so far in one file.
/// Scoped to a single load and discarded once the mesh is built.
#[derive(Debug, Default)]
pub struct AttributeStore {
    positions: Vec<Vector3<f64>>,
    tex_coords: Vec<Vector2<f64>>,
    normals: Vec<Vector3<f64>>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_position(&mut self, position: Vector3<f64>) {
        self.positions.push(position);
    }

    pub fn push_tex_coord(&mut self, tex_coord: Vector2<f64>) {
        self.tex_coords.push(tex_coord);
    }

    pub fn push_normal(&mut self, normal: Vector3<f64>) {
        self.normals.push(normal);
    }

    /// Look up a position by its 1-based file reference.
    pub fn position(&self, ix: usize) -> Result<Vector3<f64>> {
        lookup(&self.positions, ix, "position")
    }

    /// Look up a texture coordinate by its 1-based file reference.
    pub fn tex_coord(&self, ix: usize) -> Result<Vector2<f64>> {
        lookup(&self.tex_coords, ix, "texture coordinate")
    }

    /// Look up a normal by its 1-based file reference.
    pub fn normal(&self, ix: usize) -> Result<Vector3<f64>> {
        lookup(&self.normals, ix, "normal")
    }
}

fn lookup<T: Copy>(values: &[T], ix: usize, kind: &str) -> Result<T> {
    ix.checked_sub(1)
        .and_then(|i| values.get(i))
        .copied()
        .ok_or_else(|| {
            anyhow!(
                "{} reference {} is out of range ({} declared)",
                kind,
                ix,
                values.len()
            )
        })
}

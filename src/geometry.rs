//! Value types for the loaded mesh: vertices, triangle faces, materials,
//! and the `Mesh` container they live in.

use nalgebra::{Vector2, Vector3};
use serde::Serialize;

/// A fully resolved per-corner attribute bundle.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Vertex {
    pub position: Vector3<f64>,
    pub tex_coord: Vector2<f64>,
    pub normal: Vector3<f64>,
}

impl Vertex {
    pub fn new(position: Vector3<f64>, tex_coord: Vector2<f64>, normal: Vector3<f64>) -> Self {
        Self {
            position,
            tex_coord,
            normal,
        }
    }
}

/// One emitted triangle: three indices into [`Mesh::vertices`] plus the
/// material in effect when the face line was read. `None` means no `usemtl`
/// preceded the face.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub vertices: [usize; 3],
    pub material_ix: Option<usize>,
}

impl Face {
    pub fn new(vertices: [usize; 3], material_ix: Option<usize>) -> Self {
        Self {
            vertices,
            material_ix,
        }
    }
}

/// One material record from the companion `.mtl` file, in file order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Material {
    pub specular_exponent: f64,
    pub ambient: Vector3<f64>,
    pub diffuse: Vector3<f64>,
    pub specular: Vector3<f64>,
    pub alpha: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            specular_exponent: 0.0,
            ambient: Vector3::zeros(),
            diffuse: Vector3::zeros(),
            specular: Vector3::zeros(),
            alpha: 0.0,
        }
    }
}

/// The result of one load: deduplicated vertices in insertion order,
/// triangles in emission order, materials in file order.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
    pub materials: Vec<Material>,
}

impl Mesh {
    /// Return the index of the first vertex whose position compares exactly
    /// equal to `position`, scanning in insertion order.
    ///
    /// Equality is exact component-wise float comparison: the file format
    /// carries no tolerance, so only genuinely repeated attribute lines
    /// collapse, never geometrically-close-but-distinct ones. Texture
    /// coordinates and normals take no part in the comparison.
    pub fn find_vertex(&self, position: &Vector3<f64>) -> Option<usize> {
        self.vertices.iter().position(|v| v.position == *position)
    }

    /// Append a vertex and return its index.
    pub fn push_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }
}

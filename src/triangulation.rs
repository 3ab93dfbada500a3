//! This module splits quadrilateral faces into triangle pairs.

use nalgebra::Vector3;

use crate::geometry::{Face, Mesh};

/// Split a quad into two triangles and append them to the mesh.
///
/// `corners` are four already-resolved vertex indices in the cyclic order
/// they appeared on the face line (boundary 0→1→2→3→0). The diagonal is
/// chosen by the longest-opposite-edge-pair heuristic: sum the squared
/// lengths of each pair of adjacent boundary edges and split across the
/// diagonal bounded by the longest pair. On quads that are non-planar or
/// non-convex this tends to avoid sliver triangles; it checks neither
/// planarity nor convexity.
pub fn split_quad(mesh: &mut Mesh, corners: [usize; 4], material_ix: Option<usize>) {
    let edge = |a: usize, b: usize| {
        mesh.vertices[corners[b]].position - mesh.vertices[corners[a]].position
    };

    let e01 = length_squared(&edge(0, 1));
    let e12 = length_squared(&edge(1, 2));
    let e23 = length_squared(&edge(2, 3));
    let e30 = length_squared(&edge(3, 0));

    // Opposite-pair sums, one per candidate diagonal.
    let sums = [e01 + e12, e12 + e23, e23 + e30, e30 + e01];

    // First maximum wins; exact float ties are rare and either split is
    // acceptable, but the pick must be deterministic.
    let mut winner = 0;
    for (i, &sum) in sums.iter().enumerate().skip(1) {
        if sum > sums[winner] {
            winner = i;
        }
    }

    let corner = |i: usize| corners[(winner + i) % 4];
    mesh.faces
        .push(Face::new([corner(0), corner(1), corner(2)], material_ix));
    mesh.faces
        .push(Face::new([corner(0), corner(2), corner(3)], material_ix));
}

fn length_squared(v: &Vector3<f64>) -> f64 {
    // The squared sum can only go negative through accumulated rounding.
    v.norm_squared().abs()
}

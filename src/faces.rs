//! Face assembly: resolving `f`-line corner references into deduplicated
//! mesh vertices and emitting triangles.

use anyhow::{anyhow, bail, Context, Result};
use nalgebra::{Vector2, Vector3};

use crate::attributes::AttributeStore;
use crate::geometry::{Face, Mesh, Vertex};
use crate::triangulation::split_quad;

/// One corner of a face line: `pos[/tex][/norm]`, 1-based references into
/// the attributes declared so far. An empty segment means the attribute is
/// absent for this corner.
#[derive(Debug, PartialEq, Eq)]
struct Corner {
    position: usize,
    tex_coord: Option<usize>,
    normal: Option<usize>,
}

impl Corner {
    fn parse(token: &str) -> Result<Self> {
        let mut segments = token.split('/');
        let position = segments
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow!("face corner '{}' has no position reference", token))?
            .parse()
            .with_context(|| format!("bad position reference in face corner '{}'", token))?;
        let tex_coord = parse_optional(segments.next(), token, "texture")?;
        let normal = parse_optional(segments.next(), token, "normal")?;
        Ok(Self {
            position,
            tex_coord,
            normal,
        })
    }
}

fn parse_optional(segment: Option<&str>, token: &str, kind: &str) -> Result<Option<usize>> {
    match segment {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(s.parse().with_context(|| {
            format!("bad {} reference in face corner '{}'", kind, token)
        })?)),
    }
}

/// Assemble one face line from its corner tokens.
///
/// Each corner resolves its attribute references through `store`, then
/// either reuses an existing mesh vertex at the same position or appends a
/// new one. Three corners emit a single triangle; four delegate to the quad
/// triangulator. Anything else is a malformed line.
pub fn assemble_face<'a>(
    tokens: impl Iterator<Item = &'a str>,
    store: &AttributeStore,
    mesh: &mut Mesh,
    material_ix: Option<usize>,
) -> Result<()> {
    let corners = tokens.map(Corner::parse).collect::<Result<Vec<_>>>()?;
    match corners.len() {
        0..=2 => bail!("face has {} corners; at least 3 required", corners.len()),
        3 | 4 => {}
        n => bail!("face has {} corners; at most 4 supported", n),
    }

    let mut vertex_ixs = Vec::with_capacity(corners.len());
    for corner in &corners {
        vertex_ixs.push(resolve_corner(corner, store, mesh)?);
    }

    if let [a, b, c] = vertex_ixs[..] {
        mesh.faces.push(Face::new([a, b, c], material_ix));
    } else {
        split_quad(
            mesh,
            [vertex_ixs[0], vertex_ixs[1], vertex_ixs[2], vertex_ixs[3]],
            material_ix,
        );
    }
    Ok(())
}

/// Resolve a corner to a mesh vertex index, appending a new vertex when no
/// existing one shares the position exactly.
fn resolve_corner(corner: &Corner, store: &AttributeStore, mesh: &mut Mesh) -> Result<usize> {
    let position = store.position(corner.position)?;
    let tex_coord = match corner.tex_coord {
        Some(ix) => store.tex_coord(ix)?,
        None => Vector2::zeros(),
    };
    let normal = match corner.normal {
        Some(ix) => store.normal(ix)?,
        None => Vector3::zeros(),
    };

    Ok(match mesh.find_vertex(&position) {
        Some(ix) => ix,
        None => mesh.push_vertex(Vertex::new(position, tex_coord, normal)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_attributes() -> AttributeStore {
        let mut store = AttributeStore::new();
        store.push_position(Vector3::new(0.0, 0.0, 0.0));
        store.push_position(Vector3::new(1.0, 0.0, 0.0));
        store.push_position(Vector3::new(0.0, 1.0, 0.0));
        store.push_tex_coord(Vector2::new(0.25, 0.75));
        store.push_normal(Vector3::new(0.0, 0.0, 1.0));
        store
    }

    #[test]
    fn corner_token_forms() {
        assert_eq!(
            Corner::parse("7").unwrap(),
            Corner {
                position: 7,
                tex_coord: None,
                normal: None,
            }
        );
        assert_eq!(
            Corner::parse("1/2").unwrap(),
            Corner {
                position: 1,
                tex_coord: Some(2),
                normal: None,
            }
        );
        assert_eq!(
            Corner::parse("1//3").unwrap(),
            Corner {
                position: 1,
                tex_coord: None,
                normal: Some(3),
            }
        );
        assert_eq!(
            Corner::parse("1/2/3").unwrap(),
            Corner {
                position: 1,
                tex_coord: Some(2),
                normal: Some(3),
            }
        );
    }

    #[test]
    fn malformed_corner_tokens_are_errors() {
        assert!(Corner::parse("x").is_err());
        assert!(Corner::parse("/2/3").is_err());
        assert!(Corner::parse("1/y/3").is_err());
        // Negative (relative) references are not supported.
        assert!(Corner::parse("-1").is_err());
    }

    #[test]
    fn triangle_emits_one_face_with_material() {
        let store = store_with_attributes();
        let mut mesh = Mesh::default();
        assemble_face(
            "1/1/1 2/1/1 3/1/1".split_whitespace(),
            &store,
            &mut mesh,
            Some(0),
        )
        .unwrap();

        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.faces.len(), 1);
        assert_eq!(mesh.faces[0].vertices, [0, 1, 2]);
        assert_eq!(mesh.faces[0].material_ix, Some(0));
        assert_eq!(mesh.vertices[0].tex_coord, Vector2::new(0.25, 0.75));
        assert_eq!(mesh.vertices[0].normal, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn absent_attributes_default_to_zero() {
        let store = store_with_attributes();
        let mut mesh = Mesh::default();
        assemble_face("1 2 3".split_whitespace(), &store, &mut mesh, None).unwrap();

        assert_eq!(mesh.vertices[0].tex_coord, Vector2::zeros());
        assert_eq!(mesh.vertices[0].normal, Vector3::zeros());
    }

    #[test]
    fn repeated_positions_share_one_vertex() {
        let mut store = store_with_attributes();
        // A fourth position line that repeats the first exactly.
        store.push_position(Vector3::new(0.0, 0.0, 0.0));
        let mut mesh = Mesh::default();
        assemble_face("1 2 3".split_whitespace(), &store, &mut mesh, None).unwrap();
        assemble_face("4 2 3".split_whitespace(), &store, &mut mesh, None).unwrap();

        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.faces[1].vertices, [0, 1, 2]);
    }

    #[test]
    fn corner_count_limits() {
        let store = store_with_attributes();
        let mut mesh = Mesh::default();
        assert!(assemble_face("1 2".split_whitespace(), &store, &mut mesh, None).is_err());
        assert!(
            assemble_face("1 2 3 1 2".split_whitespace(), &store, &mut mesh, None).is_err()
        );
        assert!(mesh.faces.is_empty());
    }

    #[test]
    fn out_of_range_references_are_errors() {
        let store = store_with_attributes();
        let mut mesh = Mesh::default();
        assert!(assemble_face("99 1 2".split_whitespace(), &store, &mut mesh, None).is_err());
        assert!(assemble_face("1/9 2 3".split_whitespace(), &store, &mut mesh, None).is_err());
        assert!(assemble_face("1//9 2 3".split_whitespace(), &store, &mut mesh, None).is_err());
    }
}

//! Geometry-file line dispatch and the public [`load`] entry point.

use anyhow::{anyhow, Context, Result};
use itertools::Itertools;
use nalgebra::{Vector2, Vector3};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use crate::attributes::AttributeStore;
use crate::faces::assemble_face;
use crate::geometry::Mesh;
use crate::material::load_materials;

/// Recognized geometry-line keywords. Lines starting with anything else
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Position,
    TexCoord,
    Normal,
    Face,
    MaterialLib,
    UseMaterial,
}

impl Keyword {
    /// `v`/`vt`/`vn`/`f` match case-insensitively; `mtllib`/`usemtl` are
    /// case-sensitive.
    fn from_token(token: &str) -> Option<Self> {
        match token {
            t if t.eq_ignore_ascii_case("v") => Some(Self::Position),
            t if t.eq_ignore_ascii_case("vt") => Some(Self::TexCoord),
            t if t.eq_ignore_ascii_case("vn") => Some(Self::Normal),
            t if t.eq_ignore_ascii_case("f") => Some(Self::Face),
            "mtllib" => Some(Self::MaterialLib),
            "usemtl" => Some(Self::UseMaterial),
            _ => None,
        }
    }
}

/// Mutable state threaded through one load: the raw attribute lists and
/// the active-material counter. Created fresh per [`load`] call, so
/// independent loads never observe each other.
struct LoadContext {
    store: AttributeStore,
    active_material: Option<usize>,
}

/// Load a geometry file (and, via its `mtllib` line, the sibling material
/// file) into a [`Mesh`].
///
/// The whole file is consumed in one pass; any malformed line aborts the
/// load with an error naming the file, line number, and line content.
pub fn load(path: &Path) -> Result<Mesh> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut mesh = Mesh::default();
    let mut ctx = LoadContext {
        store: AttributeStore::new(),
        active_material: None,
    };

    for (ix, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        parse_line(&line, path, &mut ctx, &mut mesh)
            .with_context(|| format!("{}:{}: '{}'", path.display(), ix + 1, line.trim_end()))?;
    }

    info!(
        vertices = mesh.vertices.len(),
        triangles = mesh.faces.len(),
        materials = mesh.materials.len(),
        "loaded {}",
        path.display()
    );
    Ok(mesh)
}

fn parse_line(line: &str, path: &Path, ctx: &mut LoadContext, mesh: &mut Mesh) -> Result<()> {
    let mut tokens = line.split_whitespace();
    let keyword = match tokens.next().and_then(Keyword::from_token) {
        Some(keyword) => keyword,
        None => return Ok(()),
    };

    match keyword {
        Keyword::Position => ctx.store.push_position(parse_vector3(tokens)?),
        Keyword::TexCoord => ctx.store.push_tex_coord(parse_vector2(tokens)?),
        Keyword::Normal => ctx.store.push_normal(parse_vector3(tokens)?),
        Keyword::Face => assemble_face(tokens, &ctx.store, mesh, ctx.active_material)?,
        Keyword::MaterialLib => {
            // The name on the line is ignored; the material file sits next
            // to the geometry file with an `mtl` extension.
            let material_path = path.with_extension("mtl");
            debug!("loading material file {}", material_path.display());
            load_materials(&material_path, mesh)?;
        }
        Keyword::UseMaterial => {
            ctx.active_material = Some(ctx.active_material.map_or(0, |ix| ix + 1));
        }
    }
    Ok(())
}

pub(crate) fn parse_vector3<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Vector3<f64>> {
    let (x, y, z) = parse_floats(tokens)?
        .into_iter()
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected exactly 3 components"))?;
    Ok(Vector3::new(x, y, z))
}

pub(crate) fn parse_vector2<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Vector2<f64>> {
    let (u, v) = parse_floats(tokens)?
        .into_iter()
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected exactly 2 components"))?;
    Ok(Vector2::new(u, v))
}

pub(crate) fn parse_scalar<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<f64> {
    let (value,) = parse_floats(tokens)?
        .into_iter()
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected exactly 1 value"))?;
    Ok(value)
}

fn parse_floats<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Vec<f64>> {
    tokens
        .map(|t| {
            t.parse::<f64>()
                .with_context(|| format!("'{}' is not a number", t))
        })
        .collect()
}

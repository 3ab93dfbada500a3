//! Companion material-file scanning. Recognized keywords fill an
//! in-progress [`Material`] record; reading the `d` (alpha) line completes
//! the record and flushes it into the mesh's material list.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

use crate::geometry::{Material, Mesh};
use crate::loader::{parse_scalar, parse_vector3};

/// Scan a material file, appending completed records to `mesh.materials`
/// in file order. Keywords are case-sensitive; unrecognized lines are
/// ignored. A record still in progress at end of file is discarded, since
/// the file never declared its alpha.
pub fn load_materials(path: &Path, mesh: &mut Mesh) -> Result<()> {
    let file = File::open(path)
        .with_context(|| format!("failed to open material file {}", path.display()))?;

    let mut record = Material::default();
    let mut in_progress = false;

    for (ix, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        scan_line(&line, &mut record, &mut in_progress, mesh)
            .with_context(|| format!("{}:{}: '{}'", path.display(), ix + 1, line.trim_end()))?;
    }

    if in_progress {
        warn!(
            "{}: discarding material record with no 'd' line",
            path.display()
        );
    }
    Ok(())
}

fn scan_line(
    line: &str,
    record: &mut Material,
    in_progress: &mut bool,
    mesh: &mut Mesh,
) -> Result<()> {
    let mut tokens = line.split_whitespace();
    let keyword = match tokens.next() {
        Some(keyword) => keyword,
        None => return Ok(()),
    };

    match keyword {
        "Ns" => {
            record.specular_exponent = parse_scalar(tokens)?;
            *in_progress = true;
        }
        "Ka" => {
            record.ambient = parse_vector3(tokens)?;
            *in_progress = true;
        }
        "Kd" => {
            record.diffuse = parse_vector3(tokens)?;
            *in_progress = true;
        }
        "Ks" => {
            record.specular = parse_vector3(tokens)?;
            *in_progress = true;
        }
        "d" => {
            record.alpha = parse_scalar(tokens)?;
            mesh.materials.push(std::mem::take(record));
            *in_progress = false;
        }
        _ => {}
    }
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use objmesh::load;

/// Load a Wavefront OBJ file into a triangle mesh.
#[derive(Parser)]
#[command(name = "objmesh", version)]
struct Cli {
    /// Path to the geometry (.obj) file.
    path: PathBuf,

    /// Serialize the full mesh to YAML on stdout instead of a summary.
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();
    let mesh = load(&cli.path)?;

    if cli.dump {
        print!("{}", serde_yaml::to_string(&mesh)?);
    } else {
        println!(
            "{}: {} vertices, {} triangles, {} materials",
            cli.path.display(),
            mesh.vertices.len(),
            mesh.faces.len(),
            mesh.materials.len()
        );
    }

    Ok(())
}

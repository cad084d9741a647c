//! Scene viewer executable

use anyhow::Result;
use clap::Parser;
use solidview_viewer::{Viewer, World};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// View a scene description and the point-stream models it references
#[derive(Parser)]
#[command(name = "solidview-viewer", version, about)]
struct Cli {
    /// Scene description file (JSON)
    scene: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let world = World::load(&cli.scene)?;
    tracing::info!(
        "loaded {} vertices from {} group(s)",
        world.vertices.len(),
        world.scene.groups.len()
    );

    Viewer::new(world).run()?;
    Ok(())
}

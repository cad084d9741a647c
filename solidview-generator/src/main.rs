//! Command-line mesh generator
//!
//! Maps a primitive keyword plus positional shape parameters to one of the
//! generators and writes the resulting point-stream file. Argument count,
//! numeric parsing and unknown primitives are all reported before anything
//! is written, so a failed invocation never leaves a file behind.

use anyhow::Result;
use clap::{Parser, Subcommand};
use solidview_generator::Solid;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate point-stream mesh files for primitive solids
#[derive(Parser)]
#[command(name = "solidview-generator", version, about)]
struct Cli {
    #[command(subcommand)]
    primitive: Primitive,
}

#[derive(Subcommand)]
enum Primitive {
    /// Square tile in the XZ plane, centered at the origin
    Plane {
        /// Side length
        length: u32,
        /// Subdivisions per side
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        division: u32,
        /// Output point-stream file
        output: PathBuf,
    },
    /// Cube centered at the origin
    Box {
        /// Edge length
        length: u32,
        /// Subdivisions per edge
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        division: u32,
        /// Output point-stream file
        output: PathBuf,
    },
    /// Sphere centered at the origin
    Sphere {
        radius: f32,
        /// Longitude subdivisions
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        slices: u32,
        /// Latitude subdivisions
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        stacks: u32,
        /// Output point-stream file
        output: PathBuf,
    },
    /// Cone with its base on the XZ plane
    Cone {
        radius: f32,
        height: f32,
        /// Angular subdivisions
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        slices: u32,
        /// Height subdivisions
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        stacks: u32,
        /// Output point-stream file
        output: PathBuf,
    },
    /// Cylinder centered at the origin
    Cylinder {
        radius: f32,
        height: f32,
        /// Angular subdivisions
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        slices: u32,
        /// Output point-stream file
        output: PathBuf,
    },
}

impl Primitive {
    fn into_parts(self) -> (Solid, PathBuf) {
        match self {
            Primitive::Plane {
                length,
                division,
                output,
            } => (Solid::Plane { length, division }, output),
            Primitive::Box {
                length,
                division,
                output,
            } => (Solid::Box { length, division }, output),
            Primitive::Sphere {
                radius,
                slices,
                stacks,
                output,
            } => (
                Solid::Sphere {
                    radius,
                    slices,
                    stacks,
                },
                output,
            ),
            Primitive::Cone {
                radius,
                height,
                slices,
                stacks,
                output,
            } => (
                Solid::Cone {
                    radius,
                    height,
                    slices,
                    stacks,
                },
                output,
            ),
            Primitive::Cylinder {
                radius,
                height,
                slices,
                output,
            } => (
                Solid::Cylinder {
                    radius,
                    height,
                    slices,
                },
                output,
            ),
        }
    }
}


fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let (solid, output) = cli.primitive.into_parts();

    solid.generate(&output)?;
    tracing::info!(
        "wrote {} points ({} triangles) to {}",
        solid.point_count(),
        solid.point_count() / 3,
        output.display()
    );

    Ok(())
}

//! Sphere generator

use solidview_core::{Point3f, Result};
use solidview_io::PointStreamWriter;
use std::f32::consts::PI;
use std::path::Path;

/// Generate a sphere of the given `radius` centered at the origin.
///
/// The surface is parametrized by longitude `alpha` in [0, 2pi) over
/// `slices` and latitude `beta` in [-pi/2, pi/2] over `stacks`. Interior
/// cells become quads; the first and last stacks collapse one edge at a
/// pole, so each emits a single triangle fanned to the pole instead of a
/// degenerate quad. With `stacks == 1` only the south-pole fan is emitted.
pub fn sphere<P: AsRef<Path>>(radius: f32, slices: u32, stacks: u32, path: P) -> Result<()> {
    let mut writer = PointStreamWriter::create(path)?;

    let alpha_inc = 2.0 * PI / slices as f32;
    let beta_inc = PI / stacks as f32;

    let vertex = |alpha: f32, beta: f32| {
        Point3f::new(
            radius * beta.cos() * alpha.sin(),
            radius * beta.sin(),
            radius * beta.cos() * alpha.cos(),
        )
    };

    for i in 0..slices {
        let alpha = i as f32 * alpha_inc;
        for j in 0..stacks {
            let beta = -PI / 2.0 + j as f32 * beta_inc;

            let p1 = vertex(alpha, beta);
            let p2 = vertex(alpha, beta + beta_inc);
            let p3 = vertex(alpha + alpha_inc, beta + beta_inc);
            let p4 = vertex(alpha + alpha_inc, beta);

            if j == 0 {
                // South cap: p1 and p4 coincide at the pole.
                writer.write_triangle(&p3, &p2, &p1)?;
            } else if j == stacks - 1 {
                // North cap: p2 and p3 coincide at the pole.
                writer.write_triangle(&p4, &p3, &p1)?;
            } else {
                writer.write_triangle(&p4, &p3, &p2)?;
                writer.write_triangle(&p2, &p1, &p4)?;
            }
        }
    }

    writer.finish()
}

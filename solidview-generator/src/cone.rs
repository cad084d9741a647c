//! Cone generator

use solidview_core::{Point3f, Quad, Result};
use solidview_io::PointStreamWriter;
use std::f32::consts::PI;
use std::path::Path;

/// Generate a cone with its base disk of the given `radius` on the XZ plane
/// at Y = 0 and its apex at `height` on the Y axis.
///
/// Per slice: one base-disk fan triangle, then one frustum quad per stack.
/// Ring radii follow from similar triangles, `r(h) = radius * (height - h)
/// / height`, so the top stack's upper ring collapses to radius zero and is
/// written as a degenerate quad rather than an explicit apex triangle.
pub fn cone<P: AsRef<Path>>(
    radius: f32,
    height: f32,
    slices: u32,
    stacks: u32,
    path: P,
) -> Result<()> {
    let mut writer = PointStreamWriter::create(path)?;

    let alpha_inc = 2.0 * PI / slices as f32;
    let h_inc = height / stacks as f32;
    let base_center = Point3f::origin();

    let ring = |alpha: f32, r: f32, h: f32| Point3f::new(r * alpha.sin(), h, r * alpha.cos());

    for i in 0..slices {
        let alpha = i as f32 * alpha_inc;

        // Base disk fan, winding downward.
        let b1 = ring(alpha, radius, 0.0);
        let b2 = ring(alpha + alpha_inc, radius, 0.0);
        writer.write_triangle(&b1, &base_center, &b2)?;

        for j in 0..stacks {
            let h = j as f32 * h_inc;
            let r = radius * (height - h) / height;
            let r_next = radius * (height - (h + h_inc)) / height;

            let quad = Quad::new(
                ring(alpha, r_next, h + h_inc),
                ring(alpha + alpha_inc, r_next, h + h_inc),
                ring(alpha, r, h),
                ring(alpha + alpha_inc, r, h),
            );
            writer.write_quad(&quad)?;
        }
    }

    writer.finish()
}

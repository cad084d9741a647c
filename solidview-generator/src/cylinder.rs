//! Cylinder generator

use solidview_core::{Point3f, Quad, Result};
use solidview_io::PointStreamWriter;
use std::f32::consts::PI;
use std::path::Path;

/// Generate a cylinder of the given `radius` centered at the origin, caps
/// parallel to the XZ plane at Y = +-height/2.
///
/// Per slice: one top-cap fan triangle, one lateral quad, one bottom-cap
/// fan triangle with its perimeter order reversed so it faces down. The
/// lateral surface is always a single band; there is no stack subdivision.
pub fn cylinder<P: AsRef<Path>>(radius: f32, height: f32, slices: u32, path: P) -> Result<()> {
    let mut writer = PointStreamWriter::create(path)?;

    let alpha_inc = 2.0 * PI / slices as f32;
    let half_height = height / 2.0;

    let top_center = Point3f::new(0.0, half_height, 0.0);
    let bottom_center = Point3f::new(0.0, -half_height, 0.0);

    let rim = |alpha: f32, y: f32| Point3f::new(radius * alpha.sin(), y, radius * alpha.cos());

    for i in 0..slices {
        let alpha = i as f32 * alpha_inc;

        let p1 = rim(alpha, half_height);
        let p2 = rim(alpha + alpha_inc, half_height);
        let p3 = rim(alpha, -half_height);
        let p4 = rim(alpha + alpha_inc, -half_height);

        writer.write_triangle(&top_center, &p1, &p2)?;
        writer.write_quad(&Quad::new(p1, p2, p3, p4))?;
        writer.write_triangle(&bottom_center, &p4, &p3)?;
    }

    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use solidview_io::read_points;
    use std::fs;

    #[test]
    fn test_point_count() {
        let temp_file = "test_cylinder_count.3d";
        cylinder(1.0, 2.0, 7, temp_file).unwrap();

        // Per slice: 3 top cap + 6 lateral + 3 bottom cap records.
        let points = read_points(temp_file).unwrap();
        assert_eq!(points.len(), 12 * 7);
        assert_eq!(points.len() % 3, 0);

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_points_on_caps_and_rim() {
        let temp_file = "test_cylinder_rim.3d";
        let (radius, height) = (1.5, 4.0);
        cylinder(radius, height, 8, temp_file).unwrap();

        let points = read_points(temp_file).unwrap();
        for p in &points {
            // Single band: every record sits on one of the two cap planes.
            assert_relative_eq!(p.y.abs(), height / 2.0, epsilon = 1e-5);
            let radial = (p.x * p.x + p.z * p.z).sqrt();
            assert!(
                radial < 1e-5 || (radial - radius).abs() < 1e-4,
                "point neither cap center nor rim: {:?}",
                p
            );
        }

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_cap_fans_face_away_from_each_other() {
        let temp_file = "test_cylinder_caps.3d";
        cylinder(1.0, 2.0, 4, temp_file).unwrap();

        let points = read_points(temp_file).unwrap();
        for slice in points.chunks_exact(12) {
            let top = &slice[..3];
            let bottom = &slice[9..];
            let top_normal = (top[1] - top[0]).cross(&(top[2] - top[0]));
            let bottom_normal = (bottom[1] - bottom[0]).cross(&(bottom[2] - bottom[0]));
            assert!(top_normal.y > 0.0);
            assert!(bottom_normal.y < 0.0);
        }

        fs::remove_file(temp_file).unwrap();
    }
}

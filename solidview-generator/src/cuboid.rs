//! Box generator

use solidview_core::{Point3f, Result, Vector3f};
use solidview_io::PointStreamWriter;
use std::path::Path;

use crate::grid::write_grid;

/// Generate a cube of edge `length` centered at the origin, each of its six
/// faces tiled into `division * division` quads.
///
/// Every face is the shared grid tiling with its own base corner and step
/// directions, chosen per face so all triangles wind outward. The step
/// choices are the subtle part: reusing one face's assignment on the
/// opposite face would invert its winding.
pub fn cuboid<P: AsRef<Path>>(length: u32, division: u32, path: P) -> Result<()> {
    let mut writer = PointStreamWriter::create(path)?;

    let v = length as f32 / 2.0;
    let inc = length as f32 / division as f32;

    let x = Vector3f::new(inc, 0.0, 0.0);
    let y = Vector3f::new(0.0, inc, 0.0);
    let z = Vector3f::new(0.0, 0.0, inc);

    // Top, from the (v, v, -v) corner.
    write_grid(&mut writer, Point3f::new(v, v, -v), z, -x, division)?;
    // Bottom, from the (-v, -v, -v) corner.
    write_grid(&mut writer, Point3f::new(-v, -v, -v), z, x, division)?;
    // Front (+Z), from the (-v, -v, v) corner.
    write_grid(&mut writer, Point3f::new(-v, -v, v), y, x, division)?;
    // Rear (-Z), from the (v, -v, -v) corner.
    write_grid(&mut writer, Point3f::new(v, -v, -v), y, -x, division)?;
    // Right (+X), from the (v, -v, v) corner.
    write_grid(&mut writer, Point3f::new(v, -v, v), y, -z, division)?;
    // Left (-X), from the (-v, -v, -v) corner.
    write_grid(&mut writer, Point3f::new(-v, -v, -v), y, z, division)?;

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
        let temp_file = "test_box_count.3d";
        cuboid(2, 2, temp_file).unwrap();

        let points = read_points(temp_file).unwrap();
        assert_eq!(points.len(), 6 * 2 * 2 * 6);
        assert_eq!(points.len() % 3, 0);

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_every_point_on_a_face_plane() {
        let temp_file = "test_box_faces.3d";
        cuboid(3, 2, temp_file).unwrap();

        let half = 1.5;
        let points = read_points(temp_file).unwrap();
        for p in &points {
            let on_face = p.x.abs() == half || p.y.abs() == half || p.z.abs() == half;
            assert!(on_face, "point off the box surface: {:?}", p);
            assert!(p.x.abs() <= half && p.y.abs() <= half && p.z.abs() <= half);
        }

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_triangles_wind_outward() {
        let temp_file = "test_box_winding.3d";
        cuboid(2, 1, temp_file).unwrap();

        let points = read_points(temp_file).unwrap();
        assert_eq!(points.len(), 36);
        for tri in points.chunks_exact(3) {
            let normal = (tri[1] - tri[0]).cross(&(tri[2] - tri[0]));
            let center = (tri[0].coords + tri[1].coords + tri[2].coords) / 3.0;
            // Outward winding: the normal points away from the origin.
            assert!(normal.dot(&center) > 0.0, "inward triangle: {:?}", tri);
            assert_relative_eq!(normal.norm(), 4.0, epsilon = 1e-5);
        }

        fs::remove_file(temp_file).unwrap();
    }
}

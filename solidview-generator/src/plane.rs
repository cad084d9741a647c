//! Plane generator

use solidview_core::{Point3f, Result, Vector3f};
use solidview_io::PointStreamWriter;
use std::path::Path;

use crate::grid::write_grid;

/// Generate a square of side `length` centered at the origin, lying in the
/// XZ plane at Y = 0 and tiled into `division * division` quads. Both
/// triangles of every quad face +Y.
pub fn plane<P: AsRef<Path>>(length: u32, division: u32, path: P) -> Result<()> {
    let mut writer = PointStreamWriter::create(path)?;

    let half = length as f32 / 2.0;
    let inc = length as f32 / division as f32;

    write_grid(
        &mut writer,
        Point3f::new(-half, 0.0, -half),
        Vector3f::new(inc, 0.0, 0.0),
        Vector3f::new(0.0, 0.0, inc),
        division,
    )?;

    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use solidview_io::read_points;
    use std::fs;

    #[test]
    fn test_point_count() {
        let temp_file = "test_plane_count.3d";
        plane(2, 3, temp_file).unwrap();

        let points = read_points(temp_file).unwrap();
        assert_eq!(points.len(), 6 * 3 * 3);
        assert_eq!(points.len() % 3, 0);

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_all_points_at_y_zero() {
        let temp_file = "test_plane_flat.3d";
        plane(4, 2, temp_file).unwrap();

        let points = read_points(temp_file).unwrap();
        for p in &points {
            assert_eq!(p.y, 0.0);
            assert!(p.x >= -2.0 && p.x <= 2.0);
            assert!(p.z >= -2.0 && p.z <= 2.0);
        }

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_triangles_face_up() {
        let temp_file = "test_plane_winding.3d";
        plane(2, 1, temp_file).unwrap();

        let points = read_points(temp_file).unwrap();
        for tri in points.chunks_exact(3) {
            let normal = (tri[1] - tri[0]).cross(&(tri[2] - tri[0]));
            assert!(normal.y > 0.0);
        }

        fs::remove_file(temp_file).unwrap();
    }
}

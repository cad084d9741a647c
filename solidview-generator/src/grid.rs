//! Shared planar grid tiling
//!
//! The plane and every box face are the same surface: a square grid of
//! quads spanned by two step vectors from a base corner. Keeping the
//! index-to-corner assignment in one place means a face only has to pick
//! its base corner and step directions to wind correctly.

use solidview_core::{Point3f, Quad, Result, Vector3f};
use solidview_io::PointStreamWriter;

/// Tile a `divisions x divisions` grid of quads starting at the `base`
/// corner, stepping one cell along `du` per row and along `dv` per column.
///
/// Corners are assigned so that, looking at the grid with `du` pointing up
/// and `dv` pointing right, each quad reads in the fixed p1/p2/p3/p4 order
/// expected by [`Quad::triangles`]. The emitted triangles then face the
/// `dv` x `du` cross product side.
pub(crate) fn write_grid(
    writer: &mut PointStreamWriter,
    base: Point3f,
    du: Vector3f,
    dv: Vector3f,
    divisions: u32,
) -> Result<()> {
    for i in 0..divisions {
        for j in 0..divisions {
            let (i, j) = (i as f32, j as f32);
            let quad = Quad::new(
                base + du * (i + 1.0) + dv * j,
                base + du * (i + 1.0) + dv * (j + 1.0),
                base + du * i + dv * j,
                base + du * i + dv * (j + 1.0),
            );
            writer.write_quad(&quad)?;
        }
    }
    Ok(())
}

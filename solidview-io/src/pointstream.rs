//! Point-stream format support
//!
//! Generated meshes are persisted as a flat stream of NUL-terminated ASCII
//! records, one `"x y z"` triple per vertex and three consecutive vertices
//! per triangle. There is no header, no count and no index: readers consume
//! records until end of stream. A well-formed file always holds a multiple
//! of three records.

use solidview_core::{Error, Point3f, Quad, Result};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Writer for the point-stream format.
///
/// Coordinates are rendered with Rust's default float formatting, the
/// shortest string that parses back to the same value, so records are
/// locale independent and round-trip exactly.
pub struct PointStreamWriter {
    writer: BufWriter<File>,
}

impl PointStreamWriter {
    /// Create a stream at `path`, truncating any existing file there.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Append one vertex record.
    pub fn write_point(&mut self, p: &Point3f) -> Result<()> {
        write!(self.writer, "{} {} {}", p.x, p.y, p.z)?;
        self.writer.write_all(&[0])?;
        Ok(())
    }

    /// Append one triangle, three records in the given winding order.
    pub fn write_triangle(&mut self, a: &Point3f, b: &Point3f, c: &Point3f) -> Result<()> {
        self.write_point(a)?;
        self.write_point(b)?;
        self.write_point(c)
    }

    /// Append a quad as its fixed two-triangle decomposition, six records.
    pub fn write_quad(&mut self, quad: &Quad) -> Result<()> {
        for tri in quad.triangles() {
            self.write_triangle(&tri[0], &tri[1], &tri[2])?;
        }
        Ok(())
    }

    /// Flush the stream. Each generator calls this once before returning,
    /// so a successful generation never leaves unflushed records behind.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Read every vertex record from a point-stream file.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point3f>> {
    let mut data = Vec::new();
    File::open(path)?.read_to_end(&mut data)?;
    parse_points(&data)
}

fn parse_points(data: &[u8]) -> Result<Vec<Point3f>> {
    let mut points = Vec::new();

    for record in data.split(|b| *b == 0) {
        if record.is_empty() {
            continue;
        }

        let text = std::str::from_utf8(record)
            .map_err(|_| Error::InvalidData("non-ASCII point record".to_string()))?;

        let mut coords = text.split_whitespace().map(|v| {
            v.parse::<f32>()
                .map_err(|_| Error::InvalidData(format!("invalid coordinate: {}", v)))
        });

        let (x, y, z) = match (coords.next(), coords.next(), coords.next()) {
            (Some(x), Some(y), Some(z)) => (x?, y?, z?),
            _ => {
                return Err(Error::InvalidData(format!(
                    "point record has fewer than 3 coordinates: {:?}",
                    text
                )))
            }
        };
        if coords.next().is_some() {
            return Err(Error::InvalidData(format!(
                "point record has more than 3 coordinates: {:?}",
                text
            )));
        }

        points.push(Point3f::new(x, y, z));
    }

    Ok(points)
}

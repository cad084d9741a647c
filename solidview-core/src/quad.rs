//! Quad helper and its fixed triangle decomposition
//!
//! Every primitive generator builds its surface out of quads (or single
//! triangles at polar regions). The split of a quad into two triangles is
//! defined exactly once, here, so that winding mistakes stay localized:
//! each generator only decides where the four corners go.

use crate::point::Point3f;

/// Four corner points of a surface patch, named in reading order:
///
/// ```text
/// p1 ---- p2
/// |        |
/// p3 ---- p4
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub p1: Point3f,
    pub p2: Point3f,
    pub p3: Point3f,
    pub p4: Point3f,
}

impl Quad {
    /// Create a quad from its four corners in reading order.
    pub fn new(p1: Point3f, p2: Point3f, p3: Point3f, p4: Point3f) -> Self {
        Self { p1, p2, p3, p4 }
    }

    /// Split into the two triangles `(p1, p3, p2)` and `(p3, p4, p2)`.
    ///
    /// With corners assigned so the quad reads left-to-right, top-to-bottom
    /// when seen from outside the solid, both triangles wind toward the
    /// viewer.
    pub fn triangles(&self) -> [[Point3f; 3]; 2] {
        [[self.p1, self.p3, self.p2], [self.p3, self.p4, self.p2]]
    }
}

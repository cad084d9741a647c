//! Procedural mesh generators for primitive solids
//!
//! Five generators map a handful of shape parameters to a point-stream
//! mesh file: plane, box, sphere, cone and cylinder. Generation is
//! deterministic, single threaded and one-shot: each call opens its own
//! output stream, writes the full triangle sequence and flushes before
//! returning.
//!
//! All generators share one convention, the quad decomposition defined in
//! `solidview_core::Quad`; each generator only computes where the four
//! corners of every patch go.

pub mod cone;
pub mod cuboid;
pub mod cylinder;
pub mod plane;
pub mod solid;
pub mod sphere;

mod grid;

pub use cone::cone;
pub use cuboid::cuboid;
pub use cylinder::cylinder;
pub use plane::plane;
pub use solid::Solid;
pub use sphere::sphere;

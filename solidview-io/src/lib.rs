//! I/O operations for solidview
//!
//! This crate covers the two file formats the system exchanges:
//! - the point-stream format the generator writes and the viewer reads
//! - the JSON scene description the viewer is launched with

pub mod pointstream;
pub mod scene;

pub use pointstream::*;
pub use scene::*;

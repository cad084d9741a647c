//! Core data structures for solidview
//!
//! This crate provides the geometry types shared by the mesh generator and
//! the scene viewer: point and vector aliases, the quad helper with its
//! fixed triangle decomposition, and the common error type.

pub mod error;
pub mod point;
pub mod quad;

pub use error::*;
pub use point::*;
pub use quad::*;

//! Scene viewer for solidview
//!
//! Loads a scene description plus the point-stream models it references
//! and renders them with a basic fly-through camera:
//! - flat-shaded triangle rendering with a wireframe toggle
//! - world axis overlay
//! - keyboard fly and mouse orbit controls

pub mod camera;
pub mod renderer;
pub mod shaders;
pub mod viewer;
pub mod world;

pub use camera::*;
pub use renderer::*;
pub use viewer::*;
pub use world::*;

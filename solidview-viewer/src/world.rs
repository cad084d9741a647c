//! Loaded scene state

use solidview_core::{Point3f, Result};
use solidview_io::Scene;
use std::path::Path;

/// Everything the render loop needs: the scene description and the vertex
/// list concatenated from every model it references. Built once by the
/// loader and passed down explicitly; nothing here is global.
pub struct World {
    pub scene: Scene,
    pub vertices: Vec<Point3f>,
}

impl World {
    /// Load the scene description and every model it references.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let scene = Scene::load(path)?;
        let vertices = scene.load_models()?;
        Ok(Self { scene, vertices })
    }

    /// Number of whole triangles in the vertex list.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solidview_io::PointStreamWriter;
    use std::fs;

    #[test]
    fn test_world_load() {
        let scene_file = "test_world_scene.json";
        let model_file = "test_world_model.3d";

        let mut writer = PointStreamWriter::create(model_file).unwrap();
        for _ in 0..2 {
            writer
                .write_triangle(
                    &Point3f::new(0.0, 0.0, 0.0),
                    &Point3f::new(1.0, 0.0, 0.0),
                    &Point3f::new(0.0, 1.0, 0.0),
                )
                .unwrap();
        }
        writer.finish().unwrap();

        fs::write(
            scene_file,
            r#"{
                "window": { "width": 640, "height": 480 },
                "camera": {
                    "position": { "x": 3.0, "y": 3.0, "z": 3.0 },
                    "look_at":  { "x": 0.0, "y": 0.0, "z": 0.0 },
                    "up":       { "x": 0.0, "y": 1.0, "z": 0.0 },
                    "projection": { "fov": 45.0, "near": 1.0, "far": 100.0 }
                },
                "groups": [ { "models": ["test_world_model.3d"] } ]
            }"#,
        )
        .unwrap();

        let world = World::load(scene_file).unwrap();
        assert_eq!(world.vertices.len(), 6);
        assert_eq!(world.triangle_count(), 2);
        assert_eq!(world.scene.window.width, 640);

        fs::remove_file(scene_file).unwrap();
        fs::remove_file(model_file).unwrap();
    }

    #[test]
    fn test_missing_model_errors() {
        let scene_file = "test_world_missing.json";
        fs::write(
            scene_file,
            r#"{
                "window": { "width": 640, "height": 480 },
                "camera": {
                    "position": { "x": 3.0, "y": 3.0, "z": 3.0 },
                    "look_at":  { "x": 0.0, "y": 0.0, "z": 0.0 },
                    "up":       { "x": 0.0, "y": 1.0, "z": 0.0 },
                    "projection": { "fov": 45.0, "near": 1.0, "far": 100.0 }
                },
                "groups": [ { "models": ["test_world_nonexistent.3d"] } ]
            }"#,
        )
        .unwrap();

        assert!(World::load(scene_file).is_err());

        fs::remove_file(scene_file).unwrap();
    }
}

//! Scene description loading
//!
//! The viewer is launched with a JSON scene document holding one window
//! node, one camera node and zero or more groups of model files. Parsing
//! is strict: a malformed document is an error, there is no recovery.

use serde::{Deserialize, Serialize};
use solidview_core::{Error, Point3f, Result, Vector3f};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::pointstream::read_points;

/// A named 3-component value in the scene document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3Config {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3Config {
    pub fn to_point(self) -> Point3f {
        Point3f::new(self.x, self.y, self.z)
    }

    pub fn to_vector(self) -> Vector3f {
        Vector3f::new(self.x, self.y, self.z)
    }
}

/// Window dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

/// Perspective projection parameters; `fov` is the vertical field of view
/// in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

/// Initial camera placement and projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: Vec3Config,
    pub look_at: Vec3Config,
    pub up: Vec3Config,
    pub projection: ProjectionConfig,
}

/// A group of model files rendered together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub models: Vec<PathBuf>,
}

/// Root of the scene document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

impl Scene {
    /// Load a scene description from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::Scene(format!("malformed scene description: {}", e)))
    }

    /// Read every model listed in every group, in document order, into a
    /// single vertex list.
    pub fn load_models(&self) -> Result<Vec<Point3f>> {
        let mut vertices = Vec::new();
        for group in &self.groups {
            for model in &group.models {
                vertices.extend(read_points(model)?);
            }
        }
        Ok(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointstream::PointStreamWriter;
    use std::fs;

    const SCENE_JSON: &str = r#"{
        "window": { "width": 800, "height": 600 },
        "camera": {
            "position": { "x": 5.0, "y": 5.0, "z": 5.0 },
            "look_at":  { "x": 0.0, "y": 0.0, "z": 0.0 },
            "up":       { "x": 0.0, "y": 1.0, "z": 0.0 },
            "projection": { "fov": 60.0, "near": 1.0, "far": 1000.0 }
        },
        "groups": [ { "models": ["test_scene_model.3d"] } ]
    }"#;

    #[test]
    fn test_load_scene() {
        let temp_file = "test_scene_load.json";
        fs::write(temp_file, SCENE_JSON).unwrap();

        let scene = Scene::load(temp_file).unwrap();
        assert_eq!(scene.window, WindowConfig { width: 800, height: 600 });
        assert_eq!(scene.camera.position.to_point(), Point3f::new(5.0, 5.0, 5.0));
        assert_eq!(scene.camera.up.to_vector(), Vector3f::new(0.0, 1.0, 0.0));
        assert_eq!(scene.camera.projection.fov, 60.0);
        assert_eq!(scene.groups.len(), 1);
        assert_eq!(scene.groups[0].models[0], PathBuf::from("test_scene_model.3d"));

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_groups_are_optional() {
        let temp_file = "test_scene_no_groups.json";
        let json = SCENE_JSON.replace(
            r#""groups": [ { "models": ["test_scene_model.3d"] } ]"#,
            r#""groups": []"#,
        );
        fs::write(temp_file, json).unwrap();

        let scene = Scene::load(temp_file).unwrap();
        assert!(scene.groups.is_empty());
        assert!(scene.load_models().unwrap().is_empty());

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_malformed_scene_errors() {
        let temp_file = "test_scene_malformed.json";
        fs::write(temp_file, r#"{ "window": { "width": 800 } }"#).unwrap();

        assert!(Scene::load(temp_file).is_err());

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_load_models_concatenates_groups() {
        let scene_file = "test_scene_models.json";
        let model_file = "test_scene_model.3d";
        fs::write(scene_file, SCENE_JSON).unwrap();

        let mut writer = PointStreamWriter::create(model_file).unwrap();
        writer
            .write_triangle(
                &Point3f::new(0.0, 0.0, 0.0),
                &Point3f::new(1.0, 0.0, 0.0),
                &Point3f::new(0.0, 1.0, 0.0),
            )
            .unwrap();
        writer.finish().unwrap();

        let scene = Scene::load(scene_file).unwrap();
        let vertices = scene.load_models().unwrap();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[1], Point3f::new(1.0, 0.0, 0.0));

        fs::remove_file(scene_file).unwrap();
        fs::remove_file(model_file).unwrap();
    }
}

//! Camera for 3D viewing

use nalgebra::{Matrix4, Perspective3, Rotation3, Unit};
use solidview_core::{Point3f, Vector3f};
use solidview_io::CameraConfig;

/// A perspective camera looking from `position` toward `target`.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3f,
    pub target: Point3f,
    pub up: Vector3f,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Create a new camera.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        position: Point3f,
        target: Point3f,
        up: Vector3f,
        fov: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self {
            position,
            target,
            up,
            fov,
            aspect_ratio,
            near,
            far,
        }
    }

    /// Build a camera from a scene description; the document stores the
    /// field of view in degrees.
    pub fn from_config(config: &CameraConfig, aspect_ratio: f32) -> Self {
        Self::new(
            config.position.to_point(),
            config.look_at.to_point(),
            config.up.to_vector(),
            config.projection.fov.to_radians(),
            aspect_ratio,
            config.projection.near,
            config.projection.far,
        )
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far).into_inner()
    }

    /// Fly forward (negative distance flies backward); moves the target
    /// along so the viewing direction is unchanged.
    pub fn move_forward(&mut self, distance: f32) {
        let direction = (self.target - self.position).normalize();
        self.position += direction * distance;
        self.target += direction * distance;
    }

    /// Slide sideways along the camera's right vector.
    pub fn strafe(&mut self, distance: f32) {
        let direction = (self.target - self.position).normalize();
        let right = direction.cross(&self.up).normalize();
        self.position += right * distance;
        self.target += right * distance;
    }

    /// Rotate the camera around the target, yaw about the up axis and
    /// pitch about the camera's right vector. Pitch stops short of the
    /// poles so the view never flips.
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        let mut offset = self.position - self.target;

        let up_axis = Unit::new_normalize(self.up);
        offset = Rotation3::from_axis_angle(&up_axis, -yaw) * offset;

        let right = (-offset).cross(&self.up);
        if right.norm() > 1e-6 {
            let right_axis = Unit::new_normalize(right);
            let pitched = Rotation3::from_axis_angle(&right_axis, pitch) * offset;
            if pitched.normalize().dot(&self.up.normalize()).abs() < 0.99 {
                offset = pitched;
            }
        }

        self.position = self.target + offset;
    }

    /// Move toward (positive) or away from (negative) the target by a
    /// fraction of the current distance, never crossing the target.
    pub fn zoom(&mut self, amount: f32) {
        let offset = self.position - self.target;
        let distance = offset.norm();
        let new_distance = (distance * (1.0 - amount)).max(self.near);
        self.position = self.target + offset.normalize() * new_distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use solidview_io::{ProjectionConfig, Vec3Config};

    fn test_config() -> CameraConfig {
        CameraConfig {
            position: Vec3Config { x: 0.0, y: 0.0, z: 5.0 },
            look_at: Vec3Config { x: 0.0, y: 0.0, z: 0.0 },
            up: Vec3Config { x: 0.0, y: 1.0, z: 0.0 },
            projection: ProjectionConfig { fov: 90.0, near: 1.0, far: 100.0 },
        }
    }

    #[test]
    fn test_from_config_converts_fov_to_radians() {
        let camera = Camera::from_config(&test_config(), 4.0 / 3.0);
        assert_relative_eq!(camera.fov, std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(camera.aspect_ratio, 4.0 / 3.0);
    }

    #[test]
    fn test_view_matrix_centers_position() {
        let camera = Camera::from_config(&test_config(), 1.0);
        let eye = camera.view_matrix().transform_point(&camera.position);
        assert_relative_eq!(eye.coords.norm(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_move_forward_keeps_direction() {
        let mut camera = Camera::from_config(&test_config(), 1.0);
        let before = (camera.target - camera.position).normalize();
        camera.move_forward(2.0);
        let after = (camera.target - camera.position).normalize();
        assert_relative_eq!(before.dot(&after), 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.position.z, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_orbit_preserves_distance() {
        let mut camera = Camera::from_config(&test_config(), 1.0);
        let before = (camera.position - camera.target).norm();
        camera.orbit(0.3, 0.2);
        let after = (camera.position - camera.target).norm();
        assert_relative_eq!(before, after, epsilon = 1e-4);
    }

    #[test]
    fn test_zoom_never_crosses_target() {
        let mut camera = Camera::from_config(&test_config(), 1.0);
        for _ in 0..100 {
            camera.zoom(0.5);
        }
        let distance = (camera.position - camera.target).norm();
        assert!(distance >= camera.near);
    }
}

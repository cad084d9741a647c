//! Point and vector type aliases
//!
//! Points are pure positional data; text serialization lives with the
//! point-stream format in `solidview-io`, not on the type itself.

use nalgebra::{Point3, Vector3};

/// A 3D point with single precision coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with single precision components
pub type Vector3f = Vector3<f32>;

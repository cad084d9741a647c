//! Primitive dispatch

use solidview_core::Result;
use std::path::Path;

use crate::{cone, cuboid, cylinder, plane, sphere};

/// A primitive solid together with its shape parameters.
///
/// Generation is fully determined by the variant: identical parameters
/// always produce identical files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solid {
    Plane {
        length: u32,
        division: u32,
    },
    Box {
        length: u32,
        division: u32,
    },
    Sphere {
        radius: f32,
        slices: u32,
        stacks: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        slices: u32,
        stacks: u32,
    },
    Cylinder {
        radius: f32,
        height: f32,
        slices: u32,
    },
}

impl Solid {
    /// Run the matching generator, writing the mesh to `path`.
    pub fn generate<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        match *self {
            Solid::Plane { length, division } => plane(length, division, path),
            Solid::Box { length, division } => cuboid(length, division, path),
            Solid::Sphere {
                radius,
                slices,
                stacks,
            } => sphere(radius, slices, stacks, path),
            Solid::Cone {
                radius,
                height,
                slices,
                stacks,
            } => cone(radius, height, slices, stacks, path),
            Solid::Cylinder {
                radius,
                height,
                slices,
            } => cylinder(radius, height, slices, path),
        }
    }

    /// Exact number of vertex records the generator emits.
    pub fn point_count(&self) -> usize {
        match *self {
            Solid::Plane { division, .. } => 6 * (division as usize).pow(2),
            Solid::Box { division, .. } => 36 * (division as usize).pow(2),
            Solid::Sphere { slices, stacks, .. } => {
                let (slices, stacks) = (slices as usize, stacks as usize);
                if stacks == 1 {
                    // Only the south-pole fan fires.
                    3 * slices
                } else {
                    6 * slices + 6 * slices * (stacks - 2)
                }
            }
            Solid::Cone { slices, stacks, .. } => {
                let (slices, stacks) = (slices as usize, stacks as usize);
                3 * slices + 6 * slices * stacks
            }
            Solid::Cylinder { slices, .. } => 12 * slices as usize,
        }
    }
}

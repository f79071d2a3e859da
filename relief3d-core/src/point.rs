//! Point types and related functionality

use bytemuck::{Pod, Zeroable};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// A camera-space point produced by depth projection
///
/// Carries the source pixel's color in normalized `[0, 1]` channels and the
/// screen-space size used by the point-cloud render path. Immutable once
/// produced by the projector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct DepthPoint3f {
    pub position: Point3f,
    pub color: [f32; 3],
    pub size: f32,
}

unsafe impl Pod for DepthPoint3f {}
unsafe impl Zeroable for DepthPoint3f {}

impl DepthPoint3f {
    pub fn new(position: Point3f, color: [f32; 3], size: f32) -> Self {
        Self {
            position,
            color,
            size,
        }
    }
}

impl Default for DepthPoint3f {
    fn default() -> Self {
        Self {
            position: Point3f::origin(),
            color: [1.0, 1.0, 1.0],
            size: 1.0,
        }
    }
}

impl From<DepthPoint3f> for Point3f {
    fn from(point: DepthPoint3f) -> Self {
        point.position
    }
}

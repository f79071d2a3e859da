//! The synchronous reconstruction pipeline
//!
//! Decode, project and assemble in one pure pass over a pair of RGBA
//! buffers. No I/O and no shared state live here, so the whole stage is
//! unit-testable without touching a scene or the filesystem.

use crate::depth::decode_depth;
use crate::params::ReconstructionParams;
use crate::point_cloud::build_point_cloud;
use crate::projector::project;
use crate::surface::build_surface_mesh;
use relief3d_core::{
    Aabb, Drawable, Error, PointCloudGeometry, Result, RgbaBuffer, SurfaceMesh,
};
use tracing::debug;

/// Geometry assembly strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Unconnected colored points sized by projected depth
    PointCloud,
    /// Connected, UV-mapped triangulated grid surface
    #[default]
    SurfaceMesh,
}

/// Configuration for a reconstruction run
#[derive(Debug, Clone, Default)]
pub struct ReconstructionConfig {
    pub mode: RenderMode,
    pub params: ReconstructionParams,
}

/// Exactly one geometry payload per reconstructed model
#[derive(Debug, Clone)]
pub enum ReconstructedGeometry {
    PointCloud(PointCloudGeometry),
    Surface(SurfaceMesh),
}

impl ReconstructedGeometry {
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::PointCloud(cloud) => cloud.len(),
            Self::Surface(mesh) => mesh.vertex_count(),
        }
    }

    pub fn face_count(&self) -> usize {
        match self {
            Self::PointCloud(_) => 0,
            Self::Surface(mesh) => mesh.face_count(),
        }
    }
}

impl Drawable for ReconstructedGeometry {
    fn bounding_box(&self) -> Aabb {
        match self {
            Self::PointCloud(cloud) => cloud.bounding_box(),
            Self::Surface(mesh) => mesh.bounding_box(),
        }
    }
}

/// Result of a reconstruction run: the geometry plus the bounding box
/// accumulated during projection, used downstream for framing
#[derive(Debug, Clone)]
pub struct Reconstruction {
    pub geometry: ReconstructedGeometry,
    pub bounds: Aabb,
}

/// Run decode, projection and assembly over an image/depth pair
///
/// Both buffers must already share dimensions; `relief3d-io` resamples the
/// depth source on load. Fails without partial output — callers never see
/// half-built geometry.
pub fn reconstruct(
    image: &RgbaBuffer,
    depth: &RgbaBuffer,
    config: &ReconstructionConfig,
) -> Result<Reconstruction> {
    if !depth.dimensions_match(image) {
        return Err(Error::DimensionMismatch {
            expected: image.pixel_count(),
            actual: depth.pixel_count(),
        });
    }

    let codes = decode_depth(depth);
    let (points, bounds) = project(&codes, image, &config.params)?;

    let geometry = match config.mode {
        RenderMode::PointCloud => ReconstructedGeometry::PointCloud(build_point_cloud(
            &points,
            image.width(),
            image.height(),
        )?),
        RenderMode::SurfaceMesh => ReconstructedGeometry::Surface(build_surface_mesh(
            &points,
            image.width(),
            image.height(),
        )?),
    };

    debug!(
        mode = ?config.mode,
        vertices = geometry.vertex_count(),
        faces = geometry.face_count(),
        "reconstruction complete"
    );

    Ok(Reconstruction { geometry, bounds })
}

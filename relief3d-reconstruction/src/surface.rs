//! Surface mesh assembly over a pixel grid

use rayon::prelude::*;
use relief3d_core::{DepthPointCloud, Error, Result, SurfaceMesh};

/// Triangulate a projected point grid into a UV-mapped surface mesh
///
/// Vertices keep the projector's linear pixel order so the parallel UV
/// array stays aligned; `uv = (w / W, 1 - h / H)` for pixel `(w, h)`. Every
/// interior 2x2 cell emits two triangles, `2 * (W-1) * (H-1)` faces total,
/// wound front-facing toward the camera's -z view direction. Per-vertex
/// normals are derived from the finished topology, and the mesh is
/// double-sided since projected depth can fold the surface.
///
/// Fails with `DimensionMismatch` when the point count does not cover the
/// grid and with `DegenerateGrid` when either dimension is below 2.
pub fn build_surface_mesh(
    points: &DepthPointCloud,
    width: u32,
    height: u32,
) -> Result<SurfaceMesh> {
    let expected = width as usize * height as usize;
    if points.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: points.len(),
        });
    }
    if width < 2 || height < 2 {
        return Err(Error::DegenerateGrid { width, height });
    }

    let width_f = width as f32;
    let height_f = height as f32;
    let mut vertices = Vec::with_capacity(expected);
    let mut uvs = Vec::with_capacity(expected);
    for h in 0..height {
        for w in 0..width {
            let point = &points[(h * width + w) as usize];
            vertices.push(point.position);
            uvs.push([w as f32 / width_f, 1.0 - h as f32 / height_f]);
        }
    }

    let width = width as usize;
    let faces: Vec<[usize; 3]> = (0..height as usize - 1)
        .into_par_iter()
        .flat_map_iter(|h| {
            (0..width - 1).flat_map(move |w| {
                let index = h * width + w;
                [
                    [index, index + width, index + width + 1],
                    [index, index + width + 1, index + 1],
                ]
            })
        })
        .collect();

    let mut mesh = SurfaceMesh::from_vertices_uvs_faces(vertices, uvs, faces);
    mesh.compute_vertex_normals();
    Ok(mesh)
}

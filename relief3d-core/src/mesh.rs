//! Mesh data structures and functionality

use crate::point::*;
use serde::{Deserialize, Serialize};

/// A UV-mapped triangle mesh
///
/// Vertices keep the producing grid's linear order so the parallel UV array
/// stays aligned with them. Normals are derived from the triangle topology,
/// never supplied independently of it. Meshes default to double-sided
/// because projected depth can fold the surface toward the camera.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceMesh {
    pub vertices: Vec<Point3f>,
    pub uvs: Vec<[f32; 2]>,
    pub faces: Vec<[usize; 3]>,
    pub normals: Option<Vec<Vector3f>>,
    pub double_sided: bool,
}

impl SurfaceMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            uvs: Vec::new(),
            faces: Vec::new(),
            normals: None,
            double_sided: true,
        }
    }

    /// Create a mesh from vertices, texture coordinates and faces
    pub fn from_vertices_uvs_faces(
        vertices: Vec<Point3f>,
        uvs: Vec<[f32; 2]>,
        faces: Vec<[usize; 3]>,
    ) -> Self {
        Self {
            vertices,
            uvs,
            faces,
            normals: None,
            double_sided: true,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Calculate unnormalized face normals
    ///
    /// The cross product's magnitude is twice the face area, so summing
    /// these per vertex gives an area-weighted average.
    pub fn calculate_face_normals(&self) -> Vec<Vector3f> {
        self.faces
            .iter()
            .map(|face| {
                let v0 = self.vertices[face[0]];
                let v1 = self.vertices[face[1]];
                let v2 = self.vertices[face[2]];

                let edge1 = v1 - v0;
                let edge2 = v2 - v0;

                edge1.cross(&edge2)
            })
            .collect()
    }

    /// Derive per-vertex normals by averaging adjacent face normals
    ///
    /// Vertices not referenced by any face keep a zero normal.
    pub fn compute_vertex_normals(&mut self) {
        let face_normals = self.calculate_face_normals();
        let mut accumulated = vec![Vector3f::zeros(); self.vertices.len()];

        for (face, normal) in self.faces.iter().zip(&face_normals) {
            for &vertex in face {
                accumulated[vertex] += normal;
            }
        }

        for normal in &mut accumulated {
            if let Some(unit) = normal.try_normalize(f32::EPSILON) {
                *normal = unit;
            }
        }

        self.normals = Some(accumulated);
    }
}

impl Default for SurfaceMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vertex_normals_of_a_single_triangle() {
        let mut mesh = SurfaceMesh::from_vertices_uvs_faces(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(0.0, 1.0, 0.0),
            ],
            vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
            vec![[0, 1, 2]],
        );
        mesh.compute_vertex_normals();

        let normals = mesh.normals.as_ref().unwrap();
        assert_eq!(normals.len(), 3);
        for normal in normals {
            assert_relative_eq!(normal.x, 0.0);
            assert_relative_eq!(normal.y, 0.0);
            assert_relative_eq!(normal.z, 1.0);
        }
    }

    #[test]
    fn unreferenced_vertices_keep_zero_normals() {
        let mut mesh = SurfaceMesh::from_vertices_uvs_faces(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(0.0, 1.0, 0.0),
                Point3f::new(5.0, 5.0, 5.0),
            ],
            vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
            vec![[0, 1, 2]],
        );
        mesh.compute_vertex_normals();

        let normals = mesh.normals.as_ref().unwrap();
        assert_eq!(normals[3], Vector3f::zeros());
    }
}

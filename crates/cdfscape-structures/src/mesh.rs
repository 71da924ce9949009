//! Indexed triangle meshes.
//!
//! This module contains the mesh container shared by both CDF representations
//! and the derived data computed from it:
//! - Area-weighted vertex normals for smooth shading
//! - Edge extraction and position-welded wireframe overlays
//! - Interleaved vertex packing for GPU upload

use std::collections::HashSet;

use bytemuck::{Pod, Zeroable};
use cdfscape_core::{CdfscapeError, Result};
use glam::{UVec3, Vec3};
use serde::Serialize;

use crate::LineSet;

/// Interleaved position + normal vertex, laid out for direct upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// An indexed triangle mesh with per-vertex normals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TriangleMesh {
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    faces: Vec<UVec3>,
}

impl TriangleMesh {
    /// Creates a mesh and computes smooth vertex normals.
    ///
    /// Fails if any face references a vertex that does not exist.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<UVec3>) -> Result<Self> {
        let n = vertices.len();
        if let Some(bad) = faces
            .iter()
            .flat_map(|f| f.to_array())
            .find(|&v| v as usize >= n)
        {
            return Err(CdfscapeError::invalid(format!(
                "face references vertex {bad} but mesh has {n} vertices"
            )));
        }
        let mut mesh = Self {
            vertices,
            normals: Vec::new(),
            faces,
        };
        mesh.compute_vertex_normals();
        Ok(mesh)
    }

    /// Creates a mesh with caller-supplied normals, one per vertex.
    pub fn with_normals(vertices: Vec<Vec3>, normals: Vec<Vec3>, faces: Vec<UVec3>) -> Result<Self> {
        if normals.len() != vertices.len() {
            return Err(CdfscapeError::SizeMismatch {
                expected: vertices.len(),
                actual: normals.len(),
            });
        }
        let mut mesh = Self::new(vertices, faces)?;
        mesh.normals = normals;
        Ok(mesh)
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[must_use]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    #[must_use]
    pub fn faces(&self) -> &[UVec3] {
        &self.faces
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Appends another mesh, re-indexing its faces.
    pub fn append(&mut self, other: &TriangleMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.faces
            .extend(other.faces.iter().map(|f| *f + UVec3::splat(base)));
    }

    /// Unit normal of one face.
    #[must_use]
    pub fn face_normal(&self, face: usize) -> Vec3 {
        let [a, b, c] = self.face_positions(face);
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for a mesh without vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v))),
        )
    }

    /// Computes vertex normals as the area-weighted average of incident face normals.
    fn compute_vertex_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.vertices.len(), Vec3::ZERO);

        for face in &self.faces {
            let [a, b, c] = face.to_array().map(|i| self.vertices[i as usize]);
            // Cross product length is twice the area, so this is already area-weighted.
            let weighted = (b - a).cross(c - a);
            for vi in face.to_array() {
                self.normals[vi as usize] += weighted;
            }
        }

        for normal in &mut self.normals {
            *normal = normal.normalize_or_zero();
        }
    }

    fn face_positions(&self, face: usize) -> [Vec3; 3] {
        self.faces[face].to_array().map(|i| self.vertices[i as usize])
    }

    /// Undirected edges of the triangulation, unique by vertex index.
    ///
    /// Split vertices (as on flat-shaded boxes) make coincident edges with
    /// different indices; [`Self::wireframe`] merges those.
    #[must_use]
    pub fn edges(&self) -> Vec<[u32; 2]> {
        let mut seen = HashSet::with_capacity(self.faces.len() * 3 / 2);
        let mut edges = Vec::with_capacity(self.faces.len() * 3 / 2);
        for face in &self.faces {
            let [a, b, c] = face.to_array();
            for (u, v) in [(a, b), (b, c), (c, a)] {
                let key = (u.min(v), u.max(v));
                if seen.insert(key) {
                    edges.push([key.0, key.1]);
                }
            }
        }
        edges
    }

    /// Builds a wireframe line set from the triangle edges, drawing each
    /// segment once even when several vertex pairs share its endpoints.
    #[must_use]
    pub fn wireframe(&self, name: impl Into<String>, color: Vec3) -> LineSet {
        let mut seen = HashSet::with_capacity(self.faces.len() * 3 / 2);
        let segments = self
            .edges()
            .into_iter()
            .map(|[u, v]| [self.vertices[u as usize], self.vertices[v as usize]])
            .filter(|&[a, b]| {
                let (ka, kb) = (position_key(a), position_key(b));
                seen.insert(if ka <= kb { (ka, kb) } else { (kb, ka) })
            })
            .collect();
        LineSet::from_segments(name, color, segments)
    }

    /// Packs positions and normals into interleaved vertices.
    #[must_use]
    pub fn gpu_vertices(&self) -> Vec<MeshVertex> {
        self.vertices
            .iter()
            .zip(&self.normals)
            .map(|(p, n)| MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
            })
            .collect()
    }

    /// Flattened triangle indices.
    #[must_use]
    pub fn gpu_indices(&self) -> Vec<u32> {
        self.faces.iter().flat_map(|f| f.to_array()).collect()
    }
}

/// Views a vertex slice as raw bytes for buffer upload.
#[must_use]
pub fn vertex_bytes(vertices: &[MeshVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Bitwise key of a position; adding zero folds `-0.0` into `0.0`.
fn position_key(p: Vec3) -> [u32; 3] {
    (p + Vec3::ZERO).to_array().map(f32::to_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> TriangleMesh {
        // Unit square in the XZ plane, wound to face +Y.
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        let faces = vec![UVec3::new(0, 1, 3), UVec3::new(1, 2, 3)];
        TriangleMesh::new(vertices, faces).unwrap()
    }

    #[test]
    fn test_quad_normals_face_up() {
        let mesh = quad();
        for n in mesh.normals() {
            assert!(n.abs_diff_eq(Vec3::Y, 1e-6));
        }
        assert!(mesh.face_normal(1).abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn test_edges_deduplicated() {
        let mesh = quad();
        // 4 border edges + 1 shared diagonal.
        assert_eq!(mesh.edges().len(), 5);
        let wire = mesh.wireframe("wire", Vec3::ONE);
        assert_eq!(wire.len(), 5);
    }

    #[test]
    fn test_wireframe_welds_split_vertices() {
        // Two triangles sharing the diagonal by position but not by index.
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(-0.0, 0.0, 1.0),
        ];
        let faces = vec![UVec3::new(0, 2, 1), UVec3::new(3, 5, 4)];
        let mesh = TriangleMesh::new(vertices, faces).unwrap();
        assert_eq!(mesh.edges().len(), 6);
        assert_eq!(mesh.wireframe("wire", Vec3::ONE).len(), 5);
    }

    #[test]
    fn test_invalid_face_index() {
        let err = TriangleMesh::new(vec![Vec3::ZERO; 2], vec![UVec3::new(0, 1, 2)]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_with_normals_size_mismatch() {
        let err = TriangleMesh::with_normals(vec![Vec3::ZERO; 3], vec![Vec3::Y], vec![])
            .unwrap_err();
        assert!(matches!(err, CdfscapeError::SizeMismatch { expected: 3, actual: 1 }));
    }

    #[test]
    fn test_append_reindexes() {
        let mut mesh = quad();
        let mut other = quad();
        other.translate(Vec3::X * 2.0);
        mesh.append(&other);
        assert_eq!(mesh.num_vertices(), 8);
        assert_eq!(mesh.num_faces(), 4);
        assert_eq!(mesh.faces()[2], UVec3::new(4, 5, 7));
        assert_eq!(mesh.normals().len(), 8);
        assert_eq!(
            mesh.bounds(),
            Some((Vec3::ZERO, Vec3::new(3.0, 0.0, 1.0)))
        );
    }

    #[test]
    fn test_gpu_packing() {
        let mesh = quad();
        let verts = mesh.gpu_vertices();
        assert_eq!(verts.len(), 4);
        assert_eq!(verts[2].position, [1.0, 0.0, 1.0]);
        assert_eq!(vertex_bytes(&verts).len(), 4 * 6 * 4);
        assert_eq!(mesh.gpu_indices(), vec![0, 1, 3, 1, 2, 3]);
    }

    #[test]
    fn test_empty_bounds() {
        assert!(TriangleMesh::default().bounds().is_none());
    }
}

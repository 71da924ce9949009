//! The continuous CDF surface.

use cdfscape_core::{CdfscapeError, ContinuousOptions, HeightField, Result, SampleMode};
use glam::{UVec3, Vec3};
use serde::Serialize;

use crate::{LineSet, Material, TriangleMesh};

/// A displaced plane mesh built from a continuous height field, with a
/// wireframe overlay.
#[derive(Debug, Clone, Serialize)]
pub struct ContinuousSurface {
    mesh: TriangleMesh,
    wireframe: LineSet,
    material: Material,
}

impl ContinuousSurface {
    /// Triangulates `field` (two triangles per grid quad, facing +Y) and lifts
    /// the result by `options.y_offset`.
    pub fn build(
        field: &HeightField,
        options: &ContinuousOptions,
        wireframe_color: Vec3,
    ) -> Result<Self> {
        if field.mode() != SampleMode::Continuous {
            return Err(CdfscapeError::invalid(format!(
                "continuous surface needs a continuous height field, got {}",
                field.mode()
            )));
        }

        let mut mesh = TriangleMesh::new(
            field.iter().map(|s| s.position()).collect(),
            grid_faces(field.columns(), field.rows()),
        )?;
        mesh.translate(Vec3::Y * options.y_offset);

        let wireframe = mesh.wireframe("cdf_wireframe", wireframe_color);
        let material = Material::new(options.color, options.opacity, options.double_sided);
        log::debug!(
            "built continuous surface: {} vertices, {} triangles",
            mesh.num_vertices(),
            mesh.num_faces()
        );

        Ok(Self {
            mesh,
            wireframe,
            material,
        })
    }

    #[must_use]
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    #[must_use]
    pub fn wireframe(&self) -> &LineSet {
        &self.wireframe
    }

    #[must_use]
    pub fn material(&self) -> Material {
        self.material
    }
}

/// Triangle indices for a `columns x rows` vertex grid stored with the column
/// index outer.
fn grid_faces(columns: usize, rows: usize) -> Vec<UVec3> {
    if columns < 2 || rows < 2 {
        return Vec::new();
    }
    let idx = |i: usize, j: usize| (i * rows + j) as u32;
    let mut faces = Vec::with_capacity((columns - 1) * (rows - 1) * 2);
    for i in 0..columns - 1 {
        for j in 0..rows - 1 {
            let a = idx(i, j);
            let b = idx(i, j + 1);
            let c = idx(i + 1, j + 1);
            let d = idx(i + 1, j);
            faces.push(UVec3::new(a, b, d));
            faces.push(UVec3::new(b, c, d));
        }
    }
    faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdfscape_core::{sample_continuous, sample_discrete, Grid};

    #[test]
    fn test_surface_counts() {
        let options = ContinuousOptions::default();
        let field = sample_continuous(&options.grid().unwrap()).unwrap();
        let surface = ContinuousSurface::build(&field, &options, Vec3::ONE).unwrap();

        assert_eq!(surface.mesh().num_vertices(), 41 * 41);
        assert_eq!(surface.mesh().num_faces(), 40 * 40 * 2);
        // Grid edges: horizontal + vertical + one diagonal per quad.
        assert_eq!(surface.wireframe().len(), 40 * 41 * 2 + 40 * 40);
        assert!(surface.material().double_sided);
    }

    #[test]
    fn test_surface_is_lifted() {
        let options = ContinuousOptions::default();
        let grid = Grid::new(1, 1, 20.0, 20.0).unwrap();
        let field = sample_continuous(&grid).unwrap();
        let surface = ContinuousSurface::build(&field, &options, Vec3::ONE).unwrap();

        let (lo, hi) = surface.mesh().bounds().unwrap();
        assert_eq!(lo, Vec3::new(-10.0, 1.0, -10.0));
        assert!((hi.y - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_normals_point_up() {
        let options = ContinuousOptions::default();
        let field = sample_continuous(&Grid::square(8, 20.0).unwrap()).unwrap();
        let surface = ContinuousSurface::build(&field, &options, Vec3::ONE).unwrap();
        assert!(surface.mesh().normals().iter().all(|n| n.y > 0.0));
    }

    #[test]
    fn test_rejects_discrete_field() {
        let field = sample_discrete(2, 1.0).unwrap();
        let err =
            ContinuousSurface::build(&field, &ContinuousOptions::default(), Vec3::ONE).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    proptest::proptest! {
        #[test]
        fn prop_grid_triangulation_counts(width in 1u32..20, depth in 1u32..20) {
            let grid = Grid::new(width, depth, 20.0, 20.0).unwrap();
            let field = sample_continuous(&grid).unwrap();
            let surface =
                ContinuousSurface::build(&field, &ContinuousOptions::default(), Vec3::ONE).unwrap();
            let (w, d) = (width as usize, depth as usize);
            proptest::prop_assert_eq!(surface.mesh().num_faces(), 2 * w * d);
            proptest::prop_assert_eq!(
                surface.wireframe().len(),
                w * (d + 1) + (w + 1) * d + w * d
            );
        }
    }
}

//! The discrete CDF surface: one extruded box per cell.

use cdfscape_core::{CdfscapeError, DiscreteOptions, HeightField, Result, SampleMode};
use glam::{UVec3, Vec3};
use serde::Serialize;

use crate::{LineSet, Material, TriangleMesh};

/// An axis-aligned box standing on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepBox {
    /// Centre of the box; `center.y` is half its height.
    pub center: Vec3,
    /// Full extents along X, Y and Z.
    pub size: Vec3,
}

impl StepBox {
    #[must_use]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Builds the box as 6 flat-shaded faces (24 vertices, 12 triangles).
    pub fn to_mesh(&self) -> Result<TriangleMesh> {
        let h = self.size * 0.5;
        let c = self.center;

        // (normal, u axis, v axis) per face; u x v == normal keeps winding outward.
        let sides = [
            (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        ];

        let mut vertices: Vec<Vec3> = Vec::with_capacity(24);
        let mut normals: Vec<Vec3> = Vec::with_capacity(24);
        let mut faces = Vec::with_capacity(12);
        for (normal, u, v) in sides {
            let base = vertices.len() as u32;
            let face_center = c + normal * h;
            let du = u * h;
            let dv = v * h;
            vertices.extend([
                face_center - du - dv,
                face_center + du - dv,
                face_center + du + dv,
                face_center - du + dv,
            ]);
            normals.extend([normal; 4]);
            faces.push(UVec3::new(base, base + 1, base + 2));
            faces.push(UVec3::new(base, base + 2, base + 3));
        }

        TriangleMesh::with_normals(vertices, normals, faces)
    }
}

/// The field of step boxes built from a discrete height field, merged into a
/// single mesh with a wireframe overlay.
#[derive(Debug, Clone, Serialize)]
pub struct DiscreteSteps {
    boxes: Vec<StepBox>,
    mesh: TriangleMesh,
    wireframe: LineSet,
    material: Material,
}

impl DiscreteSteps {
    /// Turns each sample into a box with a `(step_size * footprint)^2`
    /// footprint, standing on `y = 0` and reaching the sample height.
    pub fn build(field: &HeightField, options: &DiscreteOptions, wireframe_color: Vec3) -> Result<Self> {
        if field.mode() != SampleMode::Discrete {
            return Err(CdfscapeError::invalid(format!(
                "step field needs a discrete height field, got {}",
                field.mode()
            )));
        }

        let side = options.step_size * options.footprint;
        let boxes: Vec<StepBox> = field
            .iter()
            .map(|s| StepBox {
                center: Vec3::new(s.x, s.height * 0.5, s.z),
                size: Vec3::new(side, s.height, side),
            })
            .collect();

        let mut mesh = TriangleMesh::default();
        for step in &boxes {
            mesh.append(&step.to_mesh()?);
        }
        let wireframe = mesh.wireframe("cdf_wireframe", wireframe_color);
        let material = Material::new(options.color, options.opacity, false);
        log::debug!(
            "built discrete steps: {} boxes, {} triangles",
            boxes.len(),
            mesh.num_faces()
        );

        Ok(Self {
            boxes,
            mesh,
            wireframe,
            material,
        })
    }

    #[must_use]
    pub fn boxes(&self) -> &[StepBox] {
        &self.boxes
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

//! PLY export for triangle meshes.

use std::io::Write;
use std::path::Path;

use cdfscape_core::{CdfscapeError, Result};
use ply_rs::ply::{
    Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType,
    ScalarType,
};
use ply_rs::writer::Writer;

use crate::TriangleMesh;

/// Writes `mesh` as an ASCII PLY with positions, normals and triangle faces.
pub fn write_ply<W: Write>(out: &mut W, mesh: &TriangleMesh) -> Result<usize> {
    let mut ply = Ply::<DefaultElement>::new();
    ply.header.encoding = Encoding::Ascii;
    ply.header
        .comments
        .push("exported by cdfscape".to_string());

    let mut vertex_def = ElementDef::new("vertex".to_string());
    for name in ["x", "y", "z", "nx", "ny", "nz"] {
        vertex_def.properties.add(PropertyDef::new(
            name.to_string(),
            PropertyType::Scalar(ScalarType::Float),
        ));
    }
    ply.header.elements.add(vertex_def);

    let mut face_def = ElementDef::new("face".to_string());
    face_def.properties.add(PropertyDef::new(
        "vertex_indices".to_string(),
        PropertyType::List(ScalarType::UChar, ScalarType::Int),
    ));
    ply.header.elements.add(face_def);

    let vertices = mesh
        .vertices()
        .iter()
        .zip(mesh.normals())
        .map(|(p, n)| {
            let mut element = DefaultElement::new();
            for (name, value) in [
                ("x", p.x),
                ("y", p.y),
                ("z", p.z),
                ("nx", n.x),
                ("ny", n.y),
                ("nz", n.z),
            ] {
                element.insert(name.to_string(), Property::Float(value));
            }
            element
        })
        .collect();
    ply.payload.insert("vertex".to_string(), vertices);

    let faces = mesh
        .faces()
        .iter()
        .map(|f| {
            let mut element = DefaultElement::new();
            let indices = f.to_array().iter().map(|&i| i as i32).collect();
            element.insert("vertex_indices".to_string(), Property::ListInt(indices));
            element
        })
        .collect();
    ply.payload.insert("face".to_string(), faces);

    ply.make_consistent()
        .map_err(|e| CdfscapeError::Ply(format!("{e:?}")))?;

    let writer = Writer::new();
    let written = writer.write_ply(out, &mut ply)?;
    log::debug!(
        "wrote PLY: {} vertices, {} faces, {written} bytes",
        mesh.num_vertices(),
        mesh.num_faces()
    );
    Ok(written)
}

/// Writes `mesh` to a PLY file at `path`.
pub fn save_ply(path: impl AsRef<Path>, mesh: &TriangleMesh) -> Result<()> {
    let path = path.as_ref();
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_ply(&mut file, mesh)?;
    file.flush()?;
    log::info!("saved mesh to {}", path.display());
    Ok(())
}

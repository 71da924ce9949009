//! Demo showing basic cdfscape usage.
//!
//! Assembles the scene for a desktop viewport, toggles between the two CDF
//! representations, and writes each one to a PLY file next to a JSON summary.

use cdfscape::*;

fn main() -> Result<()> {
    init_logging();

    let options = match std::env::args().nth(1) {
        Some(path) => SceneOptions::load(path)?,
        None => SceneOptions::default(),
    };

    let viewport = Viewport::new(1280, 720, 1.0)?;
    let mut scene = SceneAssembler::new(options, viewport)?;
    let out_dir = std::env::temp_dir();

    for _ in 0..2 {
        let mode = scene.mode();
        let path = out_dir.join(format!("cdfscape_{mode}.ply"));
        scene.export_cdf_ply(&path)?;
        println!(
            "{mode}: {} vertices, {} triangles -> {}",
            scene.cdf().mesh().num_vertices(),
            scene.cdf().mesh().num_faces(),
            path.display()
        );
        scene.toggle()?;
    }

    // Simulate rotating a phone to landscape.
    scene.orientation_changed(Viewport::new(740, 360, 3.0)?);
    println!("{}", scene.to_json()?);

    Ok(())
}

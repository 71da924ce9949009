//! cdfscape: an interactive 3D scene depicting a cumulative distribution function.
//!
//! The scene shows coordinate axes, grids on the three coordinate planes, tick
//! marks with numeric labels, and a CDF surface that can be toggled between a
//! smooth continuous mesh and a field of discrete steps. Everything is produced
//! as renderer-agnostic descriptors; drawing, text rasterization and input
//! handling belong to the rendering layer that consumes them.
//!
//! # Quick Start
//!
//! ```no_run
//! use cdfscape::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let viewport = Viewport::new(1280, 720, 1.0)?;
//!     let mut scene = SceneAssembler::with_defaults(viewport)?;
//!
//!     // Swap the smooth surface for the stepped one.
//!     scene.set_mode(SampleMode::Discrete)?;
//!     println!("{}", scene.to_json()?);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Sampling without a scene
//!
//! The samplers are plain functions and can be used on their own:
//!
//! ```
//! use cdfscape::{sample_continuous, sample_discrete, Grid};
//!
//! let field = sample_continuous(&Grid::new(1, 1, 20.0, 20.0).unwrap()).unwrap();
//! assert_eq!(field.len(), 4);
//!
//! let steps = sample_discrete(2, 1.0).unwrap();
//! assert_eq!(steps.get(1, 1).unwrap().height, 1.5);
//! ```

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod interaction;
pub mod layer;
pub mod lights;
pub mod scene;

// Re-export core types
pub use cdfscape_core::{
    error::{CdfscapeError, Result},
    grid::{Grid, SampleMode},
    height_field::{HeightField, HeightSample},
    options::{SceneOptions, SurfaceOptions},
    sampler::{sample, sample_continuous, sample_discrete},
    viewport::{ControlProfile, LabelStyle, Viewport, ViewportClass},
    Vec3,
};

// Re-export structures
pub use cdfscape_structures::{
    vertex_bytes, Axes, ContinuousSurface, DiscreteSteps, GridPlanes, Label, LineSet, Material,
    MeshVertex, StepBox, TickLabels, Ticks, TriangleMesh,
};

pub use camera::CameraRig;
pub use interaction::{TouchPolicy, ORIENTATION_SETTLE_DELAY};
pub use layer::CdfLayer;
pub use lights::{AmbientLight, DirectionalLight, Lights};
pub use scene::{SceneAssembler, SceneSummary};

/// Initializes logging from the `RUST_LOG` environment variable.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::try_init();
    log::debug!("cdfscape logging initialized");
}

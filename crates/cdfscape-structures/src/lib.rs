//! Scene structures for cdfscape.
//!
//! This crate turns core output into renderer-agnostic scene descriptors:
//! - Line sets for axes, ticks, grid planes and wireframes
//! - Billboard labels for axis titles and tick numbers
//! - The continuous CDF surface mesh and the discrete step boxes
//! - Interleaved vertex packing and PLY export

// Graphics code intentionally uses casts for indices, colors, and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod axes;
pub mod grid_planes;
pub mod labels;
pub mod line_set;
pub mod material;
pub mod mesh;
pub mod ply;
pub mod steps;
pub mod surface;
pub mod ticks;

pub use axes::Axes;
pub use grid_planes::{GridPlane, GridPlanes};
pub use labels::{Label, TickLabels};
pub use line_set::LineSet;
pub use material::Material;
pub use mesh::{vertex_bytes, MeshVertex, TriangleMesh};
pub use ply::{save_ply, write_ply};
pub use steps::{DiscreteSteps, StepBox};
pub use surface::ContinuousSurface;
pub use ticks::Ticks;

//! Core abstractions for cdfscape.
//!
//! This crate provides the renderer-independent pieces of the CDF scene:
//! - [`Grid`] and [`SampleMode`] describing what to sample
//! - [`sample_continuous`] and [`sample_discrete`], which turn a parameter grid
//!   into a [`HeightField`]
//! - Viewport classification and the responsive profiles derived from it
//! - Configuration options

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Options structs legitimately have many boolean flags
#![allow(clippy::struct_excessive_bools)]

pub mod error;
pub mod grid;
pub mod height_field;
pub mod options;
pub mod sampler;
pub mod viewport;

pub use error::{CdfscapeError, Result};
pub use grid::{Grid, SampleMode};
pub use height_field::{HeightField, HeightSample};
pub use options::{
    hex_color, CameraOptions, ContinuousOptions, DiscreteOptions, LightOptions, SceneOptions,
    SurfaceOptions,
};
pub use sampler::{
    height_scale, sample, sample_continuous, sample_discrete, CONTINUOUS_HEIGHT_SCALE, DISCRETE_HEIGHT_SCALE,
};
pub use viewport::{ControlProfile, LabelStyle, Viewport, ViewportClass};

// Re-export glam types for convenience
pub use glam::Vec3;

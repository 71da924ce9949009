//! Configuration options for the CDF scene.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{CdfscapeError, Grid, Result, SampleMode};

/// Converts a packed `0xRRGGBB` color into linear `[0, 1]` components.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hex_color(rgb: u32) -> Vec3 {
    let r = (rgb >> 16) & 0xff;
    let g = (rgb >> 8) & 0xff;
    let b = rgb & 0xff;
    Vec3::new(r as f32, g as f32, b as f32) / 255.0
}

/// Global configuration options for the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOptions {
    /// Half-length of the axes; ticks run over `[-grid_size, grid_size]`.
    pub grid_size: u32,

    /// Divisions per half-axis of each grid plane.
    pub grid_divisions: u32,

    /// Half-length of a tick mark.
    pub tick_size: f32,

    /// Background color.
    pub background_color: Vec3,

    /// Camera projection settings.
    pub camera: CameraOptions,

    /// CDF surface settings.
    pub surface: SurfaceOptions,

    /// Scene lights.
    pub lights: LightOptions,

    /// Mode shown when the scene is first assembled.
    pub initial_mode: SampleMode,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            grid_size: 10,
            grid_divisions: 20,
            tick_size: 0.5,
            background_color: hex_color(0x1a_1a1a),
            camera: CameraOptions::default(),
            surface: SurfaceOptions::default(),
            lights: LightOptions::default(),
            initial_mode: SampleMode::Continuous,
        }
    }
}

impl SceneOptions {
    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("loading scene options from {}", path.display());
        Self::from_json_str(&text)
    }

    /// Serializes the options as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every size and range is usable.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(CdfscapeError::invalid("grid_size must be >= 1"));
        }
        if self.grid_divisions == 0 {
            return Err(CdfscapeError::invalid("grid_divisions must be >= 1"));
        }
        require_positive("tick_size", self.tick_size)?;
        self.camera.validate()?;
        self.surface.validate()
    }
}

/// Perspective camera settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl CameraOptions {
    fn validate(&self) -> Result<()> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(CdfscapeError::invalid(format!(
                "camera fov must be in (0, 180) degrees, got {}",
                self.fov_degrees
            )));
        }
        require_positive("camera near", self.near)?;
        if !(self.far > self.near) {
            return Err(CdfscapeError::invalid(format!(
                "camera far ({}) must exceed near ({})",
                self.far, self.near
            )));
        }
        Ok(())
    }
}

/// Settings for both CDF representations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceOptions {
    pub continuous: ContinuousOptions,
    pub discrete: DiscreteOptions,
    /// Color of the wireframe overlay drawn on either representation.
    pub wireframe_color: Vec3,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            continuous: ContinuousOptions::default(),
            discrete: DiscreteOptions::default(),
            wireframe_color: hex_color(0xff_ff00),
        }
    }
}

impl SurfaceOptions {
    fn validate(&self) -> Result<()> {
        self.continuous.grid()?;
        self.discrete.validate()
    }
}

/// The continuous surface: a displaced plane mesh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuousOptions {
    /// Side length of the plane.
    pub extent: f32,
    /// Segments per side.
    pub segments: u32,
    /// Vertical offset applied to the whole mesh.
    pub y_offset: f32,
    pub color: Vec3,
    pub opacity: f32,
    /// Whether both faces are shaded.
    pub double_sided: bool,
}

impl Default for ContinuousOptions {
    fn default() -> Self {
        Self {
            extent: 20.0,
            segments: 40,
            y_offset: 1.0,
            color: hex_color(0xff_00ff),
            opacity: 0.7,
            double_sided: true,
        }
    }
}

impl ContinuousOptions {
    /// The sampling grid described by these options.
    pub fn grid(&self) -> Result<Grid> {
        Grid::square(self.segments, self.extent)
    }
}

/// The discrete surface: one extruded box per cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscreteOptions {
    /// Cells per axis.
    pub steps: u32,
    /// Physical size of one cell.
    pub step_size: f32,
    /// Box footprint as a fraction of `step_size`, leaving gaps between boxes.
    pub footprint: f32,
    pub color: Vec3,
    pub opacity: f32,
}

impl Default for DiscreteOptions {
    fn default() -> Self {
        Self {
            steps: 20,
            step_size: 1.0,
            footprint: 0.9,
            color: hex_color(0x00_ffff),
            opacity: 0.7,
        }
    }
}

impl DiscreteOptions {
    fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(CdfscapeError::invalid("discrete steps must be >= 1"));
        }
        require_positive("discrete step_size", self.step_size)?;
        if !(self.footprint > 0.0 && self.footprint <= 1.0) {
            return Err(CdfscapeError::invalid(format!(
                "discrete footprint must be in (0, 1], got {}",
                self.footprint
            )));
        }
        Ok(())
    }
}

/// Ambient plus one directional light.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightOptions {
    pub ambient_color: Vec3,
    pub ambient_intensity: f32,
    pub directional_color: Vec3,
    pub directional_intensity: f32,
    pub directional_position: Vec3,
}

impl Default for LightOptions {
    fn default() -> Self {
        Self {
            ambient_color: hex_color(0x40_4040),
            ambient_intensity: 0.6,
            directional_color: Vec3::ONE,
            directional_intensity: 0.8,
            directional_position: Vec3::new(10.0, 10.0, 5.0),
        }
    }
}

fn require_positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CdfscapeError::invalid(format!(
            "{name} must be finite and positive, got {value}"
        )))
    }
}

//! Scene assembly.
//!
//! [`SceneAssembler`] owns everything the renderer needs to draw the CDF
//! scene: the static reference layers (axes, grid planes, ticks, labels,
//! lights), the camera and control profile for the current viewport, and the
//! CDF layer for the current [`SampleMode`]. The mode is explicit state here;
//! the samplers never see it except as an argument.

use std::path::Path;

use cdfscape_core::{
    ControlProfile, LabelStyle, Result, SampleMode, SceneOptions, Viewport, ViewportClass,
};
use cdfscape_structures::{save_ply, Axes, GridPlanes, TickLabels, Ticks};
use glam::Vec3;
use serde::Serialize;

use crate::camera::CameraRig;
use crate::interaction::TouchPolicy;
use crate::layer::CdfLayer;
use crate::lights::Lights;

/// Builds and maintains the CDF scene.
#[derive(Debug, Clone)]
pub struct SceneAssembler {
    options: SceneOptions,
    viewport: Viewport,
    camera: CameraRig,
    controls: ControlProfile,

    // Static layers
    axes: Axes,
    grid: GridPlanes,
    ticks: Ticks,
    tick_labels: TickLabels,
    lights: Lights,

    // CDF layer
    mode: SampleMode,
    cdf: CdfLayer,
    /// Number of times the CDF layer has been replaced.
    cdf_generation: u64,
}

impl SceneAssembler {
    /// Validates `options` and assembles the scene for `viewport`, showing
    /// `options.initial_mode`.
    pub fn new(options: SceneOptions, viewport: Viewport) -> Result<Self> {
        options.validate()?;

        let class = viewport.class();
        let camera = CameraRig::new(&options.camera, &viewport);
        let axes = Axes::build(options.grid_size);
        let grid = GridPlanes::build(options.grid_size, options.grid_divisions);
        let ticks = Ticks::build(options.grid_size, options.tick_size);
        let tick_labels = TickLabels::build(options.grid_size, class.label_style());
        let lights = Lights::from_options(&options.lights);

        let mode = options.initial_mode;
        let cdf = CdfLayer::build(mode, &options.surface)?;

        log::info!(
            "assembled scene: {}x{} viewport ({class:?}), {mode} CDF",
            viewport.width(),
            viewport.height()
        );

        Ok(Self {
            controls: class.control_profile(),
            options,
            viewport,
            camera,
            axes,
            grid,
            ticks,
            tick_labels,
            lights,
            mode,
            cdf,
            cdf_generation: 0,
        })
    }

    /// Assembles a scene with default options.
    pub fn with_defaults(viewport: Viewport) -> Result<Self> {
        Self::new(SceneOptions::default(), viewport)
    }

    /// The currently displayed mode.
    #[must_use]
    pub fn mode(&self) -> SampleMode {
        self.mode
    }

    /// Switches to `mode`, resampling and replacing the CDF layer as a whole.
    ///
    /// The new layer is built before the old one is dropped, so on error the
    /// scene still shows the previous layer and mode.
    pub fn set_mode(&mut self, mode: SampleMode) -> Result<()> {
        let cdf = CdfLayer::build(mode, &self.options.surface)?;
        log::debug!("switching CDF layer: {} -> {mode}", self.mode);
        self.cdf = cdf;
        self.mode = mode;
        self.cdf_generation += 1;
        Ok(())
    }

    /// Switches to the other mode and returns it.
    pub fn toggle(&mut self) -> Result<SampleMode> {
        let next = self.mode.toggled();
        self.set_mode(next)?;
        Ok(next)
    }

    /// Follows a viewport resize.
    ///
    /// The camera aspect and pixel ratio always follow. The control profile and
    /// label style change only when the viewport moves to another class; the
    /// camera keeps its current position.
    pub fn resize(&mut self, viewport: Viewport) {
        let old_class = self.viewport.class();
        let new_class = viewport.class();
        self.viewport = viewport;
        self.camera.set_viewport(&viewport);

        if new_class != old_class {
            log::debug!("viewport class changed: {old_class:?} -> {new_class:?}");
            self.controls = new_class.control_profile();
            self.tick_labels.set_style(new_class.label_style());
        }
    }

    /// Follows a device orientation change.
    ///
    /// Callers should wait [`crate::ORIENTATION_SETTLE_DELAY`] before reading
    /// the rotated viewport size.
    pub fn orientation_changed(&mut self, viewport: Viewport) {
        self.resize(viewport);
    }

    #[must_use]
    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport.class()
    }

    #[must_use]
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    #[must_use]
    pub fn controls(&self) -> ControlProfile {
        self.controls
    }

    #[must_use]
    pub fn label_style(&self) -> LabelStyle {
        self.tick_labels.style()
    }

    #[must_use]
    pub fn touch_policy(&self) -> TouchPolicy {
        TouchPolicy::default()
    }

    #[must_use]
    pub fn background_color(&self) -> Vec3 {
        self.options.background_color
    }

    #[must_use]
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    #[must_use]
    pub fn grid(&self) -> &GridPlanes {
        &self.grid
    }

    #[must_use]
    pub fn ticks(&self) -> &Ticks {
        &self.ticks
    }

    #[must_use]
    pub fn tick_labels(&self) -> &TickLabels {
        &self.tick_labels
    }

    #[must_use]
    pub fn lights(&self) -> &Lights {
        &self.lights
    }

    #[must_use]
    pub fn cdf(&self) -> &CdfLayer {
        &self.cdf
    }

    /// Number of times the CDF layer has been replaced since assembly.
    #[must_use]
    pub fn cdf_generation(&self) -> u64 {
        self.cdf_generation
    }

    /// Counts and settings describing the current scene.
    #[must_use]
    pub fn summary(&self) -> SceneSummary {
        let mesh = self.cdf.mesh();
        SceneSummary {
            mode: self.mode,
            viewport_class: self.viewport.class(),
            viewport_width: self.viewport.width(),
            viewport_height: self.viewport.height(),
            cdf_generation: self.cdf_generation,
            cdf_vertices: mesh.num_vertices(),
            cdf_triangles: mesh.num_faces(),
            cdf_wireframe_segments: self.cdf.wireframe().len(),
            axis_lines: self.axes.lines().len(),
            grid_lines: self.grid.planes().iter().map(|p| p.num_lines()).sum(),
            ticks: self.ticks.len(),
            tick_labels: self.tick_labels.len(),
            camera_position: self.camera.position,
            controls: self.controls,
            label_style: self.tick_labels.style(),
            background_color: self.options.background_color,
        }
    }

    /// Serializes [`Self::summary`] as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.summary())?)
    }

    /// Writes the current CDF mesh to a PLY file.
    pub fn export_cdf_ply(&self, path: impl AsRef<Path>) -> Result<()> {
        save_ply(path, self.cdf.mesh())
    }
}

/// A serializable overview of a [`SceneAssembler`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSummary {
    pub mode: SampleMode,
    pub viewport_class: ViewportClass,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub cdf_generation: u64,
    pub cdf_vertices: usize,
    pub cdf_triangles: usize,
    pub cdf_wireframe_segments: usize,
    pub axis_lines: usize,
    pub grid_lines: usize,
    pub ticks: usize,
    pub tick_labels: usize,
    pub camera_position: Vec3,
    pub controls: ControlProfile,
    pub label_style: LabelStyle,
    pub background_color: Vec3,
}

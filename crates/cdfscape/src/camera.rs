//! Camera placement for the scene.

use cdfscape_core::{CameraOptions, Viewport};
use glam::{Mat4, Vec3};
use serde::Serialize;

/// A perspective camera looking at a target point.
///
/// The rig only records placement and projection. Orbiting, zooming and
/// damping are done by the interaction layer within the limits of the active
/// [`cdfscape_core::ControlProfile`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraRig {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Render target pixel ratio.
    pub pixel_ratio: f32,
}

impl CameraRig {
    /// Creates a camera for `viewport`, placed at the viewport class's
    /// starting position and looking at the origin.
    pub fn new(options: &CameraOptions, viewport: &Viewport) -> Self {
        Self {
            position: viewport.class().camera_position(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: options.fov_degrees.to_radians(),
            aspect_ratio: viewport.aspect(),
            near: options.near,
            far: options.far,
            pixel_ratio: viewport.pixel_ratio(),
        }
    }

    /// Follows a viewport resize. Position and target are left alone.
    pub fn set_viewport(&mut self, viewport: &Viewport) {
        self.aspect_ratio = viewport.aspect();
        self.pixel_ratio = viewport.pixel_ratio();
    }

    /// Distance from the camera to its target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        (self.position - self.target).length()
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Returns projection * view.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

//! Viewport classification and the responsive profiles derived from it.
//!
//! The viewer adapts to three width buckets. Everything that differs between
//! them (label raster size, orbit limits, initial camera distance) is selected
//! once from a [`ViewportClass`] instead of being branched on at every use.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{CdfscapeError, Result};

/// Widest viewport, in CSS pixels, treated as mobile.
pub const MOBILE_MAX_WIDTH: u32 = 768;

/// Widest viewport, in CSS pixels, treated as tablet.
pub const TABLET_MAX_WIDTH: u32 = 1024;

/// Upper bound applied to the device pixel ratio.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Width bucket of a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Classifies a viewport by its width.
    #[must_use]
    pub fn from_width(width: u32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            ViewportClass::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }

    /// Tick label style for this class.
    #[must_use]
    pub fn label_style(self) -> LabelStyle {
        match self {
            ViewportClass::Mobile => LabelStyle::new(48, 24, 12, 1.5),
            ViewportClass::Tablet => LabelStyle::new(56, 28, 14, 1.8),
            ViewportClass::Desktop => LabelStyle::new(64, 32, 16, 2.0),
        }
    }

    /// Orbit control profile for this class.
    #[must_use]
    pub fn control_profile(self) -> ControlProfile {
        match self {
            ViewportClass::Mobile => ControlProfile {
                // Panning fights with one-finger orbiting on touch screens.
                enable_pan: false,
                min_distance: 5.0,
                max_distance: 30.0,
                ..ControlProfile::default()
            },
            ViewportClass::Tablet => ControlProfile {
                min_distance: 8.0,
                max_distance: 25.0,
                ..ControlProfile::default()
            },
            ViewportClass::Desktop => ControlProfile::default(),
        }
    }

    /// Initial camera position for this class. The camera looks at the origin.
    #[must_use]
    pub fn camera_position(self) -> Vec3 {
        match self {
            ViewportClass::Mobile => Vec3::splat(15.0),
            ViewportClass::Tablet => Vec3::splat(12.0),
            ViewportClass::Desktop => Vec3::splat(10.0),
        }
    }
}

/// Raster and sprite sizing for text labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    /// Width of the label canvas in pixels.
    pub canvas_width: u32,
    /// Height of the label canvas in pixels.
    pub canvas_height: u32,
    /// Bold monospace font size in pixels.
    pub font_px: u32,
    /// World-space sprite width; the sprite is half as tall.
    pub label_scale: f32,
}

impl LabelStyle {
    pub const fn new(canvas_width: u32, canvas_height: u32, font_px: u32, label_scale: f32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            font_px,
            label_scale,
        }
    }

    /// Style used for the large "X", "Y", "Z" axis labels on every viewport.
    #[must_use]
    pub const fn axis_title() -> Self {
        Self::new(128, 64, 32, 4.0)
    }

    /// Sprite scale `(scale, scale / 2, 1)`.
    #[must_use]
    pub fn sprite_scale(&self) -> Vec3 {
        Vec3::new(self.label_scale, self.label_scale * 0.5, 1.0)
    }

    /// CSS-style font string, e.g. `bold 16px monospace`.
    #[must_use]
    pub fn font(&self) -> String {
        format!("bold {}px monospace", self.font_px)
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        ViewportClass::Desktop.label_style()
    }
}

/// Orbit control settings handed to the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlProfile {
    pub enable_pan: bool,
    pub enable_zoom: bool,
    pub enable_rotate: bool,
    pub enable_damping: bool,
    pub damping_factor: f32,
    /// Closest the camera may dolly to its target.
    pub min_distance: f32,
    /// Farthest the camera may dolly from its target.
    pub max_distance: f32,
}

impl Default for ControlProfile {
    fn default() -> Self {
        Self {
            enable_pan: true,
            enable_zoom: true,
            enable_rotate: true,
            enable_damping: true,
            damping_factor: 0.05,
            min_distance: 3.0,
            max_distance: 40.0,
        }
    }
}

impl ControlProfile {
    /// Clamps a camera distance into `[min_distance, max_distance]`.
    #[must_use]
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance)
    }
}

/// Size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawViewport")]
pub struct Viewport {
    width: u32,
    height: u32,
    device_pixel_ratio: f32,
}

/// Unchecked wire form of a [`Viewport`].
#[derive(Deserialize)]
struct RawViewport {
    width: u32,
    height: u32,
    device_pixel_ratio: f32,
}

impl TryFrom<RawViewport> for Viewport {
    type Error = CdfscapeError;

    fn try_from(raw: RawViewport) -> Result<Self> {
        Viewport::new(raw.width, raw.height, raw.device_pixel_ratio)
    }
}

impl Viewport {
    /// Creates a viewport. Width and height must be non-zero and the pixel
    /// ratio finite and positive.
    pub fn new(width: u32, height: u32, device_pixel_ratio: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CdfscapeError::invalid(format!(
                "viewport must be non-empty, got {width}x{height}"
            )));
        }
        if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
            return Err(CdfscapeError::invalid(format!(
                "device pixel ratio must be finite and positive, got {device_pixel_ratio}"
            )));
        }
        Ok(Self {
            width,
            height,
            device_pixel_ratio,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Device pixel ratio capped at [`MAX_PIXEL_RATIO`].
    #[must_use]
    pub fn pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
    }

    /// Width bucket of this viewport.
    #[must_use]
    pub fn class(&self) -> ViewportClass {
        ViewportClass::from_width(self.width)
    }
}

//! Surface materials.

use glam::Vec3;
use serde::Serialize;

/// Lambert material parameters for a CDF surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    pub color: Vec3,
    pub opacity: f32,
    /// Shade back faces too.
    pub double_sided: bool,
}

impl Material {
    /// Creates a material. Opacity outside `[0, 1]` is clamped.
    pub fn new(color: Vec3, opacity: f32, double_sided: bool) -> Self {
        let clamped = opacity.clamp(0.0, 1.0);
        if clamped != opacity {
            log::warn!("material opacity {opacity} clamped to {clamped}");
        }
        Self {
            color,
            opacity: clamped,
            double_sided,
        }
    }

    /// Whether the renderer must blend this material.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

//! Scene lighting.

use cdfscape_core::LightOptions;
use glam::Vec3;
use serde::Serialize;

/// Uniform light applied to every surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

/// A light shining from `position` towards the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit direction the light travels in.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}

/// The scene's ambient and directional light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lights {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
}

impl Lights {
    pub fn from_options(options: &LightOptions) -> Self {
        Self {
            ambient: AmbientLight {
                color: options.ambient_color,
                intensity: options.ambient_intensity,
            },
            directional: DirectionalLight {
                color: options.directional_color,
                intensity: options.directional_intensity,
                position: options.directional_position,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lights() {
        let lights = Lights::from_options(&LightOptions::default());
        assert_eq!(lights.ambient.intensity, 0.6);
        assert_eq!(lights.directional.intensity, 0.8);
        assert_eq!(lights.directional.position, Vec3::new(10.0, 10.0, 5.0));
        let dir = lights.directional.direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x < 0.0 && dir.y < 0.0 && dir.z < 0.0);
    }
}

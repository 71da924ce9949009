//! The toggle-able CDF layer.

use cdfscape_core::{sample, Result, SampleMode, SurfaceOptions};
use cdfscape_structures::{ContinuousSurface, DiscreteSteps, LineSet, Material, TriangleMesh};
use serde::Serialize;

/// One of the two CDF representations, built from a freshly sampled field.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CdfLayer {
    Continuous(ContinuousSurface),
    Discrete(DiscreteSteps),
}

impl CdfLayer {
    /// Samples the surface for `mode` and builds its geometry.
    pub fn build(mode: SampleMode, options: &SurfaceOptions) -> Result<Self> {
        let field = sample(mode, options)?;
        let layer = match mode {
            SampleMode::Continuous => CdfLayer::Continuous(ContinuousSurface::build(
                &field,
                &options.continuous,
                options.wireframe_color,
            )?),
            SampleMode::Discrete => CdfLayer::Discrete(DiscreteSteps::build(
                &field,
                &options.discrete,
                options.wireframe_color,
            )?),
        };
        Ok(layer)
    }

    /// The mode this layer depicts.
    #[must_use]
    pub fn mode(&self) -> SampleMode {
        match self {
            CdfLayer::Continuous(_) => SampleMode::Continuous,
            CdfLayer::Discrete(_) => SampleMode::Discrete,
        }
    }

    #[must_use]
    pub fn mesh(&self) -> &TriangleMesh {
        match self {
            CdfLayer::Continuous(s) => s.mesh(),
            CdfLayer::Discrete(s) => s.mesh(),
        }
    }

    #[must_use]
    pub fn wireframe(&self) -> &LineSet {
        match self {
            CdfLayer::Continuous(s) => s.wireframe(),
            CdfLayer::Discrete(s) => s.wireframe(),
        }
    }

    #[must_use]
    pub fn material(&self) -> Material {
        match self {
            CdfLayer::Continuous(s) => s.material(),
            CdfLayer::Discrete(s) => s.material(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_each_mode() {
        let options = SurfaceOptions::default();

        let continuous = CdfLayer::build(SampleMode::Continuous, &options).unwrap();
        assert_eq!(continuous.mode(), SampleMode::Continuous);
        assert_eq!(continuous.mesh().num_vertices(), 41 * 41);
        assert_eq!(continuous.material().color, options.continuous.color);

        let discrete = CdfLayer::build(SampleMode::Discrete, &options).unwrap();
        assert_eq!(discrete.mode(), SampleMode::Discrete);
        assert_eq!(discrete.mesh().num_faces(), 400 * 12);
        assert_eq!(discrete.wireframe().color(), options.wireframe_color);
    }

    #[test]
    fn test_build_propagates_invalid_options() {
        let mut options = SurfaceOptions::default();
        options.discrete.steps = 0;
        let err = CdfLayer::build(SampleMode::Discrete, &options).unwrap_err();
        assert!(err.is_invalid_argument());
        // The other mode is unaffected.
        assert!(CdfLayer::build(SampleMode::Continuous, &options).is_ok());
    }
}

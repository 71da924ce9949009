//! Sampling grids and the sample mode selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CdfscapeError, Result};

/// Selects which surface-generation strategy produces a height field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleMode {
    /// Smooth displaced plane.
    #[default]
    Continuous,
    /// Field of extruded step boxes.
    Discrete,
}

impl SampleMode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SampleMode::Continuous => SampleMode::Discrete,
            SampleMode::Discrete => SampleMode::Continuous,
        }
    }

    /// Returns display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SampleMode::Continuous => "continuous",
            SampleMode::Discrete => "discrete",
        }
    }
}

impl fmt::Display for SampleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleMode {
    type Err = CdfscapeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continuous" => Ok(SampleMode::Continuous),
            "discrete" => Ok(SampleMode::Discrete),
            other => Err(CdfscapeError::invalid(format!(
                "unknown sample mode '{other}'"
            ))),
        }
    }
}

/// A regular sampling grid over the XZ plane, centred on the origin.
///
/// `width` and `depth` count segments, so the grid has `width + 1` by
/// `depth + 1` vertices. The smallest valid grid is 1 x 1 segments, i.e. its
/// four corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    depth: u32,
    x_extent: f32,
    z_extent: f32,
}

impl Grid {
    /// Creates a grid, validating segment counts and extents.
    pub fn new(width: u32, depth: u32, x_extent: f32, z_extent: f32) -> Result<Self> {
        let grid = Self {
            width,
            depth,
            x_extent,
            z_extent,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Creates a square grid with the same segment count and extent on both axes.
    pub fn square(segments: u32, extent: f32) -> Result<Self> {
        Self::new(segments, segments, extent, extent)
    }

    /// Checks the grid invariants.
    ///
    /// Deserialized grids bypass [`Grid::new`], so callers that accept grids
    /// from configuration run this before sampling.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.depth == 0 {
            return Err(CdfscapeError::invalid(format!(
                "grid needs at least one segment per axis, got {}x{}",
                self.width, self.depth
            )));
        }
        for (axis, extent) in [("x", self.x_extent), ("z", self.z_extent)] {
            if !extent.is_finite() || extent <= 0.0 {
                return Err(CdfscapeError::invalid(format!(
                    "grid {axis} extent must be finite and positive, got {extent}"
                )));
            }
        }
        Ok(())
    }

    /// Segment count along X.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Segment count along Z.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Physical span along X.
    #[must_use]
    pub fn x_extent(&self) -> f32 {
        self.x_extent
    }

    /// Physical span along Z.
    #[must_use]
    pub fn z_extent(&self) -> f32 {
        self.z_extent
    }

    /// Number of vertices along X.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.width as usize + 1
    }

    /// Number of vertices along Z.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.depth as usize + 1
    }

    /// Total number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Position of vertex column `i` along X, normalized to `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn u_at(&self, i: u32) -> f32 {
        i as f32 / self.width as f32
    }

    /// Position of vertex row `j` along Z, normalized to `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn v_at(&self, j: u32) -> f32 {
        j as f32 / self.depth as f32
    }

    /// World-space X coordinate of vertex column `i`.
    ///
    /// Scales the normalized position rather than `i * extent`, which would
    /// overflow for extents close to `f32::MAX`.
    #[must_use]
    pub fn x_at(&self, i: u32) -> f32 {
        -self.x_extent * 0.5 + self.u_at(i) * self.x_extent
    }

    /// World-space Z coordinate of vertex row `j`.
    #[must_use]
    pub fn z_at(&self, j: u32) -> f32 {
        -self.z_extent * 0.5 + self.v_at(j) * self.z_extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_mode_default() {
        assert_eq!(SampleMode::default(), SampleMode::Continuous);
    }

    #[test]
    fn test_sample_mode_toggle() {
        assert_eq!(SampleMode::Continuous.toggled(), SampleMode::Discrete);
        assert_eq!(SampleMode::Discrete.toggled(), SampleMode::Continuous);
    }

    #[test]
    fn test_sample_mode_parse() {
        assert_eq!(
            "Discrete".parse::<SampleMode>().unwrap(),
            SampleMode::Discrete
        );
        assert_eq!(
            " continuous ".parse::<SampleMode>().unwrap(),
            SampleMode::Continuous
        );
        assert!("stepped".parse::<SampleMode>().unwrap_err().is_invalid_argument());
        assert_eq!(SampleMode::Discrete.to_string(), "discrete");
    }

    #[test]
    fn test_sample_mode_serde() {
        let json = serde_json::to_string(&SampleMode::Discrete).unwrap();
        assert_eq!(json, "\"discrete\"");
        let back: SampleMode = serde_json::from_str("\"continuous\"").unwrap();
        assert_eq!(back, SampleMode::Continuous);
    }

    #[test]
    fn test_grid_counts() {
        let grid = Grid::new(40, 30, 20.0, 10.0).unwrap();
        assert_eq!(grid.columns(), 41);
        assert_eq!(grid.rows(), 31);
        assert_eq!(grid.num_vertices(), 41 * 31);
    }

    #[test]
    fn test_grid_coordinates_span_extent() {
        let grid = Grid::square(4, 20.0).unwrap();
        assert_eq!(grid.x_at(0), -10.0);
        assert_eq!(grid.x_at(2), 0.0);
        assert_eq!(grid.x_at(4), 10.0);
        assert_eq!(grid.z_at(1), -5.0);
    }

    #[test]
    fn test_grid_coordinates_finite_for_huge_extent() {
        let grid = Grid::square(2, 3.0e38).unwrap();
        for i in 0..=2 {
            assert!(grid.x_at(i).is_finite(), "column {i} overflowed");
            assert!(grid.z_at(i).is_finite(), "row {i} overflowed");
        }
        assert_eq!(grid.x_at(2), 1.5e38);
        assert_eq!(grid.u_at(1), 0.5);
        assert_eq!(grid.v_at(2), 1.0);
    }

    #[test]
    fn test_grid_rejects_zero_segments() {
        assert!(Grid::new(0, 4, 1.0, 1.0).unwrap_err().is_invalid_argument());
        assert!(Grid::new(4, 0, 1.0, 1.0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_grid_rejects_bad_extent() {
        assert!(Grid::new(1, 1, 0.0, 1.0).is_err());
        assert!(Grid::new(1, 1, 1.0, -2.0).is_err());
        assert!(Grid::new(1, 1, f32::NAN, 1.0).is_err());
        assert!(Grid::new(1, 1, 1.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_deserialized_grid_is_validated_on_demand() {
        let grid: Grid =
            serde_json::from_str(r#"{"width":0,"depth":2,"x_extent":1.0,"z_extent":1.0}"#)
                .unwrap();
        assert!(grid.validate().is_err());
    }
}

//! Reference grids on the three coordinate planes.

use std::f32::consts::FRAC_PI_2;

use cdfscape_core::hex_color;
use glam::{Quat, Vec3};
use serde::Serialize;

use crate::LineSet;

/// Color of the two centre lines of each grid.
pub const CENTER_LINE_COLOR: u32 = 0xff_0000;
/// Color of every other grid line.
pub const GRID_LINE_COLOR: u32 = 0x00_00ff;

/// A square grid of lines in the XZ plane, centred on the origin.
///
/// `divisions + 1` lines run in each direction. With an even `divisions`, the
/// line through the origin in each direction is drawn in the centre color; an
/// odd count has no line through the origin and no centre lines.
#[derive(Debug, Clone, Serialize)]
pub struct GridPlane {
    size: f32,
    divisions: u32,
    center_lines: LineSet,
    lines: LineSet,
}

impl GridPlane {
    /// Builds a grid helper of side `size` with `divisions` cells per side.
    pub fn new(name: &str, size: f32, divisions: u32) -> Self {
        let mut center_lines = LineSet::new(format!("{name}_center"), hex_color(CENTER_LINE_COLOR));
        let mut lines = LineSet::new(name, hex_color(GRID_LINE_COLOR));

        let step = size / divisions as f32;
        let half = size * 0.5;

        for i in 0..=divisions {
            let k = -half + i as f32 * step;
            let target = if 2 * i == divisions {
                &mut center_lines
            } else {
                &mut lines
            };
            target.push(Vec3::new(-half, 0.0, k), Vec3::new(half, 0.0, k));
            target.push(Vec3::new(k, 0.0, -half), Vec3::new(k, 0.0, half));
        }

        Self {
            size,
            divisions,
            center_lines,
            lines,
        }
    }

    /// Returns a copy rotated about the origin.
    #[must_use]
    pub fn rotated(&self, name: &str, rotation: Quat) -> Self {
        Self {
            size: self.size,
            divisions: self.divisions,
            center_lines: self.center_lines.rotated(format!("{name}_center"), rotation),
            lines: self.lines.rotated(name, rotation),
        }
    }

    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[must_use]
    pub fn divisions(&self) -> u32 {
        self.divisions
    }

    /// The centre lines and the remaining lines.
    #[must_use]
    pub fn line_sets(&self) -> [&LineSet; 2] {
        [&self.center_lines, &self.lines]
    }

    /// Total number of lines.
    #[must_use]
    pub fn num_lines(&self) -> usize {
        self.center_lines.len() + self.lines.len()
    }
}

/// Grids on the XZ, XY and YZ planes.
#[derive(Debug, Clone, Serialize)]
pub struct GridPlanes {
    planes: Vec<GridPlane>,
}

impl GridPlanes {
    /// Builds three grids of side `2 * grid_size` with `2 * grid_divisions`
    /// cells per side, so each half-axis has `grid_divisions` cells.
    pub fn build(grid_size: u32, grid_divisions: u32) -> Self {
        let xz = GridPlane::new("grid_xz", grid_size as f32 * 2.0, grid_divisions * 2);
        let xy = xz.rotated("grid_xy", Quat::from_rotation_x(FRAC_PI_2));
        let yz = xz.rotated("grid_yz", Quat::from_rotation_z(FRAC_PI_2));
        Self {
            planes: vec![xz, xy, yz],
        }
    }

    /// The XZ, XY and YZ grids, in that order.
    #[must_use]
    pub fn planes(&self) -> &[GridPlane] {
        &self.planes
    }

    /// Iterates over every line set of every plane.
    pub fn line_sets(&self) -> impl Iterator<Item = &LineSet> {
        self.planes.iter().flat_map(GridPlane::line_sets)
    }
}

//! Coordinate axes and their titles.

use cdfscape_core::{hex_color, LabelStyle};
use glam::Vec3;
use serde::Serialize;

use crate::labels::{Label, AXIS_TITLE_OFFSET};
use crate::LineSet;

/// Color of the X axis.
pub const X_AXIS_COLOR: u32 = 0xff_0000;
/// Color of the Y axis.
pub const Y_AXIS_COLOR: u32 = 0x00_00ff;
/// Color of the Z axis.
pub const Z_AXIS_COLOR: u32 = 0x00_ff00;

/// Three axis lines through the origin plus an "X" / "Y" / "Z" title past
/// the positive end of each.
#[derive(Debug, Clone, Serialize)]
pub struct Axes {
    lines: Vec<LineSet>,
    titles: Vec<Label>,
}

impl Axes {
    /// Builds axes spanning `[-grid_size, grid_size]`.
    pub fn build(grid_size: u32) -> Self {
        let half = grid_size as f32;
        let title_at = half + AXIS_TITLE_OFFSET;

        let specs = [
            ("x_axis", "X", Vec3::X, X_AXIS_COLOR),
            ("y_axis", "Y", Vec3::Y, Y_AXIS_COLOR),
            ("z_axis", "Z", Vec3::Z, Z_AXIS_COLOR),
        ];

        let mut lines = Vec::with_capacity(3);
        let mut titles = Vec::with_capacity(3);
        for (name, title, dir, color) in specs {
            let color = hex_color(color);
            lines.push(LineSet::from_segments(
                name,
                color,
                vec![[dir * -half, dir * half]],
            ));
            titles.push(Label::new(
                title,
                dir * title_at,
                color,
                LabelStyle::axis_title(),
            ));
        }

        Self { lines, titles }
    }

    /// The X, Y and Z axis lines, in that order.
    #[must_use]
    pub fn lines(&self) -> &[LineSet] {
        &self.lines
    }

    /// The axis titles, in X, Y, Z order.
    #[must_use]
    pub fn titles(&self) -> &[Label] {
        &self.titles
    }
}

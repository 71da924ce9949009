//! Tick marks along the coordinate axes.

use cdfscape_core::hex_color;
use glam::Vec3;
use serde::Serialize;

use crate::LineSet;

/// Tick color on the X axis.
pub const X_TICK_COLOR: u32 = 0xff_6666;
/// Tick color on the Y axis.
pub const Y_TICK_COLOR: u32 = 0x66_66ff;
/// Tick color on the Z axis.
pub const Z_TICK_COLOR: u32 = 0x66_ff66;

/// One tick per non-zero integer on each axis.
#[derive(Debug, Clone, Serialize)]
pub struct Ticks {
    x: LineSet,
    y: LineSet,
    z: LineSet,
}

impl Ticks {
    /// Builds ticks of half-length `tick_size` for every non-zero integer in
    /// `[-grid_size, grid_size]`.
    ///
    /// X and Y ticks stand across the axis in the XY plane; Z ticks lie flat
    /// in the XZ plane.
    pub fn build(grid_size: u32, tick_size: f32) -> Self {
        let mut x = LineSet::new("x_ticks", hex_color(X_TICK_COLOR));
        let mut y = LineSet::new("y_ticks", hex_color(Y_TICK_COLOR));
        let mut z = LineSet::new("z_ticks", hex_color(Z_TICK_COLOR));

        let n = i64::from(grid_size);
        for i in (-n..=n).filter(|&i| i != 0) {
            let v = i as f32;
            x.push(Vec3::new(v, -tick_size, 0.0), Vec3::new(v, tick_size, 0.0));
            y.push(Vec3::new(-tick_size, v, 0.0), Vec3::new(tick_size, v, 0.0));
            z.push(Vec3::new(-tick_size, 0.0, v), Vec3::new(tick_size, 0.0, v));
        }

        Self { x, y, z }
    }

    /// The X, Y and Z tick sets.
    #[must_use]
    pub fn line_sets(&self) -> [&LineSet; 3] {
        [&self.x, &self.y, &self.z]
    }

    /// Total number of tick marks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len() + self.y.len() + self.z.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_count() {
        let ticks = Ticks::build(10, 0.5);
        assert_eq!(ticks.len(), 60);
        for set in ticks.line_sets() {
            assert_eq!(set.len(), 20);
        }
    }

    #[test]
    fn test_tick_geometry() {
        let ticks = Ticks::build(2, 0.5);
        let [x, y, z] = ticks.line_sets();
        assert_eq!(
            x.segments()[0],
            [Vec3::new(-2.0, -0.5, 0.0), Vec3::new(-2.0, 0.5, 0.0)]
        );
        assert_eq!(
            y.segments()[3],
            [Vec3::new(-0.5, 2.0, 0.0), Vec3::new(0.5, 2.0, 0.0)]
        );
        assert_eq!(
            z.segments()[2],
            [Vec3::new(-0.5, 0.0, 1.0), Vec3::new(0.5, 0.0, 1.0)]
        );
        assert_eq!(x.color(), hex_color(X_TICK_COLOR));
    }

    #[test]
    fn test_no_tick_at_origin() {
        let ticks = Ticks::build(3, 0.25);
        for set in ticks.line_sets() {
            assert!(set
                .segments()
                .iter()
                .all(|[a, b]| (*a + *b) != Vec3::ZERO));
        }
    }
}

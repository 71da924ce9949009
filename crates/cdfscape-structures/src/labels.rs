//! Billboard text labels.
//!
//! Labels are descriptors only: the text, where it goes, its color and how
//! large its raster and sprite should be. Rasterizing the text into a texture
//! is left to the renderer.

use cdfscape_core::LabelStyle;
use glam::Vec3;
use serde::Serialize;

/// Distance of tick labels from the axis they annotate.
pub const TICK_LABEL_OFFSET: f32 = 1.5;

/// Distance past the end of an axis at which its title is placed.
pub const AXIS_TITLE_OFFSET: f32 = 2.0;

/// A camera-facing text sprite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub position: Vec3,
    pub color: Vec3,
    pub style: LabelStyle,
}

impl Label {
    pub fn new(text: impl Into<String>, position: Vec3, color: Vec3, style: LabelStyle) -> Self {
        Self {
            text: text.into(),
            position,
            color,
            style,
        }
    }

    /// World-space sprite scale.
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.style.sprite_scale()
    }
}

/// The numeric labels along all three axes.
#[derive(Debug, Clone, Serialize)]
pub struct TickLabels {
    style: LabelStyle,
    labels: Vec<Label>,
}

impl TickLabels {
    /// Builds white labels for every non-zero integer in `[-grid_size, grid_size]`
    /// on each axis, offset from the axis so they do not overlap the tick marks.
    pub fn build(grid_size: u32, style: LabelStyle) -> Self {
        let n = i64::from(grid_size);
        let mut labels = Vec::with_capacity(grid_size as usize * 6);
        for i in (-n..=n).filter(|&i| i != 0) {
            let v = i as f32;
            let text = i.to_string();
            labels.push(Label::new(
                text.clone(),
                Vec3::new(v, 0.0, -TICK_LABEL_OFFSET),
                Vec3::ONE,
                style,
            ));
            labels.push(Label::new(
                text.clone(),
                Vec3::new(-TICK_LABEL_OFFSET, v, 0.0),
                Vec3::ONE,
                style,
            ));
            labels.push(Label::new(
                text,
                Vec3::new(-TICK_LABEL_OFFSET, 0.0, v),
                Vec3::ONE,
                style,
            ));
        }
        log::debug!("built {} tick labels", labels.len());
        Self { style, labels }
    }

    #[must_use]
    pub fn style(&self) -> LabelStyle {
        self.style
    }

    /// Restyles every label in place.
    pub fn set_style(&mut self, style: LabelStyle) {
        self.style = style;
        for label in &mut self.labels {
            label.style = style;
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdfscape_core::ViewportClass;

    #[test]
    fn test_tick_label_count_skips_origin() {
        let labels = TickLabels::build(10, LabelStyle::default());
        assert_eq!(labels.len(), 20 * 3);
        assert!(labels.labels().iter().all(|l| l.text != "0"));
    }

    #[test]
    fn test_tick_label_positions() {
        let labels = TickLabels::build(1, LabelStyle::default());
        let positions: Vec<Vec3> = labels.labels().iter().map(|l| l.position).collect();
        assert_eq!(
            positions,
            vec![
                Vec3::new(-1.0, 0.0, -1.5),
                Vec3::new(-1.5, -1.0, 0.0),
                Vec3::new(-1.5, 0.0, -1.0),
                Vec3::new(1.0, 0.0, -1.5),
                Vec3::new(-1.5, 1.0, 0.0),
                Vec3::new(-1.5, 0.0, 1.0),
            ]
        );
        assert_eq!(labels.labels()[0].text, "-1");
        assert_eq!(labels.labels()[0].color, Vec3::ONE);
    }

    #[test]
    fn test_restyle() {
        let mut labels = TickLabels::build(2, ViewportClass::Desktop.label_style());
        let mobile = ViewportClass::Mobile.label_style();
        labels.set_style(mobile);
        assert_eq!(labels.style(), mobile);
        assert!(labels.labels().iter().all(|l| l.style == mobile));
        assert_eq!(labels.labels()[0].scale(), Vec3::new(1.5, 0.75, 1.0));
    }
}

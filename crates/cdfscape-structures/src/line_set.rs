//! Colored line segment sets.

use glam::{Quat, Vec3};
use serde::Serialize;

/// A named set of line segments drawn in a single color.
///
/// Axes, tick marks, grid planes and mesh wireframes are all line sets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSet {
    name: String,
    color: Vec3,
    segments: Vec<[Vec3; 2]>,
}

impl LineSet {
    /// Creates an empty line set.
    pub fn new(name: impl Into<String>, color: Vec3) -> Self {
        Self {
            name: name.into(),
            color,
            segments: Vec::new(),
        }
    }

    /// Creates a line set holding the given segments.
    pub fn from_segments(name: impl Into<String>, color: Vec3, segments: Vec<[Vec3; 2]>) -> Self {
        Self {
            name: name.into(),
            color,
            segments,
        }
    }

    /// Adds a segment.
    pub fn push(&mut self, start: Vec3, end: Vec3) {
        self.segments.push([start, end]);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Vec3 {
        self.color
    }

    #[must_use]
    pub fn segments(&self) -> &[[Vec3; 2]] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns a copy rotated about the origin.
    #[must_use]
    pub fn rotated(&self, name: impl Into<String>, rotation: Quat) -> Self {
        let segments = self
            .segments
            .iter()
            .map(|[a, b]| [rotation * *a, rotation * *b])
            .collect();
        Self::from_segments(name, self.color, segments)
    }

    /// Returns a copy translated by `offset`.
    #[must_use]
    pub fn translated(mut self, offset: Vec3) -> Self {
        for [a, b] in &mut self.segments {
            *a += offset;
            *b += offset;
        }
        self
    }

    /// Flattens the segments into a vertex list, two vertices per segment.
    #[must_use]
    pub fn to_vertices(&self) -> Vec<Vec3> {
        self.segments.iter().flat_map(|s| s.iter().copied()).collect()
    }
}

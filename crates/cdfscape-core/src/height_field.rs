//! Sampled height fields.
//!
//! A [`HeightField`] is the output of one sampler call: a row-major list of
//! `(x, z, height)` samples plus the dimensions needed to index them. Fields
//! are plain values; every sampler call builds a new one.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{CdfscapeError, Result, SampleMode};

/// One sampled point of a height field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightSample {
    pub x: f32,
    pub z: f32,
    pub height: f32,
}

impl HeightSample {
    /// Creates a sample.
    pub fn new(x: f32, z: f32, height: f32) -> Self {
        Self { x, z, height }
    }

    /// Returns the sample as a Y-up world position `(x, height, z)`.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.height, self.z)
    }
}

/// A grid of height samples produced by one sampling mode.
///
/// Samples are stored with the X index outer and the Z index inner, so the
/// sample for `(i, j)` lives at `i * rows + j`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHeightField")]
pub struct HeightField {
    mode: SampleMode,
    columns: usize,
    rows: usize,
    samples: Vec<HeightSample>,
}

/// Unchecked wire form of a [`HeightField`].
#[derive(Deserialize)]
struct RawHeightField {
    mode: SampleMode,
    columns: usize,
    rows: usize,
    samples: Vec<HeightSample>,
}

impl TryFrom<RawHeightField> for HeightField {
    type Error = CdfscapeError;

    fn try_from(raw: RawHeightField) -> Result<Self> {
        HeightField::new(raw.mode, raw.columns, raw.rows, raw.samples)
    }
}

impl HeightField {
    /// Creates a height field, checking that the sample count matches the dimensions.
    pub fn new(
        mode: SampleMode,
        columns: usize,
        rows: usize,
        samples: Vec<HeightSample>,
    ) -> Result<Self> {
        let expected = columns * rows;
        if samples.len() != expected {
            return Err(CdfscapeError::SizeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            mode,
            columns,
            rows,
            samples,
        })
    }

    /// The mode that produced this field.
    #[must_use]
    pub fn mode(&self) -> SampleMode {
        self.mode
    }

    /// Number of samples along X.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of samples along Z.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the field holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Row-major index of `(i, j)`.
    #[must_use]
    pub fn index(&self, i: usize, j: usize) -> usize {
        i * self.rows + j
    }

    /// Returns the sample at column `i`, row `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<&HeightSample> {
        if i >= self.columns || j >= self.rows {
            return None;
        }
        self.samples.get(self.index(i, j))
    }

    /// All samples in row-major order.
    #[must_use]
    pub fn samples(&self) -> &[HeightSample] {
        &self.samples
    }

    /// Iterates over the samples in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &HeightSample> {
        self.samples.iter()
    }

    /// Iterates over the heights only.
    pub fn heights(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().map(|s| s.height)
    }

    /// Smallest and largest height, or `None` for an empty field.
    #[must_use]
    pub fn height_range(&self) -> Option<(f32, f32)> {
        self.heights().fold(None, |acc, h| match acc {
            None => Some((h, h)),
            Some((lo, hi)) => Some((lo.min(h), hi.max(h))),
        })
    }
}

impl<'a> IntoIterator for &'a HeightField {
    type Item = &'a HeightSample;
    type IntoIter = std::slice::Iter<'a, HeightSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

//! Surface samplers.
//!
//! Two analytic models turn a regular parameter grid into a [`HeightField`]:
//!
//! - [`sample_continuous`] evaluates a smooth bivariate CDF-like surface at
//!   every vertex of a [`Grid`].
//! - [`sample_discrete`] evaluates a stepped CDF at the centre of every cell
//!   of a square `steps x steps` lattice.
//!
//! Both are pure: the same inputs always give the same field, and no call
//! touches a field returned earlier.

#![allow(clippy::cast_precision_loss)]

use std::f32::consts::PI;

use crate::options::SurfaceOptions;
use crate::{CdfscapeError, Grid, HeightField, HeightSample, Result, SampleMode};

/// Maximum height of the continuous surface.
pub const CONTINUOUS_HEIGHT_SCALE: f32 = 2.0;

/// Maximum height of a discrete step.
pub const DISCRETE_HEIGHT_SCALE: f32 = 1.5;

/// Amplitude of the sinusoidal ripple on the continuous surface.
pub const RIPPLE_AMPLITUDE: f32 = 0.3;

/// Unscaled continuous CDF at normalized coordinates in `[0, 1]`, clamped to `[0, 1]`.
#[must_use]
pub fn continuous_cdf(nx: f32, nz: f32) -> f32 {
    let ripple = 1.0 + RIPPLE_AMPLITUDE * (nx * PI).sin() * (nz * PI).cos();
    (nx * nz * ripple).clamp(0.0, 1.0)
}

/// Unscaled discrete CDF of cell `(i, j)` on a `steps x steps` lattice, clamped to `[0, 1]`.
#[must_use]
pub fn discrete_cdf(i: u32, j: u32, steps: u32) -> f32 {
    let cells = steps as f32 * steps as f32;
    ((i as f32 + 1.0) * (j as f32 + 1.0) / cells).clamp(0.0, 1.0)
}

/// Samples the continuous surface at every vertex of `grid`.
///
/// Returns `(width + 1) * (depth + 1)` samples with heights in
/// `[0, CONTINUOUS_HEIGHT_SCALE]`.
pub fn sample_continuous(grid: &Grid) -> Result<HeightField> {
    grid.validate()?;

    let mut samples = Vec::with_capacity(grid.num_vertices());

    for i in 0..=grid.width() {
        let x = grid.x_at(i);
        let nx = grid.u_at(i);
        for j in 0..=grid.depth() {
            let z = grid.z_at(j);
            let nz = grid.v_at(j);
            let height = continuous_cdf(nx, nz) * CONTINUOUS_HEIGHT_SCALE;
            samples.push(HeightSample::new(x, z, height));
        }
    }

    log::trace!(
        "sampled continuous surface: {}x{} vertices",
        grid.columns(),
        grid.rows()
    );
    HeightField::new(SampleMode::Continuous, grid.columns(), grid.rows(), samples)
}

/// Samples the stepped surface at the centre of every cell.
///
/// Cell `(i, j)` sits at `((i - steps/2) * step_size, (j - steps/2) * step_size)`.
/// Returns `steps * steps` samples with heights in `(0, DISCRETE_HEIGHT_SCALE]`.
pub fn sample_discrete(steps_per_axis: u32, step_size: f32) -> Result<HeightField> {
    if steps_per_axis == 0 {
        return Err(CdfscapeError::invalid("discrete steps per axis must be >= 1"));
    }
    if !step_size.is_finite() || step_size <= 0.0 {
        return Err(CdfscapeError::invalid(format!(
            "discrete step size must be finite and positive, got {step_size}"
        )));
    }

    let steps = steps_per_axis as usize;
    let half = steps_per_axis as f32 * 0.5;
    // The outermost cell centre sits `half * step_size` from the origin.
    if !(half * step_size).is_finite() {
        return Err(CdfscapeError::invalid(format!(
            "discrete lattice of {steps_per_axis} steps of size {step_size} overflows f32"
        )));
    }
    let mut samples = Vec::with_capacity(steps * steps);

    for i in 0..steps_per_axis {
        let x = (i as f32 - half) * step_size;
        for j in 0..steps_per_axis {
            let z = (j as f32 - half) * step_size;
            let height = discrete_cdf(i, j, steps_per_axis) * DISCRETE_HEIGHT_SCALE;
            samples.push(HeightSample::new(x, z, height));
        }
    }

    log::trace!("sampled discrete surface: {steps}x{steps} cells");
    HeightField::new(SampleMode::Discrete, steps, steps, samples)
}

/// Samples the surface for `mode` using the parameters in `options`.
///
/// The caller owns the current mode; this function only dispatches on it.
pub fn sample(mode: SampleMode, options: &SurfaceOptions) -> Result<HeightField> {
    match mode {
        SampleMode::Continuous => sample_continuous(&options.continuous.grid()?),
        SampleMode::Discrete => {
            sample_discrete(options.discrete.steps, options.discrete.step_size)
        }
    }
}

/// Maximum height a field of the given mode can reach.
#[must_use]
pub fn height_scale(mode: SampleMode) -> f32 {
    match mode {
        SampleMode::Continuous => CONTINUOUS_HEIGHT_SCALE,
        SampleMode::Discrete => DISCRETE_HEIGHT_SCALE,
    }
}

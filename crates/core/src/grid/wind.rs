//! Rotational-convergent wind field.
//!
//! A simplified proxy for geostrophic plus frictional flow around a low:
//! pure counter-clockwise rotation about the center, a mild inward spiral
//! (surface convergence), and a Gaussian magnitude envelope slightly wider
//! than the pressure pit so winds reach past the steepest gradient.
//!
//! ```text
//! u = -(y - cy) - 0.2 * (x - cx)
//! v =  (x - cx) - 0.2 * (y - cy)
//! (u, v) *= exp(-r² / (2 * (radius_scale * 1.5)²))
//! ```

use crate::core_types::{Point2, Vec2};
use crate::grid::GridDomain;
use crate::params::{constants, CycloneParams};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Wind vector at a single world position.
///
/// Closed form of the field; [`WindField::compute`] evaluates this at every
/// grid point. The raw rotational terms vanish at the exact center, so the
/// center wind is the zero vector.
#[must_use]
pub fn wind_at(params: &CycloneParams, pos: Point2) -> Vec2 {
    let offset = pos - params.center;
    let rotational = Vec2::new(-offset.y, offset.x);
    let convergent = -offset * constants::CONVERGENCE_FACTOR;

    let envelope_scale = params.radius_scale * constants::WIND_ENVELOPE_SCALE;
    let speed_factor = (-offset.norm_squared() / (2.0 * envelope_scale * envelope_scale)).exp();

    (rotational + convergent) * speed_factor
}

/// Vector wind field co-indexed with [`crate::PressureField`]'s grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindField {
    grid: GridDomain,
    /// Flattened row-major (u, v) vectors, indexed via [`GridDomain::index`].
    vectors: Vec<Vec2>,
}

impl WindField {
    /// Evaluate the wind formula at every grid point, parallelized over rows.
    #[must_use]
    pub fn compute(params: &CycloneParams) -> Self {
        let grid = GridDomain::from_params(params);
        let n = grid.resolution();
        let (xs, ys) = (grid.xs(), grid.ys());

        let mut vectors = vec![Vec2::zeros(); grid.len()];
        vectors
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(iy, row)| {
                let y = ys[iy];
                for (ix, cell) in row.iter_mut().enumerate() {
                    *cell = wind_at(params, Point2::new(xs[ix], y));
                }
            });

        WindField { grid, vectors }
    }

    /// The sampling grid the vectors are indexed on.
    #[must_use]
    pub fn grid(&self) -> &GridDomain {
        &self.grid
    }

    /// Flattened row-major wind vectors.
    #[must_use]
    pub fn vectors(&self) -> &[Vec2] {
        &self.vectors
    }

    /// Wind vector at grid coordinates (column `ix`, row `iy`).
    #[inline]
    #[must_use]
    pub fn at(&self, ix: usize, iy: usize) -> Vec2 {
        self.vectors[self.grid.index(ix, iy)]
    }

    /// Largest wind speed on the grid.
    #[must_use]
    pub fn max_speed(&self) -> f32 {
        self.vectors.iter().map(Vec2::norm).fold(0.0, f32::max)
    }

    /// Subsample the field for arrow-glyph rendering: every `stride`-th grid
    /// point along both axes, as (position, wind) pairs. A stride of 0 is
    /// treated as 1.
    #[must_use]
    pub fn sampled(&self, stride: usize) -> Vec<(Point2, Vec2)> {
        let stride = stride.max(1);
        let n = self.grid.resolution();
        let mut out = Vec::with_capacity((n / stride + 1).pow(2));
        for iy in (0..n).step_by(stride) {
            for ix in (0..n).step_by(stride) {
                out.push((self.grid.position(ix, iy), self.at(ix, iy)));
            }
        }
        out
    }
}

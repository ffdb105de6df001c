//! Simulation parameters, shared constants, and input validation.
//!
//! All knobs a frontend exposes (sliders, CLI flags) land in [`CycloneParams`].
//! The UI layer is expected to constrain inputs via bounded controls, but the
//! model still validates defensively rather than trust the caller.

use crate::core_types::Point2;
use crate::fronts::OcclusionPolicy;
use serde::{Deserialize, Serialize};

/// Model constants with documented defaults.
///
/// These were implicit magic numbers in earlier prototypes of this dashboard;
/// they are lifted here so frontends and tests reference one definition.
pub mod constants {
    /// Standard ambient (sea-level) pressure baseline (hPa).
    pub const AMBIENT_PRESSURE_HPA: f32 = 1013.0;

    /// Default half-width of the square simulation domain (grid units).
    pub const DEFAULT_GRID_EXTENT: f32 = 10.0;

    /// Default number of grid points per axis.
    pub const DEFAULT_GRID_RESOLUTION: usize = 100;

    /// Default length of each rendered front segment (grid units).
    pub const DEFAULT_FRONT_LENGTH: f32 = 7.0;

    /// Widening factor applied to `radius_scale` for the wind envelope, so
    /// winds extend slightly further out than the steepest pressure gradient.
    pub const WIND_ENVELOPE_SCALE: f32 = 1.5;

    /// Strength of the inward (convergent) spiral component relative to the
    /// pure rotation.
    pub const CONVERGENCE_FACTOR: f32 = 0.2;

    /// Default subsampling stride when exporting wind vectors for arrow
    /// glyph rendering (a full 100x100 arrow field is unreadable).
    pub const DEFAULT_VECTOR_STRIDE: usize = 5;

    /// Nominal upper bound of the animation time range. Values beyond this
    /// are accepted (the model is a total function of time) but frontend
    /// sliders stop here.
    pub const TIME_STEP_MAX: f32 = 100.0;
}

/// Validation errors for model inputs.
///
/// Every computation past validation is a total function over the reals, so
/// this is the model's only failure mode.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Intensity must be a finite pressure deficit in hPa
    NonFiniteIntensity(f32),
    /// Radius scale must be finite and strictly positive
    InvalidRadiusScale(f32),
    /// Grid extent must be finite and strictly positive
    InvalidGridExtent(f32),
    /// Grid needs at least 2 points per axis to span the domain
    ResolutionTooSmall(usize),
    /// Front length must be finite and strictly positive
    InvalidFrontLength(f32),
    /// Time step must be finite
    NonFiniteTimeStep(f32),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterError::NonFiniteIntensity(v) => {
                write!(f, "intensity must be finite, got {v}")
            }
            ParameterError::InvalidRadiusScale(v) => {
                write!(f, "radius_scale must be finite and positive, got {v}")
            }
            ParameterError::InvalidGridExtent(v) => {
                write!(f, "grid_extent must be finite and positive, got {v}")
            }
            ParameterError::ResolutionTooSmall(v) => {
                write!(f, "grid_resolution must be at least 2, got {v}")
            }
            ParameterError::InvalidFrontLength(v) => {
                write!(f, "front_length must be finite and positive, got {v}")
            }
            ParameterError::NonFiniteTimeStep(v) => {
                write!(f, "time_step must be finite, got {v}")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/// Full parameter set for one cyclone model.
///
/// Value type: cheap to clone, compared field-by-field in determinism tests,
/// serializable so a frontend can persist or replay a configuration.
///
/// # Example
/// ```
/// use cyclone_sim_core::CycloneParams;
///
/// let params = CycloneParams {
///     intensity: 45.0,
///     ..CycloneParams::default()
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycloneParams {
    /// Pressure deficit at the cyclone center (hPa). Slider range 10-60.
    pub intensity: f32,

    /// Radial scale of the Gaussian pressure pit (grid units). Slider range
    /// 1.0-5.0. Must be strictly positive.
    pub radius_scale: f32,

    /// Half-width of the square domain; the grid spans `[-extent, +extent]`
    /// on both axes.
    pub grid_extent: f32,

    /// Number of grid points per axis. Must be at least 2.
    pub grid_resolution: usize,

    /// Cyclone center. Fixed at the origin in the dashboard, but kept
    /// explicit so the field formulas stay readable.
    pub center: Point2,

    /// Length of each rendered front segment (grid units).
    pub front_length: f32,

    /// Which front-angle policy drives occlusion. See [`OcclusionPolicy`].
    pub occlusion_policy: OcclusionPolicy,
}

impl Default for CycloneParams {
    fn default() -> Self {
        Self {
            intensity: 30.0,
            radius_scale: 2.5,
            grid_extent: constants::DEFAULT_GRID_EXTENT,
            grid_resolution: constants::DEFAULT_GRID_RESOLUTION,
            center: Point2::origin(),
            front_length: constants::DEFAULT_FRONT_LENGTH,
            occlusion_policy: OcclusionPolicy::default(),
        }
    }
}

impl CycloneParams {
    /// Check all invariants the field and front formulas rely on.
    ///
    /// # Errors
    /// Returns the first violated constraint; no partial result is produced.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.intensity.is_finite() {
            return Err(ParameterError::NonFiniteIntensity(self.intensity));
        }
        if !self.radius_scale.is_finite() || self.radius_scale <= 0.0 {
            return Err(ParameterError::InvalidRadiusScale(self.radius_scale));
        }
        if !self.grid_extent.is_finite() || self.grid_extent <= 0.0 {
            return Err(ParameterError::InvalidGridExtent(self.grid_extent));
        }
        if self.grid_resolution < 2 {
            return Err(ParameterError::ResolutionTooSmall(self.grid_resolution));
        }
        if !self.front_length.is_finite() || self.front_length <= 0.0 {
            return Err(ParameterError::InvalidFrontLength(self.front_length));
        }
        Ok(())
    }
}

//! Model facade: validated parameters in, renderable snapshots out.

use crate::core_types::Hectopascals;
use crate::fronts::FrontGeometry;
use crate::grid::{PressureField, WindField};
use crate::params::{constants, CycloneParams, ParameterError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Everything a renderer needs for one frame.
///
/// Pressure and wind share the same grid and depend only on the parameters;
/// the fronts (and the snapshot as a whole) depend on `time_step` too. All
/// fields are plain values: snapshots can be compared, cloned, serialized,
/// and recomputed freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycloneSnapshot {
    /// The time step this snapshot was computed for.
    pub time_step: f32,
    /// Derived display value: ambient pressure minus intensity.
    pub central_pressure: Hectopascals,
    /// Human-readable status, derived purely from the front stage.
    pub status: String,
    /// Scalar pressure field (hPa).
    pub pressure: PressureField,
    /// Vector wind field on the same grid.
    pub wind: WindField,
    /// Front segments and occlusion state.
    pub fronts: FrontGeometry,
}

/// A validated, immutable cyclone configuration.
///
/// Construction validates the parameters once; every query afterwards is a
/// pure function of the stored parameters (and, for fronts and snapshots,
/// the requested time step). The model keeps no state between calls, so
/// callers may request time steps in any order, repeatedly, from any thread.
#[derive(Debug, Clone, PartialEq)]
pub struct CycloneModel {
    params: CycloneParams,
}

impl CycloneModel {
    /// Validate `params` and wrap them in a model handle.
    ///
    /// # Errors
    /// Returns [`ParameterError`] if any parameter violates its invariant;
    /// see [`CycloneParams::validate`].
    pub fn new(params: CycloneParams) -> Result<Self, ParameterError> {
        params.validate()?;
        info!(
            intensity = params.intensity,
            radius_scale = params.radius_scale,
            resolution = params.grid_resolution,
            policy = ?params.occlusion_policy,
            "cyclone model created"
        );
        Ok(CycloneModel { params })
    }

    /// The validated parameters.
    #[must_use]
    pub fn params(&self) -> &CycloneParams {
        &self.params
    }

    /// Pressure at the cyclone center: `ambient - intensity`.
    #[must_use]
    pub fn central_pressure(&self) -> Hectopascals {
        Hectopascals::new(constants::AMBIENT_PRESSURE_HPA - self.params.intensity)
    }

    /// The (time-independent) pressure field.
    #[must_use]
    pub fn pressure_field(&self) -> PressureField {
        PressureField::compute(&self.params)
    }

    /// The (time-independent) wind field.
    #[must_use]
    pub fn wind_field(&self) -> WindField {
        WindField::compute(&self.params)
    }

    /// Front geometry at `time_step`.
    ///
    /// Any finite time step is accepted, including values outside the
    /// nominal `[0, 100]` animation range.
    ///
    /// # Errors
    /// Returns [`ParameterError::NonFiniteTimeStep`] for NaN or infinite
    /// time steps.
    pub fn fronts(&self, time_step: f32) -> Result<FrontGeometry, ParameterError> {
        if !time_step.is_finite() {
            return Err(ParameterError::NonFiniteTimeStep(time_step));
        }
        Ok(FrontGeometry::compute(&self.params, time_step))
    }

    /// Compute the full renderable snapshot for `time_step`.
    ///
    /// # Errors
    /// Returns [`ParameterError::NonFiniteTimeStep`] for NaN or infinite
    /// time steps.
    pub fn snapshot(&self, time_step: f32) -> Result<CycloneSnapshot, ParameterError> {
        let fronts = self.fronts(time_step)?;
        debug!(
            time_step,
            occluded = fronts.occluded(),
            "computed cyclone snapshot"
        );
        Ok(CycloneSnapshot {
            time_step,
            central_pressure: self.central_pressure(),
            status: fronts.stage.label().to_owned(),
            pressure: self.pressure_field(),
            wind: self.wind_field(),
            fronts,
        })
    }
}

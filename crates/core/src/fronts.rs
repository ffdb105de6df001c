//! Warm/cold front geometry and the occlusion lifecycle.
//!
//! Each front is a straight segment anchored at the cyclone center, pointing
//! along a time-dependent angle. When the cold front catches the warm front,
//! the wave occludes: both segments collapse onto the warm-front angle and a
//! single merged segment is reported.
//!
//! The lifecycle has exactly two stages, evaluated fresh at every time step
//! (the model holds no state between calls):
//!
//! ```text
//! OpenWave --[angle predicate]--> Occluded
//! ```
//!
//! "Terminal" means no further transition is modeled; callers may still ask
//! for any time step in any order and get the same answer every time.

use crate::core_types::{Degrees, Point2};
use crate::params::CycloneParams;
use serde::{Deserialize, Serialize};

/// Angle schedule driving the two fronts.
///
/// The dashboard prototypes disagreed on how the fronts move, so both
/// schedules are kept as named, selectable strategies rather than merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OcclusionPolicy {
    /// Both fronts rotate; the faster cold front converges on the warm one.
    ///
    /// `warm = -10° + 0.5·t`, `cold = -100° + 2.0·t`, occluded once
    /// `cold >= warm`, i.e. from t = 60 onward. This is the default: it is
    /// the only schedule that occludes within the nominal 0-100 time range.
    #[default]
    Converging,

    /// Stationary warm front chased by a swinging cold front.
    ///
    /// `warm = 15°`, `cold = 240° - 1.5·t`, occluded once
    /// `cold <= warm + 10°`, i.e. from t ≈ 143.3 onward. Note that this
    /// threshold lies outside the nominal 0-100 animation range, so under
    /// this schedule the wave never occludes on screen. Kept as found in
    /// the source variant; selecting it is an explicit choice.
    CatchUp,
}

impl OcclusionPolicy {
    /// Raw (pre-merge) warm and cold front angles at `time_step`, in degrees.
    #[must_use]
    pub fn angles(self, time_step: f32) -> (Degrees, Degrees) {
        match self {
            OcclusionPolicy::Converging => (
                Degrees::new(-10.0 + 0.5 * time_step),
                Degrees::new(-100.0 + 2.0 * time_step),
            ),
            OcclusionPolicy::CatchUp => {
                (Degrees::new(15.0), Degrees::new(240.0 - 1.5 * time_step))
            }
        }
    }

    /// The occlusion predicate for this schedule.
    #[must_use]
    pub fn occludes(self, warm: Degrees, cold: Degrees) -> bool {
        match self {
            OcclusionPolicy::Converging => *cold >= *warm,
            OcclusionPolicy::CatchUp => *cold <= *warm + 10.0,
        }
    }
}

/// The two lifecycle stages of the frontal wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrontStage {
    /// Fronts still separated; the low is deepening.
    OpenWave,
    /// Cold front has overtaken the warm front; single merged front.
    Occluded,
}

impl FrontStage {
    /// Human-readable status label for display next to the plot.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FrontStage::OpenWave => "developing/open wave",
            FrontStage::Occluded => "occluded/dissipating",
        }
    }
}

/// A straight front segment from the cyclone center outward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrontSegment {
    /// Anchor point (the cyclone center).
    pub start: Point2,
    /// Tip of the front, `front_length` out along the segment's angle.
    pub end: Point2,
}

impl FrontSegment {
    /// Build a segment of `length` from `center` along `angle`.
    #[must_use]
    pub fn from_angle(center: Point2, length: f32, angle: Degrees) -> Self {
        let rad = angle.to_radians();
        FrontSegment {
            start: center,
            end: Point2::new(center.x + length * rad.cos(), center.y + length * rad.sin()),
        }
    }
}

/// Front geometry for one time step: two segments, or one merged segment
/// once occluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontGeometry {
    /// Warm front angle after any merge (degrees).
    pub warm_angle: Degrees,
    /// Cold front angle after any merge; equals `warm_angle` when occluded.
    pub cold_angle: Degrees,
    /// Warm front segment.
    pub warm_front: FrontSegment,
    /// Cold front segment; coincides with the warm front when occluded.
    pub cold_front: FrontSegment,
    /// Merged segment, present only once the wave has occluded.
    pub occluded_front: Option<FrontSegment>,
    /// Current lifecycle stage.
    pub stage: FrontStage,
}

impl FrontGeometry {
    /// Compute the front geometry for `time_step`.
    ///
    /// Pure function of its inputs; assumes `params` passed validation and
    /// `time_step` is finite (the model facade checks both).
    #[must_use]
    pub fn compute(params: &CycloneParams, time_step: f32) -> Self {
        let policy = params.occlusion_policy;
        let (warm_angle, raw_cold_angle) = policy.angles(time_step);
        let occluded = policy.occludes(warm_angle, raw_cold_angle);

        // Once occluded the cold front is forced onto the warm angle so the
        // rendered geometry is a single coincident segment.
        let cold_angle = if occluded { warm_angle } else { raw_cold_angle };

        let warm_front = FrontSegment::from_angle(params.center, params.front_length, warm_angle);
        let cold_front = FrontSegment::from_angle(params.center, params.front_length, cold_angle);

        FrontGeometry {
            warm_angle,
            cold_angle,
            warm_front,
            cold_front,
            occluded_front: occluded.then_some(warm_front),
            stage: if occluded {
                FrontStage::Occluded
            } else {
                FrontStage::OpenWave
            },
        }
    }

    /// True once the wave has occluded.
    #[must_use]
    pub fn occluded(&self) -> bool {
        self.stage == FrontStage::Occluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params_with(policy: OcclusionPolicy) -> CycloneParams {
        CycloneParams {
            occlusion_policy: policy,
            ..CycloneParams::default()
        }
    }

    #[test]
    fn test_converging_initial_angles() {
        let fronts = FrontGeometry::compute(&params_with(OcclusionPolicy::Converging), 0.0);
        assert_eq!(*fronts.warm_angle, -10.0);
        assert_eq!(*fronts.cold_angle, -100.0);
        assert_eq!(fronts.stage, FrontStage::OpenWave);
        assert!(fronts.occluded_front.is_none());
    }

    #[test]
    fn test_converging_occludes_at_sixty() {
        let params = params_with(OcclusionPolicy::Converging);

        let before = FrontGeometry::compute(&params, 59.0);
        assert!(!before.occluded(), "t = 59 should still be an open wave");

        let at = FrontGeometry::compute(&params, 60.0);
        assert!(at.occluded(), "t = 60 is exactly the occlusion threshold");
        assert_eq!(*at.warm_angle, 20.0);
        assert_eq!(at.cold_angle, at.warm_angle, "cold angle forced onto warm");
        assert_eq!(at.cold_front, at.warm_front);
        assert_eq!(at.occluded_front, Some(at.warm_front));

        let after = FrontGeometry::compute(&params, 100.0);
        assert!(after.occluded());
        assert_eq!(after.cold_angle, after.warm_angle);
    }

    #[test]
    fn test_catch_up_never_occludes_in_nominal_range() {
        let params = params_with(OcclusionPolicy::CatchUp);
        for t in 0..=100 {
            let fronts = FrontGeometry::compute(&params, t as f32);
            assert!(
                !fronts.occluded(),
                "catch-up schedule occluded at t = {t}, threshold is ~143.3"
            );
            assert_eq!(*fronts.warm_angle, 15.0);
        }
        // Past the nominal range the predicate does fire
        let late = FrontGeometry::compute(&params, 150.0);
        assert!(late.occluded());
    }

    #[test]
    fn test_segment_endpoint_geometry() {
        let seg = FrontSegment::from_angle(Point2::origin(), 7.0, Degrees::new(90.0));
        assert_relative_eq!(seg.end.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(seg.end.y, 7.0, epsilon = 1e-5);

        let seg = FrontSegment::from_angle(Point2::new(1.0, 2.0), 2.0, Degrees::new(0.0));
        assert_eq!(seg.start, Point2::new(1.0, 2.0));
        assert_relative_eq!(seg.end.x, 3.0, epsilon = 1e-5);
        assert_relative_eq!(seg.end.y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_front_length_respected() {
        let params = CycloneParams {
            front_length: 3.0,
            ..CycloneParams::default()
        };
        let fronts = FrontGeometry::compute(&params, 25.0);
        let len = (fronts.warm_front.end - fronts.warm_front.start).norm();
        assert_relative_eq!(len, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_stage_labels() {
        assert_eq!(FrontStage::OpenWave.label(), "developing/open wave");
        assert_eq!(FrontStage::Occluded.label(), "occluded/dissipating");
    }

    #[test]
    fn test_same_time_step_is_deterministic() {
        let params = params_with(OcclusionPolicy::Converging);
        // Out-of-order and repeated queries must agree exactly
        let a = FrontGeometry::compute(&params, 73.5);
        let _ = FrontGeometry::compute(&params, 10.0);
        let b = FrontGeometry::compute(&params, 73.5);
        assert_eq!(a, b);
    }
}

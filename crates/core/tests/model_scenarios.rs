//! End-to-end scenario tests for the cyclone model.
//!
//! These walk the model the way a dashboard frontend does: configure from
//! slider values, request snapshots across the animation range, and check
//! the displayed quantities.

use approx::assert_relative_eq;
use cyclone_sim_core::{
    constants, CycloneModel, CycloneParams, CycloneSnapshot, FrontStage, OcclusionPolicy,
};

fn dashboard_params() -> CycloneParams {
    // Default slider positions of the dashboard
    CycloneParams {
        intensity: 30.0,
        radius_scale: 2.5,
        occlusion_policy: OcclusionPolicy::Converging,
        ..CycloneParams::default()
    }
}

#[test]
fn test_initial_frame_scenario() {
    let model = CycloneModel::new(dashboard_params()).unwrap();
    let snap = model.snapshot(0.0).unwrap();

    assert_eq!(*snap.central_pressure, 983.0);
    assert_eq!(snap.status, "developing/open wave");
    assert!(!snap.fronts.occluded());
    assert_eq!(*snap.fronts.warm_angle, -10.0);
    assert_eq!(*snap.fronts.cold_angle, -100.0);

    // Field shapes match the configured grid
    assert_eq!(snap.pressure.grid().resolution(), 100);
    assert_eq!(snap.pressure.values().len(), 100 * 100);
    assert_eq!(snap.wind.vectors().len(), 100 * 100);

    // The pit bottoms out near (not necessarily exactly at) the central
    // pressure: the default even resolution has no grid point on the center.
    let min = snap.pressure.min_pressure();
    assert!(min >= 983.0 && min < 984.0, "grid minimum was {min}");
}

#[test]
fn test_occlusion_frame_scenario() {
    let model = CycloneModel::new(dashboard_params()).unwrap();
    let snap = model.snapshot(60.0).unwrap();

    assert!(snap.fronts.occluded());
    assert_eq!(snap.status, "occluded/dissipating");
    assert_eq!(snap.fronts.stage, FrontStage::Occluded);
    // Merged front sits at the warm angle: -10 + 0.5 * 60 = 20°
    assert_eq!(*snap.fronts.warm_angle, 20.0);
    assert_eq!(snap.fronts.cold_angle, snap.fronts.warm_angle);
    let merged = snap.fronts.occluded_front.expect("merged segment expected");
    assert_eq!(merged, snap.fronts.warm_front);
    assert_eq!(merged, snap.fronts.cold_front);
    let length = (merged.end - merged.start).norm();
    assert_relative_eq!(length, constants::DEFAULT_FRONT_LENGTH, epsilon = 1e-5);
}

#[test]
fn test_animation_sweep_transitions_once() {
    // Drive the model like the animation loop: t = 0, 2, 4, ..., 100
    let model = CycloneModel::new(dashboard_params()).unwrap();
    let mut transitions = 0;
    let mut prev_occluded = false;
    for t in (0..=100).step_by(2) {
        let fronts = model.fronts(t as f32).unwrap();
        if fronts.occluded() != prev_occluded {
            transitions += 1;
            prev_occluded = fronts.occluded();
            assert_eq!(t, 60, "lifecycle should flip exactly at t = 60");
        }
    }
    assert_eq!(transitions, 1, "OpenWave -> Occluded happens exactly once");
}

#[test]
fn test_intensity_slider_moves_central_pressure() {
    for intensity in [10.0, 25.0, 60.0] {
        let model = CycloneModel::new(CycloneParams {
            intensity,
            ..dashboard_params()
        })
        .unwrap();
        assert_eq!(
            *model.central_pressure(),
            constants::AMBIENT_PRESSURE_HPA - intensity
        );
    }
}

#[test]
fn test_snapshot_json_round_trip() {
    let model = CycloneModel::new(CycloneParams {
        grid_resolution: 12,
        ..dashboard_params()
    })
    .unwrap();
    let snap = model.snapshot(60.0).unwrap();

    let json = serde_json::to_string(&snap).expect("snapshot serializes");
    let back: CycloneSnapshot = serde_json::from_str(&json).expect("snapshot deserializes");
    assert_eq!(snap, back, "JSON round trip must preserve the snapshot");
}

#[test]
fn test_policies_disagree_at_late_times() {
    // Same slider values, different schedule: only Converging occludes
    // inside the animation range.
    let converging = CycloneModel::new(dashboard_params()).unwrap();
    let catch_up = CycloneModel::new(CycloneParams {
        occlusion_policy: OcclusionPolicy::CatchUp,
        ..dashboard_params()
    })
    .unwrap();

    assert!(converging.fronts(100.0).unwrap().occluded());
    assert!(!catch_up.fronts(100.0).unwrap().occluded());
}

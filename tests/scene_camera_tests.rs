use timeline_rs::TimelineError;
use timeline_rs::scene::{CameraRig, CameraRigConfig, TimeAxis3d};

use approx::assert_relative_eq;
use glam::Vec3;

fn rig() -> CameraRig {
    CameraRig::new(Vec3::new(0.0, 5.0, 40.0), CameraRigConfig::default()).expect("rig init")
}

#[test]
fn travel_moves_only_the_target() {
    let mut rig = rig();
    let position_before = rig.position();

    rig.travel(1);

    assert_eq!(rig.position(), position_before);
    assert_relative_eq!(rig.target().x, 10.0);
}

#[test]
fn frame_step_approaches_the_target_without_snapping() {
    let mut rig = rig();
    rig.travel(1);

    rig.step_frame();
    let after_one = rig.position().x;
    assert!(after_one > 0.0 && after_one < 10.0);
    assert_relative_eq!(after_one, 0.8, epsilon = 1e-5);

    rig.step_frame();
    let after_two = rig.position().x;
    assert!(after_two > after_one && after_two < 10.0);
}

#[test]
fn approach_distance_shrinks_monotonically() {
    let mut rig = rig();
    rig.travel(-3);

    let mut last_distance = (rig.target() - rig.position()).length();
    for _ in 0..100 {
        rig.step_frame();
        let distance = (rig.target() - rig.position()).length();
        assert!(distance <= last_distance);
        last_distance = distance;
    }
    assert!(rig.is_settled(0.01));
}

#[test]
fn opposite_travel_steps_cancel() {
    let mut rig = rig();
    rig.travel(2);
    rig.travel(-2);

    assert_relative_eq!(rig.target().x, 0.0);
}

#[test]
fn reset_restores_the_mount_pose_and_cancels_travel() {
    let mut rig = rig();
    rig.travel(5);
    for _ in 0..10 {
        rig.step_frame();
    }

    rig.reset();
    assert_eq!(rig.position(), Vec3::new(0.0, 5.0, 40.0));
    assert_eq!(rig.target(), rig.position());
}

#[test]
fn config_rejects_out_of_range_damping() {
    let config = CameraRigConfig {
        damping: 0.0,
        ..CameraRigConfig::default()
    };
    assert!(matches!(
        CameraRig::new(Vec3::ZERO, config),
        Err(TimelineError::InvalidData(_))
    ));

    let config = CameraRigConfig {
        damping: 1.5,
        ..CameraRigConfig::default()
    };
    assert!(matches!(
        CameraRig::new(Vec3::ZERO, config),
        Err(TimelineError::InvalidData(_))
    ));
}

#[test]
fn time_axis_maps_years_linearly_and_round_trips() {
    const MILLIS_PER_YEAR: f64 = 365.0 * 86_400_000.0;
    let axis = TimeAxis3d::new(0.0, 10.0);

    assert_relative_eq!(axis.time_to_world_x(MILLIS_PER_YEAR), 10.0, epsilon = 1e-4);
    assert_relative_eq!(axis.time_to_world_x(-2.0 * MILLIS_PER_YEAR), -20.0, epsilon = 1e-4);

    let back = axis.world_x_to_time(axis.time_to_world_x(3.5 * MILLIS_PER_YEAR));
    assert_relative_eq!(back, 3.5 * MILLIS_PER_YEAR, max_relative = 1e-5);
}

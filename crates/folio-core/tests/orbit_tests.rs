// Host-side tests for the model viewer's damped orbit rig.

use folio_core::{OrbitRig, SceneError, ViewerParams, VIEWER_START_EYE};
use glam::Vec3;
use std::f32::consts::PI;

fn rig() -> OrbitRig {
    OrbitRig::new(ViewerParams::default()).unwrap()
}

#[test]
fn starts_at_configured_eye() {
    let r = rig();
    assert!((r.eye() - VIEWER_START_EYE).length() < 1e-4);
    assert!((r.radius() - VIEWER_START_EYE.length()).abs() < 1e-4);
}

#[test]
fn idle_update_does_not_move() {
    let mut r = rig();
    let eye = r.eye();
    for _ in 0..100 {
        r.update();
    }
    assert!((r.eye() - eye).length() < 1e-5);
}

#[test]
fn drag_rotation_coasts_to_the_full_angle() {
    let mut r = rig();
    let start = r.azimuth();
    // a quarter of the element height is a quarter turn
    r.rotate_by_pixels(-100.0, 0.0, 400.0);
    r.update();
    let after_one = r.azimuth() - start;
    assert!(after_one > 0.0 && after_one < PI / 2.0 * 0.1);
    for _ in 0..1000 {
        r.update();
    }
    assert!((r.azimuth() - start - PI / 2.0).abs() < 1e-3);
    // radius unchanged by rotation
    assert!((r.radius() - VIEWER_START_EYE.length()).abs() < 1e-4);
}

#[test]
fn polar_angle_never_flips_over_the_pole() {
    let mut r = rig();
    r.rotate_by_pixels(0.0, 10_000.0, 100.0);
    for _ in 0..500 {
        r.update();
        assert!(r.polar_angle() > 0.0 && r.polar_angle() < PI);
    }
    assert!(r.eye().is_finite());
}

#[test]
fn wheel_zooms_in_and_out_within_limits() {
    let mut r = rig();
    let d0 = r.radius();
    r.zoom_by_wheel(-100.0);
    r.update();
    assert!((r.radius() - d0 * 0.95).abs() < 1e-4);
    r.zoom_by_wheel(100.0);
    r.update();
    assert!((r.radius() - d0).abs() < 1e-4);
    r.zoom_by_wheel(0.0);
    r.update();
    assert!((r.radius() - d0).abs() < 1e-4);

    for _ in 0..1000 {
        r.zoom_by_wheel(-1.0);
        r.update();
    }
    assert!((r.radius() - ViewerParams::default().min_distance).abs() < 1e-5);
}

#[test]
fn camera_looks_at_target() {
    let r = rig();
    let cam = r.camera(16.0 / 9.0);
    assert_eq!(cam.target, Vec3::ZERO);
    assert!((cam.fovy_radians - 60f32.to_radians()).abs() < 1e-6);
}

#[test]
fn rejects_inverted_distance_range() {
    let params = ViewerParams {
        min_distance: 10.0,
        max_distance: 1.0,
        ..ViewerParams::default()
    };
    assert!(matches!(
        OrbitRig::new(params),
        Err(SceneError::InvalidDistanceRange { .. })
    ));

    for damping in [0.0_f32, -0.05, 2.5, f32::NAN] {
        let params = ViewerParams {
            damping,
            ..ViewerParams::default()
        };
        assert!(matches!(
            OrbitRig::new(params),
            Err(SceneError::InvalidDamping(_))
        ));
    }
    for zoom_step in [0.0_f32, -0.95, 1.0, 1.05, f32::NAN] {
        let params = ViewerParams {
            zoom_step,
            ..ViewerParams::default()
        };
        assert!(matches!(
            OrbitRig::new(params),
            Err(SceneError::InvalidZoomStep(_))
        ));
    }
    let params = ViewerParams {
        damping: 1.0,
        ..ViewerParams::default()
    };
    assert!(OrbitRig::new(params).is_ok());
}

// Host-side tests for the camera pose interpolator and rig.

use folio_core::{
    section_blend, CameraPose, CameraRig, PointerOffset, PoseTable, RigParams, SceneError,
    SectionBlend, CAMERA_EASE,
};
use glam::Vec3;

fn pose(px: f32, py: f32, pz: f32, lx: f32, ly: f32, lz: f32) -> CameraPose {
    CameraPose::new(Vec3::new(px, py, pz), Vec3::new(lx, ly, lz))
}

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-4
}

#[test]
fn one_pole_filter_matches_reference_steps() {
    let mut state = pose(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    let target = pose(10.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    state.approach(&target, 0.08);
    assert!((state.position.x - 0.8).abs() < 1e-6);
    state.approach(&target, 0.08);
    assert!((state.position.x - 1.536).abs() < 1e-5);
}

#[test]
fn filter_converges_monotonically_without_overshoot() {
    let target = pose(10.0, -4.0, 5.5, -2.0, -4.0, 0.0);
    for ease in [0.01_f32, 0.08, 0.5, 1.0] {
        let mut state = pose(0.0, 0.0, 6.0, 0.0, 0.0, 0.0);
        let mut prev_err = f32::MAX;
        for _ in 0..500 {
            let before = state;
            state.approach(&target, ease);
            let fields = [
                (before.position, state.position, target.position),
                (before.look_at, state.look_at, target.look_at),
            ];
            for (b, s, t) in fields {
                for axis in 0..3 {
                    let (b, s, t) = (b[axis], s[axis], t[axis]);
                    // never crosses the target
                    assert!((t - s) * (t - b) >= 0.0, "overshoot with ease {ease}");
                    assert!((t - s).abs() <= (t - b).abs() + 1e-6);
                }
            }
            let err = (state.position - target.position).length()
                + (state.look_at - target.look_at).length();
            assert!(err <= prev_err + 1e-6);
            prev_err = err;
        }
    }
}

#[test]
fn ease_of_one_snaps_to_target() {
    let mut state = pose(0.0, 0.0, 6.0, 0.0, 0.0, 0.0);
    let target = pose(2.0, -8.0, 6.0, 2.0, -8.0, 0.0);
    state.approach(&target, 1.0);
    assert_eq!(state, target);
}

#[test]
fn midpoint_target_between_sections_one_and_two() {
    let table = PoseTable::portfolio();
    let blend = section_blend(150.0, 300.0, table.len());
    let target = table.target(blend);
    let a = table.get(1).unwrap();
    let b = table.get(2).unwrap();
    assert!(approx(target.position, (a.position + b.position) * 0.5));
    assert!(approx(target.look_at, (a.look_at + b.look_at) * 0.5));
    assert!(approx(target.position, Vec3::new(0.0, -6.0, 5.75)));
}

#[test]
fn centred_pointer_adds_no_parallax() {
    let smoothed = pose(-2.0, -4.0, 5.5, -2.0, -4.0, 0.0);
    assert_eq!(smoothed.with_parallax(PointerOffset::CENTER, 0.5, 0.3), smoothed);

    let mut rig = CameraRig::portfolio();
    let out = rig.step(500.0, 1200.0, PointerOffset::CENTER);
    assert_eq!(out, *rig.smoothed());
}

#[test]
fn parallax_shifts_position_and_look_at_alike() {
    let smoothed = pose(0.0, 0.0, 6.0, 0.0, 0.0, 0.0);
    let p = PointerOffset { x: 0.5, y: -0.5 };
    let out = smoothed.with_parallax(p, 0.5, 0.3);
    assert!(approx(out.position, Vec3::new(0.25, 0.15, 6.0)));
    assert!(approx(out.look_at, Vec3::new(0.25, 0.15, 0.0)));
}

#[test]
fn parallax_is_not_filtered() {
    let mut rig = CameraRig::portfolio();
    let left = rig.step(0.0, 1000.0, PointerOffset { x: -0.5, y: 0.0 });
    let right = rig.step(0.0, 1000.0, PointerOffset { x: 0.5, y: 0.0 });
    // smoothed state is already at rest on pose 0, so the whole jump is parallax
    assert!((right.position.x - left.position.x - 0.5).abs() < 1e-6);
}

#[test]
fn pointer_offset_is_normalized_and_clamped() {
    let p = PointerOffset::from_client(0.0, 600.0, 800.0, 600.0);
    assert_eq!(p, PointerOffset { x: -0.5, y: 0.5 });
    let p = PointerOffset::from_client(400.0, 300.0, 800.0, 600.0);
    assert_eq!(p, PointerOffset::CENTER);
    let p = PointerOffset::from_client(2000.0, -50.0, 800.0, 600.0);
    assert_eq!(p, PointerOffset { x: 0.5, y: -0.5 });
    assert_eq!(PointerOffset::from_client(10.0, 10.0, 0.0, 0.0), PointerOffset::CENTER);
}

#[test]
fn rig_starts_on_first_pose_and_travels_to_the_last() {
    let mut rig = CameraRig::portfolio();
    let first = *rig.poses().first();
    assert_eq!(*rig.smoothed(), first);

    for _ in 0..600 {
        rig.step(1000.0, 1000.0, PointerOffset::CENTER);
    }
    let last = *rig.poses().get(3).unwrap();
    assert!(approx(rig.smoothed().position, last.position));
    assert!(approx(rig.smoothed().look_at, last.look_at));
}

#[test]
fn rig_moves_continuously_after_scroll_jump() {
    let mut rig = CameraRig::portfolio();
    let before = *rig.smoothed();
    rig.step(1000.0, 1000.0, PointerOffset::CENTER);
    let after = *rig.smoothed();
    // one frame covers only `ease` of the distance
    let full = rig.poses().get(3).unwrap().position - before.position;
    let moved = after.position - before.position;
    assert!((moved.length() - full.length() * CAMERA_EASE).abs() < 1e-4);
}

#[test]
fn pose_table_requires_two_sections() {
    let one = vec![pose(0.0, 0.0, 6.0, 0.0, 0.0, 0.0)];
    assert_eq!(PoseTable::new(one).unwrap_err(), SceneError::TooFewSections(1));
    assert!(PoseTable::new(Vec::new()).is_err());
    let two = vec![
        pose(0.0, 0.0, 6.0, 0.0, 0.0, 0.0),
        pose(0.0, -4.0, 6.0, 0.0, -4.0, 0.0),
    ];
    let table = PoseTable::new(two).unwrap();
    let end = table.target(SectionBlend { index: 5, t: 0.0 });
    assert_eq!(end.position, Vec3::new(0.0, -4.0, 6.0));
}

#[test]
fn index_past_last_leg_targets_last_pose() {
    let table = PoseTable::portfolio();
    let last = *table.get(table.len() - 1).unwrap();
    for t in [0.0, 0.5] {
        assert_eq!(table.target(SectionBlend { index: 9, t }), last);
    }
}

#[test]
fn rig_rejects_out_of_range_ease() {
    for ease in [0.0_f32, -0.1, 1.5, f32::NAN] {
        let params = RigParams {
            ease,
            ..RigParams::default()
        };
        assert!(matches!(
            CameraRig::new(PoseTable::portfolio(), params),
            Err(SceneError::InvalidEase(_))
        ));
    }
    assert!(CameraRig::new(PoseTable::portfolio(), RigParams::default()).is_ok());
}

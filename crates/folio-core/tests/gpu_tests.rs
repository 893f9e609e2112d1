// Host-side tests for the GPU-facing layouts and shader source.

use folio_core::{BillboardInstance, Camera, SceneUniforms, SCENE_WGSL};
use glam::Vec3;

#[test]
fn pod_layouts_match_shader_expectations() {
    // offsets 0 pos, 12 scale, 16 color, 32 spin, 36 shape
    assert_eq!(std::mem::size_of::<BillboardInstance>(), 48);
    assert_eq!(std::mem::size_of::<SceneUniforms>(), 96);
}

#[test]
fn shader_declares_entry_points() {
    assert!(SCENE_WGSL.contains("fn vs_main"));
    assert!(SCENE_WGSL.contains("fn fs_main"));
}

#[test]
fn billboard_axes_are_orthonormal_to_view() {
    let cam = Camera::scroll_page(16.0 / 9.0);
    let (right, up) = cam.billboard_axes();
    let forward = (cam.target - cam.eye).normalize();
    assert!((right.length() - 1.0).abs() < 1e-5);
    assert!((up.length() - 1.0).abs() < 1e-5);
    assert!(right.dot(forward).abs() < 1e-5);
    assert!(up.dot(forward).abs() < 1e-5);
    // looking down -Z from the hero pose
    assert!((right - Vec3::X).length() < 1e-5);
    assert!((up - Vec3::Y).length() < 1e-5);

    let u = SceneUniforms::from_camera(&cam);
    assert_eq!(u.cam_right, [1.0, 0.0, 0.0, 0.0]);
}

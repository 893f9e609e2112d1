use glam::Vec3;

// Shared scene and camera tuning constants used by the web frontend.

// Section layout
pub const SECTION_COUNT: usize = 4;
pub const SECTION_GAP: f32 = 4.0; // world units between section centres

// Camera pose per section as [position, look_at]. X alternates left/right.
pub const DEFAULT_SECTION_POSES: [[[f32; 3]; 2]; SECTION_COUNT] = [
    [[0.0, 0.0, 6.0], [0.0, 0.0, 0.0]],                                 // hero: room on the right
    [[-2.0, -SECTION_GAP, 5.5], [-2.0, -SECTION_GAP, 0.0]],             // about: character on the left
    [[2.0, -SECTION_GAP * 2.0, 6.0], [2.0, -SECTION_GAP * 2.0, 0.0]],   // work: lab on the right
    [[-2.0, -SECTION_GAP * 3.0, 5.5], [-2.0, -SECTION_GAP * 3.0, 0.0]], // contact
];

// Camera smoothing
pub const CAMERA_EASE: f32 = 0.08; // fraction of the remaining distance covered per frame
pub const PARALLAX_X: f32 = 0.5;
pub const PARALLAX_Y: f32 = 0.3;

// Scroll camera projection
pub const SCROLL_FOVY_DEG: f32 = 35.0;
pub const SCROLL_ZNEAR: f32 = 0.1;
pub const SCROLL_ZFAR: f32 = 100.0;

// Idle group sway around Y
pub const GROUP_SWAY_SPEED: f32 = 0.25;
pub const GROUP_SWAY_PHASE_STEP: f32 = 1.2;
pub const GROUP_SWAY_AMPLITUDE: f32 = 0.05; // radians

// Floating sprites
pub const SPRITE_BOB_SPEED: f32 = 1.8;
pub const SPRITE_BOB_AMPLITUDE: f32 = 0.12;
pub const SPRITE_SPIN_SPEED: f32 = 0.9;
pub const SPRITE_SPIN_AMPLITUDE: f32 = 0.08;

// Star field
pub const STAR_COUNT: usize = 1200;
pub const STAR_SPAN_X: f32 = 30.0;
pub const STAR_SPAN_Z: f32 = 15.0;
pub const STAR_SIZE: f32 = 0.02;
pub const STAR_OPACITY: f32 = 0.7;
pub const SCENE_SEED: u64 = 42;

// Model viewer
pub const VIEWER_FOVY_DEG: f32 = 60.0;
pub const VIEWER_ZNEAR: f32 = 0.1;
pub const VIEWER_ZFAR: f32 = 1000.0;
pub const VIEWER_START_EYE: Vec3 = Vec3::new(0.0, 2.0, 5.0);
pub const VIEWER_DAMPING: f32 = 0.05;
pub const VIEWER_ZOOM_STEP: f32 = 0.95; // radius multiplier per wheel notch towards the target
pub const VIEWER_MIN_DISTANCE: f32 = 0.5;
pub const VIEWER_MAX_DISTANCE: f32 = 200.0;

/// Vertical extent covered by the star field: every section plus a margin.
#[inline]
pub fn star_span_y() -> f32 {
    SECTION_GAP * SECTION_COUNT as f32 + 10.0
}

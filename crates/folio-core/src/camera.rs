//! Scroll-driven camera rig.
//!
//! Each frame the rig interpolates a target pose between two adjacent section
//! poses, low-pass filters its own state towards that target and finally adds
//! a pointer parallax offset that is not filtered. The filter step is applied
//! once per rendered frame with no delta-time scaling, so convergence speed
//! follows the display refresh rate.

use crate::constants::{
    CAMERA_EASE, DEFAULT_SECTION_POSES, PARALLAX_X, PARALLAX_Y, SCROLL_FOVY_DEG, SCROLL_ZFAR,
    SCROLL_ZNEAR,
};
use crate::error::SceneError;
use crate::scroll::{section_blend, SectionBlend};
use glam::{Mat4, Vec3};

/// Camera position plus look-at point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Fixed pose attached to one content section.
pub type SectionPose = CameraPose;

impl CameraPose {
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Component-wise `a + (b - a) * t` over all six fields.
    #[inline]
    pub fn lerp(a: &CameraPose, b: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: a.position + (b.position - a.position) * t,
            look_at: a.look_at + (b.look_at - a.look_at) * t,
        }
    }

    /// One-pole low-pass step: `self += (target - self) * ease`.
    #[inline]
    pub fn approach(&mut self, target: &CameraPose, ease: f32) {
        self.position += (target.position - self.position) * ease;
        self.look_at += (target.look_at - self.look_at) * ease;
    }

    /// Shift both position and look-at by the pointer parallax.
    ///
    /// Screen-space Y grows downwards, hence the subtraction.
    #[inline]
    pub fn with_parallax(&self, pointer: PointerOffset, scale_x: f32, scale_y: f32) -> CameraPose {
        let offset = Vec3::new(pointer.x * scale_x, -pointer.y * scale_y, 0.0);
        CameraPose {
            position: self.position + offset,
            look_at: self.look_at + offset,
        }
    }
}

/// Pointer position relative to the viewport centre, each axis in `[-0.5, 0.5]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    pub const CENTER: PointerOffset = PointerOffset { x: 0.0, y: 0.0 };

    /// Normalize client coordinates against the viewport size.
    ///
    /// An empty viewport reports the centre.
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        let axis = |v: f32, extent: f32| {
            if extent > 0.0 {
                let n = v / extent - 0.5;
                if n.is_finite() {
                    n.clamp(-0.5, 0.5)
                } else {
                    0.0
                }
            } else {
                0.0
            }
        };
        Self {
            x: axis(client_x, width),
            y: axis(client_y, height),
        }
    }
}

/// Immutable table of section poses, at least two entries long.
#[derive(Clone, Debug)]
pub struct PoseTable {
    poses: Vec<SectionPose>,
}

impl PoseTable {
    pub fn new(poses: Vec<SectionPose>) -> Result<Self, SceneError> {
        if poses.len() < 2 {
            return Err(SceneError::TooFewSections(poses.len()));
        }
        Ok(Self { poses })
    }

    /// Hero, about, work and contact poses of the portfolio page.
    pub fn portfolio() -> Self {
        let poses = DEFAULT_SECTION_POSES
            .iter()
            .map(|[p, l]| SectionPose::new(Vec3::from(*p), Vec3::from(*l)))
            .collect();
        Self { poses }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&SectionPose> {
        self.poses.get(index)
    }

    #[inline]
    pub fn first(&self) -> &SectionPose {
        &self.poses[0]
    }

    /// Target pose for a position along the trajectory. An index past the
    /// last leg resolves to the last pose.
    pub fn target(&self, blend: SectionBlend) -> CameraPose {
        let last_leg = self.poses.len() - 2;
        if blend.index > last_leg {
            return self.poses[last_leg + 1];
        }
        let i = blend.index;
        CameraPose::lerp(&self.poses[i], &self.poses[i + 1], blend.t)
    }
}

/// Tuning for [`CameraRig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigParams {
    pub ease: f32,
    pub parallax_x: f32,
    pub parallax_y: f32,
}

impl Default for RigParams {
    fn default() -> Self {
        Self {
            ease: CAMERA_EASE,
            parallax_x: PARALLAX_X,
            parallax_y: PARALLAX_Y,
        }
    }
}

/// Owns the smoothed camera state. Only [`CameraRig::step`] mutates it.
#[derive(Clone, Debug)]
pub struct CameraRig {
    poses: PoseTable,
    params: RigParams,
    smoothed: CameraPose,
}

impl CameraRig {
    pub fn new(poses: PoseTable, params: RigParams) -> Result<Self, SceneError> {
        if !(params.ease > 0.0 && params.ease <= 1.0) {
            return Err(SceneError::InvalidEase(params.ease));
        }
        let smoothed = *poses.first();
        log::debug!(
            "[camera] rig with {} sections, ease {:.3}",
            poses.len(),
            params.ease
        );
        Ok(Self {
            poses,
            params,
            smoothed,
        })
    }

    pub fn portfolio() -> Self {
        let poses = PoseTable::portfolio();
        let smoothed = *poses.first();
        Self {
            poses,
            params: RigParams::default(),
            smoothed,
        }
    }

    #[inline]
    pub fn params(&self) -> &RigParams {
        &self.params
    }

    #[inline]
    pub fn poses(&self) -> &PoseTable {
        &self.poses
    }

    /// Filtered pose before parallax.
    #[inline]
    pub fn smoothed(&self) -> &CameraPose {
        &self.smoothed
    }

    /// Advance one frame and return the pose to render with.
    pub fn step(
        &mut self,
        scroll_offset: f32,
        total_scrollable: f32,
        pointer: PointerOffset,
    ) -> CameraPose {
        let blend = section_blend(scroll_offset, total_scrollable, self.poses.len());
        let target = self.poses.target(blend);
        self.smoothed.approach(&target, self.params.ease);
        self.smoothed
            .with_parallax(pointer, self.params.parallax_x, self.params.parallax_y)
    }
}

/// Right-handed perspective camera description.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera for the scroll page, placed at the first section pose.
    pub fn scroll_page(aspect: f32) -> Self {
        let start = *PoseTable::portfolio().first();
        Self {
            eye: start.position,
            target: start.look_at,
            up: Vec3::Y,
            aspect,
            fovy_radians: SCROLL_FOVY_DEG.to_radians(),
            znear: SCROLL_ZNEAR,
            zfar: SCROLL_ZFAR,
        }
    }

    #[inline]
    pub fn set_pose(&mut self, pose: &CameraPose) {
        self.eye = pose.position;
        self.target = pose.look_at;
    }

    #[inline]
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space right and up axes of the view, used to face billboards.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }
}

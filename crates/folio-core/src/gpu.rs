//! GPU-facing plain-old-data shared with the WGSL shader.

use crate::camera::Camera;

/// Per-frame uniforms.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub cam_right: [f32; 4],
    pub cam_up: [f32; 4],
}

impl SceneUniforms {
    pub fn from_camera(camera: &Camera) -> Self {
        let (right, up) = camera.billboard_axes();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
        }
    }
}

/// Billboard shape selector read by the fragment shader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Soft round point: stars and floating sprites.
    Disc,
    /// Rounded panel: room placeholders.
    Panel,
}

impl Shape {
    #[inline]
    pub fn as_f32(self) -> f32 {
        match self {
            Shape::Disc => 0.0,
            Shape::Panel => 1.0,
        }
    }
}

/// One camera-facing quad.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BillboardInstance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub spin: f32,
    pub shape: f32,
    pub _pad: [f32; 2],
}

/// Unit quad as two triangles, centred on the origin.
pub const QUAD_VERTICES: [f32; 12] = [
    -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
];

pub mod camera;
pub mod constants;
pub mod error;
pub mod gpu;
pub mod orbit;
pub mod scene;
pub mod scroll;
pub mod ui;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use error::*;
pub use gpu::*;
pub use orbit::*;
pub use scene::*;
pub use scroll::*;

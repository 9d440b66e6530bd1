//! Renderer contract.
//!
//! The web build hands frames to the JavaScript host through
//! [`PackedFrameRenderer`](super::packed::PackedFrameRenderer); a native GPU
//! backend would implement the same trait.

use super::camera::CameraUniform;
use super::instance::MeshInstance;

/// Renderer trait for drawing backends.
pub trait Renderer {
    /// Backend identifier (e.g., "packed", "webgl").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    fn draw(&mut self, frame: &FrameData);

    /// Handle a drawing surface resize (CSS pixels).
    fn resize(&mut self, width: u32, height: u32);

    /// Current drawing surface size (CSS pixels).
    fn size(&self) -> (u32, u32);
}

/// Everything a backend needs for one frame.
pub struct FrameData<'a> {
    pub camera: CameraUniform,
    /// Meshes in scene order.
    pub instances: &'a [MeshInstance],
    /// Ambient light RGB (0.0-1.0 each).
    pub ambient: [f32; 3],
}

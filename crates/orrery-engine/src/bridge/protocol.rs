/// Frame buffer layout shared with the JavaScript host, which reads it
/// straight out of wasm memory via `get_frame_ptr` / `get_frame_len`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 32 floats (view, projection; column-major)]
/// [Instances: max_instances × 28 floats]
/// ```
///
/// Protocol version and capacity are written into the header once, when the
/// renderer is created; surface size on every resize; counts and ambient
/// light every frame. The host reads capacities from the header and never
/// hardcodes them.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_SURFACE_WIDTH: usize = 4;
pub const HEADER_SURFACE_HEIGHT: usize = 5;
pub const HEADER_PIXEL_RATIO: usize = 6;
pub const HEADER_AMBIENT_R: usize = 7;
pub const HEADER_AMBIENT_G: usize = 8;
pub const HEADER_AMBIENT_B: usize = 9;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera section: view + projection matrices.
pub const CAMERA_FLOATS: usize = 32;

/// Floats per mesh instance (wire format, never changes).
pub const INSTANCE_FLOATS: usize = 28;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum mesh instances.
    pub max_instances: usize,

    /// Offset (in floats) where camera data begins.
    pub camera_offset: usize,
    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_instances: usize) -> Self {
        let camera_offset = HEADER_FLOATS;
        let instance_data_offset = camera_offset + CAMERA_FLOATS;
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let buffer_total_floats = instance_data_offset + instance_data_floats;

        Self {
            max_instances,
            camera_offset,
            instance_data_floats,
            instance_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances)
    }
}

use crate::bridge::protocol::{
    ProtocolLayout, HEADER_AMBIENT_B, HEADER_AMBIENT_G, HEADER_AMBIENT_R,
    HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT, HEADER_MAX_INSTANCES, HEADER_PIXEL_RATIO,
    HEADER_PROTOCOL_VERSION, HEADER_SURFACE_HEIGHT, HEADER_SURFACE_WIDTH, PROTOCOL_VERSION,
};
use super::traits::{FrameData, Renderer};

/// Renderer that serializes each frame into one flat f32 buffer for the
/// JavaScript host, which reads it straight out of wasm memory.
pub struct PackedFrameRenderer {
    layout: ProtocolLayout,
    buffer: Vec<f32>,
    frame_counter: u32,
    width: u32,
    height: u32,
    pixel_ratio: f32,
    overflow_warned: bool,
}

impl PackedFrameRenderer {
    pub fn new(layout: ProtocolLayout, width: u32, height: u32, pixel_ratio: f32) -> Self {
        let buffer = vec![0.0; layout.buffer_total_floats];
        let mut renderer = Self {
            layout,
            buffer,
            frame_counter: 0,
            width,
            height,
            pixel_ratio,
            overflow_warned: false,
        };
        renderer.buffer[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        renderer.buffer[HEADER_MAX_INSTANCES] = renderer.layout.max_instances as f32;
        renderer.write_surface();
        renderer
    }

    fn write_surface(&mut self) {
        self.buffer[HEADER_SURFACE_WIDTH] = self.width as f32;
        self.buffer[HEADER_SURFACE_HEIGHT] = self.height as f32;
        self.buffer[HEADER_PIXEL_RATIO] = self.pixel_ratio;
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    /// Instances written by the last draw.
    pub fn instance_count(&self) -> u32 {
        self.buffer[HEADER_INSTANCE_COUNT] as u32
    }
}

impl Renderer for PackedFrameRenderer {
    fn backend(&self) -> &'static str {
        "packed"
    }

    fn draw(&mut self, frame: &FrameData) {
        let max = self.layout.max_instances;
        let count = frame.instances.len().min(max);
        if count < frame.instances.len() && !self.overflow_warned {
            log::warn!(
                "{} meshes exceed max_instances ({}); extra meshes are not drawn",
                frame.instances.len(),
                max
            );
            self.overflow_warned = true;
        }

        self.frame_counter = self.frame_counter.wrapping_add(1);
        self.buffer[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        self.buffer[HEADER_INSTANCE_COUNT] = count as f32;
        self.buffer[HEADER_AMBIENT_R] = frame.ambient[0];
        self.buffer[HEADER_AMBIENT_G] = frame.ambient[1];
        self.buffer[HEADER_AMBIENT_B] = frame.ambient[2];

        let cam = self.layout.camera_offset;
        let camera: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&frame.camera));
        self.buffer[cam..cam + camera.len()].copy_from_slice(camera);

        let start = self.layout.instance_data_offset;
        let instances: &[f32] = bytemuck::cast_slice(&frame.instances[..count]);
        self.buffer[start..start + instances.len()].copy_from_slice(instances);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.write_surface();
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

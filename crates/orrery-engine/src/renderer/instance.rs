use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use crate::assets::textures::TextureId;
use crate::components::mesh::{Geometry, MaterialKind, MeshComponent, Side};

/// Per-mesh render data copied into the frame buffer for the host renderer.
/// Must match the host protocol: 28 floats = 112 bytes stride.
///
/// Geometry is sent as parameters; the host builds and caches the vertex
/// buffers for each distinct (kind, params, segments) tuple.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct MeshInstance {
    /// World matrix, column-major.
    pub model: [[f32; 4]; 4],
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// 0 = sphere, 1 = ring.
    pub geometry: f32,
    /// Sphere radius, or ring inner radius.
    pub param_a: f32,
    /// Unused for spheres, ring outer radius.
    pub param_b: f32,
    /// Sphere width segments, or ring theta segments.
    pub segments_w: f32,
    /// Sphere height segments, 1 for rings.
    pub segments_h: f32,
    /// Texture id, or -1 when the material draws untextured.
    pub texture: f32,
    /// 0 = basic (unlit), 1 = phong.
    pub material: f32,
    /// 0 = front faces only, 1 = both sides.
    pub side: f32,
    pub _pad: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 28;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    /// Pack a mesh placed by `world`. `texture` is the map to bind, if ready.
    pub fn new(world: &Mat4, mesh: &MeshComponent, texture: Option<TextureId>) -> Self {
        let (param_a, param_b, segments_w, segments_h) = match mesh.geometry {
            Geometry::Sphere { radius, width_segments, height_segments } => {
                (radius, 0.0, width_segments as f32, height_segments as f32)
            }
            Geometry::Ring { inner, outer, segments } => (inner, outer, segments as f32, 1.0),
        };
        let material = &mesh.material;

        Self {
            model: world.to_cols_array_2d(),
            r: material.color.r,
            g: material.color.g,
            b: material.color.b,
            geometry: mesh.geometry.kind_code(),
            param_a,
            param_b,
            segments_w,
            segments_h,
            texture: texture.map_or(-1.0, |id| id.0 as f32),
            material: match material.kind {
                MaterialKind::Basic => 0.0,
                MaterialKind::Phong => 1.0,
            },
            side: match material.side {
                Side::Front => 0.0,
                Side::Double => 1.0,
            },
            _pad: 0.0,
        }
    }
}

/// Mesh instances for one frame, in scene order.
pub struct RenderBuffer {
    pub instances: Vec<MeshInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn as_slice(&self) -> &[MeshInstance] {
        &self.instances
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

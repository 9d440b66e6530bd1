use crate::assets::textures::TextureId;

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl MeshColor {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    /// From a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

impl Default for MeshColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Mesh primitive, described by parameters (the host tessellates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// UV sphere centred on the local origin.
    Sphere { radius: f32, width_segments: u32, height_segments: u32 },
    /// Flat annulus in the local XY plane, centred on the local origin.
    Ring { inner: f32, outer: f32, segments: u32 },
}

impl Geometry {
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Geometry::Sphere { radius, width_segments: segments, height_segments: segments }
    }

    /// Radii may be given in either order.
    pub fn ring(a: f32, b: f32, segments: u32) -> Self {
        Geometry::Ring { inner: a.min(b), outer: a.max(b), segments }
    }

    /// Wire code for the packed frame.
    pub fn kind_code(&self) -> f32 {
        match self {
            Geometry::Sphere { .. } => 0.0,
            Geometry::Ring { .. } => 1.0,
        }
    }
}

/// Shading model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialKind {
    /// Unlit flat color.
    Basic,
    /// Lit by the scene's ambient light.
    #[default]
    Phong,
}

/// Which faces are drawn (and hit by rays).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    pub kind: MaterialKind,
    pub color: MeshColor,
    /// Color map. Drawn only once the texture has loaded.
    pub texture: Option<TextureId>,
    pub side: Side,
}

impl Material {
    pub fn basic(color: MeshColor) -> Self {
        Self { kind: MaterialKind::Basic, color, ..Default::default() }
    }

    pub fn phong(color: MeshColor) -> Self {
        Self { kind: MaterialKind::Phong, color, ..Default::default() }
    }

    /// White Phong material carrying a color map.
    pub fn textured(texture: TextureId) -> Self {
        Self { texture: Some(texture), ..Self::phong(MeshColor::WHITE) }
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }
}

/// Renderable mesh attached to a scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub geometry: Geometry,
    pub material: Material,
}

impl MeshComponent {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }
}

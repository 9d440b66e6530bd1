pub mod api;
pub mod core;
pub mod components;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod picking;
pub mod controls;
pub mod systems;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::NodeId;
pub use api::ui::{Cursor, UiState, UiSurface};
pub use crate::core::scene::{Node, Scene};
pub use crate::core::transform::Transform;
pub use crate::core::rng::Rng;
pub use components::mesh::{MeshComponent, Geometry, Material, MaterialKind, Side, MeshColor};
pub use renderer::camera::{PerspectiveCamera, CameraUniform};
pub use renderer::instance::{MeshInstance, RenderBuffer};
pub use renderer::packed::PackedFrameRenderer;
pub use renderer::traits::{Renderer, FrameData};
pub use input::event::InputEvent;
pub use input::pointer::Viewport;
pub use assets::textures::{TextureId, TextureRegistry, TextureState, TextureRequest};
pub use bridge::protocol::ProtocolLayout;
pub use picking::ray::{Ray, Hit, Intersect, Raycaster};
pub use controls::orbit::OrbitControls;
pub use systems::render::build_render_buffer;
pub use error::EngineError;

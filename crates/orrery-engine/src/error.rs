use crate::api::types::NodeId;
use crate::assets::textures::TextureId;

/// Errors surfaced by scene and asset bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("node {0:?} is not in the scene")]
    UnknownNode(NodeId),

    #[error("texture {0:?} was never requested")]
    UnknownTexture(TextureId),
}

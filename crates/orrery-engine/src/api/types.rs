/// Unique identifier for a node in the scene graph.
///
/// Ids are handed out by [`Scene`](crate::core::scene::Scene) in insertion order
/// and stay valid for the lifetime of the scene (nodes are never removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Index into the scene's node storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

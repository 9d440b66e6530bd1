use glam::{Mat4, Vec3};
use crate::api::types::NodeId;
use crate::components::mesh::MeshComponent;
use crate::core::transform::Transform;
use crate::error::EngineError;

/// A node in the scene graph.
///
/// A node knows its own local transform and owns the list of its children.
/// It never points back at its parent; world placement comes from walking
/// the tree top-down in [`Scene::propagate`].
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Free-form name, handy for lookups and logs.
    pub tag: String,
    /// Transform relative to the parent.
    pub transform: Transform,
    /// Renderable mesh (nodes without one are pure pivots).
    pub mesh: Option<MeshComponent>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Scene graph: a forest of nodes stored in a flat Vec, indexed by `NodeId`.
/// Sized for hundreds of nodes; nodes are created once and never removed.
pub struct Scene {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    /// World matrices, rebuilt by `propagate`.
    world: Vec<Mat4>,
    dirty: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            roots: Vec::new(),
            world: Vec::with_capacity(capacity),
            dirty: false,
        }
    }

    fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        self.world.push(Mat4::IDENTITY);
        self.dirty = true;
        id
    }

    /// Add a top-level node.
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = self.insert(node);
        self.roots.push(id);
        id
    }

    /// Add a node inside `parent`'s coordinate space.
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> Result<NodeId, EngineError> {
        if parent.index() >= self.nodes.len() {
            return Err(EngineError::UnknownNode(parent));
        }
        let id = self.insert(node);
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.dirty = true;
        self.nodes.get_mut(id.index())
    }

    /// Mutable access to a node's local transform.
    pub fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform> {
        self.get_mut(id).map(|n| &mut n.transform)
    }

    pub fn children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.get(id).map(|n| n.children.as_slice())
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Iterate over all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// First node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.iter().find(|(_, n)| n.tag == tag).map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Recompute every world matrix from the roots down:
    /// `world(child) = world(parent) * local(child)`.
    pub fn propagate(&mut self) {
        if !self.dirty {
            return;
        }

        let mut stack: Vec<(NodeId, Mat4)> = self
            .roots
            .iter()
            .rev()
            .map(|&root| (root, Mat4::IDENTITY))
            .collect();

        while let Some((id, parent_world)) = stack.pop() {
            let node = &self.nodes[id.index()];
            let world = parent_world * node.transform.matrix();
            self.world[id.index()] = world;
            for &child in node.children.iter().rev() {
                stack.push((child, world));
            }
        }

        self.dirty = false;
    }

    /// World matrix as of the last `propagate`.
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        self.world.get(id.index()).copied()
    }

    /// World-space origin of a node as of the last `propagate`.
    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        self.world_matrix(id).map(|m| m.transform_point3(Vec3::ZERO))
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn add_child_links_parent() {
        let mut scene = Scene::new();
        let parent = scene.add(Node::new().with_tag("parent"));
        let child = scene.add_child(parent, Node::new().with_tag("child")).unwrap();

        assert_eq!(scene.children(parent), Some([child].as_slice()));
        assert_eq!(scene.roots(), &[parent]);
    }

    #[test]
    fn add_child_to_unknown_parent_fails() {
        let mut scene = Scene::new();
        let err = scene.add_child(NodeId(7), Node::new()).unwrap_err();
        assert_eq!(err, EngineError::UnknownNode(NodeId(7)));
        assert!(scene.is_empty());
    }

    #[test]
    fn propagate_composes_parent_transforms() {
        let mut scene = Scene::new();
        let parent = scene.add(
            Node::new().with_transform(
                Transform::new()
                    .with_position(Vec3::new(100.0, 0.0, 0.0))
                    .with_rotation(Quat::from_rotation_y(FRAC_PI_2)),
            ),
        );
        let child = scene
            .add_child(parent, Node::new().with_position(Vec3::new(10.0, 0.0, 0.0)))
            .unwrap();

        scene.propagate();

        let p = scene.world_position(child).unwrap();
        assert!((p - Vec3::new(100.0, 0.0, -10.0)).length() < 1e-4, "got {p:?}");
    }

    #[test]
    fn three_level_chain() {
        let mut scene = Scene::new();
        let a = scene.add(Node::new().with_position(Vec3::new(1.0, 0.0, 0.0)));
        let b = scene.add_child(a, Node::new().with_position(Vec3::new(0.0, 2.0, 0.0))).unwrap();
        let c = scene.add_child(b, Node::new().with_position(Vec3::new(0.0, 0.0, 3.0))).unwrap();

        scene.propagate();
        assert_eq!(scene.world_position(c), Some(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn propagate_clears_dirty() {
        let mut scene = Scene::new();
        let id = scene.add(Node::new());
        assert!(scene.is_dirty());
        scene.propagate();
        assert!(!scene.is_dirty());

        scene.transform_mut(id).unwrap().position = Vec3::Y;
        assert!(scene.is_dirty());
        scene.propagate();
        assert_eq!(scene.world_position(id), Some(Vec3::Y));
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.add(Node::new().with_tag("sun"));
        let earth = scene.add(Node::new().with_tag("earth"));
        assert_eq!(scene.find_by_tag("earth"), Some(earth));
        assert_eq!(scene.find_by_tag("pluto"), None);
    }
}

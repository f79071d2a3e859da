//! Scene graph abstraction

use relief3d_core::Transform3D;
use relief3d_reconstruction::ReconstructedGeometry;
use std::collections::BTreeMap;

/// Identifier of a node attached to a scene graph
pub type NodeId = u64;

/// The minimal scene capability the orchestrator consumes
///
/// A rendering engine adapts its own scene type behind this trait; the
/// crate ships a headless implementation for tests and tooling. Transforms
/// are local to the node.
pub trait SceneGraph {
    /// Add a renderable node and return its identifier
    fn attach(&mut self, geometry: ReconstructedGeometry) -> NodeId;

    /// Remove a node; unknown identifiers are ignored
    fn detach(&mut self, node: NodeId);

    /// Set a node's local transform
    fn set_transform(&mut self, node: NodeId, transform: Transform3D);

    /// Number of live nodes
    fn node_count(&self) -> usize;
}

/// A node held by the headless scene
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub geometry: ReconstructedGeometry,
    pub transform: Transform3D,
}

/// An in-memory scene graph with no rendering backend
#[derive(Debug, Default)]
pub struct HeadlessScene {
    nodes: BTreeMap<NodeId, SceneNode>,
    next_id: NodeId,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &SceneNode)> {
        self.nodes.iter()
    }
}

impl SceneGraph for HeadlessScene {
    fn attach(&mut self, geometry: ReconstructedGeometry) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(
            id,
            SceneNode {
                geometry,
                transform: Transform3D::identity(),
            },
        );
        id
    }

    fn detach(&mut self, node: NodeId) {
        self.nodes.remove(&node);
    }

    fn set_transform(&mut self, node: NodeId, transform: Transform3D) {
        if let Some(entry) = self.nodes.get_mut(&node) {
            entry.transform = transform;
        }
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

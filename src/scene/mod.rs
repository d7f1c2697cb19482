//! Minimal scene model: flat node storage, parent links, per-node spatial
//! components.
//!
//! The fade effect never owns scene data. It holds [`NodeId`] handles and
//! resolves them against the [`Scene`] every frame, so a removed node is
//! simply skipped rather than being a dangling reference. Nodes carry at
//! most one [`Drawable`] (a render target with world bounds) and one
//! [`Collider`] (a precise distance proxy); parent links exist so default
//! targets can be enumerated from a subtree.

mod overrides;

use glam::Vec3;
pub use overrides::{Material, OverrideTable, PropertyBlock};

use crate::geometry::{Aabb, Collider};

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// Opaque handle to a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// Opaque handle to a shared material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(u32);

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// A drawable surface: world-space bounds plus the shared material it is
/// drawn with.
///
/// Shader parameters are never written here. Per-target values go through
/// the [`OverrideTable`] and are merged with the material at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    /// World-space bounding box of the drawn geometry.
    pub bounds: Aabb,
    /// Shared material the surface is drawn with.
    pub material: MaterialId,
}

/// A scene node: optional parent link plus optional spatial components.
#[derive(Debug, Clone)]
pub struct SceneNode {
    id: NodeId,
    parent: Option<NodeId>,
    /// Drawable surface attached to this node, if any.
    pub drawable: Option<Drawable>,
    /// Distance-query collider attached to this node, if any.
    pub collider: Option<Collider>,
}

impl SceneNode {
    /// Node identifier.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Parent node, if any.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Flat node storage with parent links and the per-frame viewer position.
///
/// Node and material IDs are assigned once and never reused, so a stale
/// handle resolves to `None` instead of aliasing a new node.
pub struct Scene {
    nodes: Vec<SceneNode>,
    materials: Vec<(MaterialId, Material)>,
    next_node_id: u32,
    next_material_id: u32,
    viewer: Option<Vec3>,
}

impl Scene {
    /// Create an empty scene with no viewer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            materials: Vec::new(),
            next_node_id: 0,
            next_material_id: 0,
            viewer: None,
        }
    }

    // -- Viewer --

    /// Set the viewer (camera) world position for this frame, or `None`
    /// when no viewer is resolvable.
    pub fn set_viewer(&mut self, position: Option<Vec3>) {
        self.viewer = position;
    }

    /// Viewer world position for this frame, if resolved.
    #[must_use]
    pub fn viewer(&self) -> Option<Vec3> {
        self.viewer
    }

    // -- Materials --

    /// Register a shared material. Returns its assigned handle.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.next_material_id);
        self.next_material_id += 1;
        self.materials.push((id, material));
        id
    }

    /// Look up a shared material by handle.
    #[must_use]
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials
            .iter()
            .find(|(mid, _)| *mid == id)
            .map(|(_, m)| m)
    }

    // -- Node management --

    /// Add a bare node under `parent` (or at the root when `None`).
    /// Returns the assigned handle.
    pub fn add_node(&mut self, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push(SceneNode {
            id,
            parent,
            drawable: None,
            collider: None,
        });
        id
    }

    /// Remove a node by handle. Returns the removed node, if any.
    ///
    /// Children are left in place with a dangling parent handle; subtree
    /// queries simply stop walking at the missing link.
    pub fn remove_node(&mut self, id: NodeId) -> Option<SceneNode> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        Some(self.nodes.remove(idx))
    }

    /// Look up a node by handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Attach (or replace) the drawable on a node. No-op for a stale
    /// handle.
    pub fn set_drawable(&mut self, id: NodeId, drawable: Drawable) {
        if let Some(node) = self.node_mut(id) {
            node.drawable = Some(drawable);
        }
    }

    /// Attach (or replace) the collider on a node. No-op for a stale
    /// handle.
    pub fn set_collider(&mut self, id: NodeId, collider: Collider) {
        if let Some(node) = self.node_mut(id) {
            node.collider = Some(collider);
        }
    }

    /// Drawable on a node, if the node exists and carries one.
    #[must_use]
    pub fn drawable(&self, id: NodeId) -> Option<&Drawable> {
        self.node(id).and_then(|n| n.drawable.as_ref())
    }

    /// Collider on a node, if the node exists and carries one.
    #[must_use]
    pub fn collider(&self, id: NodeId) -> Option<&Collider> {
        self.node(id).and_then(|n| n.collider.as_ref())
    }

    // -- Subtree queries --

    /// Whether `node` is `root` or a (transitive) child of it.
    #[must_use]
    pub fn is_in_subtree(&self, root: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == root {
                return true;
            }
            cursor = self.node(id).and_then(SceneNode::parent);
        }
        false
    }

    /// All nodes carrying a drawable in the subtree rooted at `root`
    /// (inclusive), in insertion order.
    #[must_use]
    pub fn drawables_in_subtree(&self, root: NodeId) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.drawable.is_some() && self.is_in_subtree(root, n.id))
            .map(|n| n.id)
            .collect()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

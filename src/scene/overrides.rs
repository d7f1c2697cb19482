//! Per-target shader-parameter overrides.
//!
//! A shared [`Material`] holds the base scalar parameters for every surface
//! drawn with it. Setting a per-target value goes through the
//! [`OverrideTable`] instead: a sparse map of [`PropertyBlock`]s keyed by
//! target node, merged over the material at draw time. The shared material
//! is never written back, so two effects driving different targets cannot
//! interfere through it.

use rustc_hash::FxHashMap;

use super::NodeId;

// ---------------------------------------------------------------------------
// Material
// ---------------------------------------------------------------------------

/// Shared base scalar parameters for a material.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Material {
    scalars: FxHashMap<String, f32>,
}

impl Material {
    /// Create a material with no parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: set a base scalar parameter.
    #[must_use]
    pub fn with_scalar(mut self, name: &str, value: f32) -> Self {
        let _ = self.scalars.insert(name.to_owned(), value);
        self
    }

    /// Base value of a named scalar parameter, if present.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<f32> {
        self.scalars.get(name).copied()
    }
}

// ---------------------------------------------------------------------------
// PropertyBlock
// ---------------------------------------------------------------------------

/// Scalar parameter overrides for a single render target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBlock {
    scalars: FxHashMap<String, f32>,
}

impl PropertyBlock {
    /// Set a named scalar, replacing any previous override. Other scalars
    /// in the block are untouched.
    pub fn set_scalar(&mut self, name: &str, value: f32) {
        let _ = self.scalars.insert(name.to_owned(), value);
    }

    /// Overridden value of a named scalar, if set.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<f32> {
        self.scalars.get(name).copied()
    }

    /// Whether the block holds no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }
}

// ---------------------------------------------------------------------------
// OverrideTable
// ---------------------------------------------------------------------------

/// Sparse per-target override storage, keyed by target node.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    blocks: FxHashMap<NodeId, PropertyBlock>,
}

impl OverrideTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named scalar override on one target.
    pub fn set_scalar(&mut self, target: NodeId, name: &str, value: f32) {
        self.blocks.entry(target).or_default().set_scalar(name, value);
    }

    /// Overridden value of a named scalar on one target, if set.
    #[must_use]
    pub fn scalar(&self, target: NodeId, name: &str) -> Option<f32> {
        self.blocks.get(&target).and_then(|b| b.scalar(name))
    }

    /// The override block for a target, if any override was ever set.
    #[must_use]
    pub fn block(&self, target: NodeId) -> Option<&PropertyBlock> {
        self.blocks.get(&target)
    }

    /// Drop all overrides for a target (e.g. when it leaves the scene).
    pub fn clear_target(&mut self, target: NodeId) {
        let _ = self.blocks.remove(&target);
    }

    /// Draw-time resolution: the target's override when set, otherwise the
    /// material's base value.
    #[must_use]
    pub fn resolved_scalar(
        &self,
        target: NodeId,
        base: &Material,
        name: &str,
    ) -> Option<f32> {
        self.scalar(target, name).or_else(|| base.scalar(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    fn target(scene: &mut Scene) -> NodeId {
        scene.add_node(None)
    }

    #[test]
    fn override_shadows_base_without_mutating_it() {
        let mut scene = Scene::new();
        let t = target(&mut scene);
        let base = Material::new().with_scalar("_Alpha", 1.0);
        let mut table = OverrideTable::new();

        assert_eq!(table.resolved_scalar(t, &base, "_Alpha"), Some(1.0));
        table.set_scalar(t, "_Alpha", 0.25);
        assert_eq!(table.resolved_scalar(t, &base, "_Alpha"), Some(0.25));
        // Shared material untouched.
        assert_eq!(base.scalar("_Alpha"), Some(1.0));
    }

    #[test]
    fn targets_sharing_a_material_stay_independent() {
        let mut scene = Scene::new();
        let a = target(&mut scene);
        let b = target(&mut scene);
        let base = Material::new().with_scalar("_Alpha", 1.0);
        let mut table = OverrideTable::new();

        table.set_scalar(a, "_Alpha", 0.0);
        assert_eq!(table.resolved_scalar(a, &base, "_Alpha"), Some(0.0));
        assert_eq!(table.resolved_scalar(b, &base, "_Alpha"), Some(1.0));
    }

    #[test]
    fn set_scalar_preserves_other_overrides() {
        let mut scene = Scene::new();
        let t = target(&mut scene);
        let mut table = OverrideTable::new();

        table.set_scalar(t, "_Alpha", 0.5);
        table.set_scalar(t, "_Tint", 2.0);
        table.set_scalar(t, "_Alpha", 0.75);
        assert_eq!(table.scalar(t, "_Alpha"), Some(0.75));
        assert_eq!(table.scalar(t, "_Tint"), Some(2.0));
    }

    #[test]
    fn clear_target_falls_back_to_base() {
        let mut scene = Scene::new();
        let t = target(&mut scene);
        let base = Material::new().with_scalar("_Alpha", 1.0);
        let mut table = OverrideTable::new();

        table.set_scalar(t, "_Alpha", 0.0);
        table.clear_target(t);
        assert!(table.block(t).is_none());
        assert_eq!(table.resolved_scalar(t, &base, "_Alpha"), Some(1.0));
    }

    #[test]
    fn unset_parameter_resolves_to_none() {
        let mut scene = Scene::new();
        let t = target(&mut scene);
        let base = Material::new();
        let table = OverrideTable::new();
        assert_eq!(table.resolved_scalar(t, &base, "_Alpha"), None);
    }
}

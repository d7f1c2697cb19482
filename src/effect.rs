//! The proximity fade effect: distance in, shader scalar out.
//!
//! Each instance owns its configuration and two pieces of carried state
//! (the current factor and the smoothing filter's velocity). Everything
//! else is recomputed from the scene every frame, so the update is
//! idempotent for a stationary viewer.

use glam::Vec3;

use crate::math::{inverse_lerp, smoothstep01, SmoothDamp};
use crate::options::{FadeOptions, MIN_FADE_BAND};
use crate::scene::{NodeId, OverrideTable, Scene};

/// Fades a shader scalar on a set of render targets based on how close the
/// viewer is to a volume of interest.
///
/// Distance is measured to the nearest surface point across the configured
/// collider proxies; when no collider yields a finite distance, the
/// targets' bounding boxes stand in. The raw spatial factor is 1 at or
/// inside `show_distance`, 0 at or beyond `show_distance + fade_band`, and
/// cubic-eased in between, then optionally run through a critically-damped
/// spring before being written into the per-target override table.
pub struct ProximityFadeEffect {
    root: NodeId,
    targets: Vec<NodeId>,
    colliders: Vec<NodeId>,
    options: FadeOptions,
    current_factor: f32,
    damp: SmoothDamp,
}

impl ProximityFadeEffect {
    /// Create an effect rooted at `root`. Options are validated (band
    /// floored, distances clamped non-negative) on the way in.
    #[must_use]
    pub fn new(root: NodeId, options: FadeOptions) -> Self {
        Self {
            root,
            targets: Vec::new(),
            colliders: Vec::new(),
            options: options.validated(),
            current_factor: 0.0,
            damp: SmoothDamp::new(),
        }
    }

    /// Builder-style: explicit render targets. When left empty, [`attach`]
    /// resolves every drawable under the root node instead.
    ///
    /// [`attach`]: Self::attach
    #[must_use]
    pub fn with_targets(mut self, targets: Vec<NodeId>) -> Self {
        self.targets = targets;
        self
    }

    /// Builder-style: collider proxy nodes for the precise distance path.
    #[must_use]
    pub fn with_colliders(mut self, colliders: Vec<NodeId>) -> Self {
        self.colliders = colliders;
        self
    }

    /// Resolve default targets. Call once after the owning subtree is
    /// built; a no-op when targets were configured explicitly.
    pub fn attach(&mut self, scene: &Scene) {
        if self.targets.is_empty() {
            self.targets = scene.drawables_in_subtree(self.root);
            log::debug!(
                "proximity fade: resolved {} default target(s) under {:?}",
                self.targets.len(),
                self.root
            );
        }
    }

    /// Current smoothed visibility factor, in `[0, 1]`.
    #[must_use]
    pub fn factor(&self) -> f32 {
        self.current_factor
    }

    /// Effect configuration (validated).
    #[must_use]
    pub fn options(&self) -> &FadeOptions {
        &self.options
    }

    /// Render targets the factor is written to.
    #[must_use]
    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    /// Advance the effect by one frame and write the factor into
    /// `overrides` for every resolvable target.
    ///
    /// Runs after scene transforms are final for the frame. A missing
    /// viewer or the absence of any finite distance source freezes the
    /// current state: no filter step, no writes.
    pub fn update(
        &mut self,
        dt: f32,
        scene: &Scene,
        overrides: &mut OverrideTable,
    ) {
        let Some(viewer) = scene.viewer() else {
            return;
        };

        let Some(min_dist) = self.min_distance(scene, viewer) else {
            return;
        };

        let target_factor = self.raw_factor(min_dist);

        let new_factor = if self.options.smooth_time > 0.0 {
            self.damp.step(
                self.current_factor,
                target_factor,
                self.options.smooth_time,
                self.options.max_speed,
                dt,
            )
        } else {
            target_factor
        };
        self.current_factor = new_factor.clamp(0.0, 1.0);

        for &target in &self.targets {
            // Destroyed targets are skipped, not fatal.
            if scene.drawable(target).is_some() {
                overrides.set_scalar(
                    target,
                    &self.options.property,
                    self.current_factor,
                );
            }
        }
    }

    /// Minimum distance from `viewer` to the nearest proxy surface.
    ///
    /// Colliders win when any of them yields a finite distance; otherwise
    /// the targets' bounds stand in. `None` when neither source resolves.
    fn min_distance(&self, scene: &Scene, viewer: Vec3) -> Option<f32> {
        let mut min_dist = f32::INFINITY;

        for &id in &self.colliders {
            if let Some(collider) = scene.collider(id) {
                min_dist = min_dist.min(collider.distance(viewer));
            }
        }

        if !min_dist.is_finite() {
            for &id in &self.targets {
                if let Some(drawable) = scene.drawable(id) {
                    min_dist = min_dist.min(drawable.bounds.distance(viewer));
                }
            }
        }

        min_dist.is_finite().then_some(min_dist)
    }

    /// Spatial factor before temporal smoothing: 1 close, 0 far, cubic
    /// ease across the band.
    fn raw_factor(&self, min_dist: f32) -> f32 {
        let a = self.options.show_distance;
        let b = a + self.options.fade_band.max(MIN_FADE_BAND);
        let t = inverse_lerp(a, b, min_dist);
        1.0 - smoothstep01(t)
    }
}

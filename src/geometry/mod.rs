//! Spatial queries for fade proxies
//!
//! An [`Aabb`] answers nearest-point queries for the bounds fallback path;
//! a [`Collider`] answers exact nearest-point-on-surface queries for the
//! precise path.

mod collider;

use glam::Vec3;

pub use collider::Collider;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create from explicit corners. Components are swapped as needed so
    /// `min <= max` holds per axis.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create from a center point and half extents (absolute values used).
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        let half = half.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Box center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// The point on or inside the box closest to `point`.
    ///
    /// A point already inside the box maps to itself.
    #[inline]
    #[must_use]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Distance from `point` to the box (0 when inside).
    #[inline]
    #[must_use]
    pub fn distance(&self, point: Vec3) -> f32 {
        point.distance(self.closest_point(point))
    }

    /// Smallest box enclosing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

//! Collider shapes with exact nearest-surface queries.

use glam::Vec3;

use super::Aabb;

/// A convex collider supporting nearest-point queries.
///
/// Queries treat colliders as solid: a point inside the shape resolves to
/// itself, so its distance is 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    /// Solid sphere.
    Sphere {
        /// Center in world space.
        center: Vec3,
        /// Radius (absolute value used).
        radius: f32,
    },
    /// Solid capsule (segment swept by a sphere).
    Capsule {
        /// First segment endpoint.
        a: Vec3,
        /// Second segment endpoint.
        b: Vec3,
        /// Radius (absolute value used).
        radius: f32,
    },
    /// Solid axis-aligned box.
    Box(Aabb),
}

impl Collider {
    /// The point on or inside the collider closest to `point`.
    #[must_use]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        match *self {
            Self::Sphere { center, radius } => {
                closest_on_sphere(center, radius.abs(), point)
            }
            Self::Capsule { a, b, radius } => {
                let on_axis = closest_on_segment(a, b, point);
                closest_on_sphere(on_axis, radius.abs(), point)
            }
            Self::Box(aabb) => aabb.closest_point(point),
        }
    }

    /// Distance from `point` to the collider (0 when inside).
    #[inline]
    #[must_use]
    pub fn distance(&self, point: Vec3) -> f32 {
        point.distance(self.closest_point(point))
    }
}

/// Closest point of a solid sphere; interior points map to themselves.
fn closest_on_sphere(center: Vec3, radius: f32, point: Vec3) -> Vec3 {
    let offset = point - center;
    let dist = offset.length();
    if dist <= radius || dist <= f32::EPSILON {
        point
    } else {
        center + offset * (radius / dist)
    }
}

/// Closest point on the segment `ab` to `point`.
fn closest_on_segment(a: Vec3, b: Vec3, point: Vec3) -> Vec3 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return a; // degenerate segment
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

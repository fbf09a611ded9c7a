//! Sphere versus box collision test
//!
//! The marble is a sphere and obstacles are axis-aligned boxes, so contact
//! reduces to clamping the sphere center into the box and comparing squared
//! distances.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build a box from its center and half extents
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Closest point on or inside the box to `point`
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}

/// Check contact between a sphere and a box
///
/// Contact holds iff the squared distance from the box's closest point to the
/// sphere center is at most the squared radius. The boundary counts as
/// contact: a sphere exactly touching a face reports true.
pub fn sphere_aabb_contact(center: Vec3, radius: f32, aabb: &Aabb) -> bool {
    let closest = aabb.closest_point(center);
    closest.distance_squared(center) <= radius * radius
}

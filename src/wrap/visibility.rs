use bevy::prelude::*;

use crate::math::Aabb;

use super::bounds::ScreenBounds;

/// Position, heading and world-space extent of a wrapped object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedObject {
    pub position: Vec2,
    /// Radians about +Z.
    pub rotation: f32,
    pub scale: Vec2,
}

impl TrackedObject {
    pub fn new(position: Vec2, rotation: f32, scale: Vec2) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position.x, self.position.y, self.scale.x, self.scale.y)
    }

    pub fn corners(&self) -> [Vec2; 4] {
        self.aabb().corners()
    }
}

/// An object counts as visible when at least one of its four bounding-box
/// corners lies inside the closed screen rectangle.
///
/// This is corner containment, not rectangle intersection: an object larger
/// than the screen that covers it without any corner inside is reported as
/// not visible.
pub fn is_visible(object: &TrackedObject, bounds: &ScreenBounds) -> bool {
    object
        .corners()
        .iter()
        .any(|&corner| bounds.contains(corner))
}

use bevy::prelude::*;

use super::assets::ShipDefAsset;

/// Lower bound applied to `rotation_speed` and `move_speed`.
pub const MIN_SPEED: f32 = 1.0;

/// Ship handling parameters loaded from RON.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ShipConfig {
    /// Degrees per second.
    pub rotation_speed: f32,
    /// Thrust acceleration, world units per second squared.
    pub move_speed: f32,
    pub max_speed: f32,
    pub linear_damping: f32,
    pub width: f32,
    pub height: f32,
}

impl ShipConfig {
    pub fn from_def(def: &ShipDefAsset) -> Self {
        Self {
            rotation_speed: def.rotation_speed.max(MIN_SPEED),
            move_speed: def.move_speed.max(MIN_SPEED),
            max_speed: def.max_speed.max(MIN_SPEED),
            linear_damping: def.linear_damping.max(0.0),
            width: def.width,
            height: def.height,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

/// Asset loaded from ship.def.ron
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
pub struct ShipDefAsset {
    pub rotation_speed: f32,
    pub move_speed: f32,
    pub max_speed: f32,
    #[serde(default)]
    pub linear_damping: f32,
    pub width: f32,
    pub height: f32,
}

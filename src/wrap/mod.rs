pub mod bounds;
pub mod error;
pub mod ghost;
pub mod machine;
pub mod systems;
pub mod tracker;
pub mod visibility;

use bevy::prelude::*;

use crate::registry::AppState;
use crate::sets::GameSet;

pub use tracker::WrapTracker;

/// Marks one of the eight rendered ghost copies of the ship.
#[derive(Component, Debug, Clone, Copy)]
pub struct GhostShip {
    pub index: usize,
}

pub struct WrapPlugin;

impl Plugin for WrapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WrapTracker>()
            .add_systems(OnEnter(AppState::InGame), systems::init_screen_bounds)
            .add_systems(
                Update,
                (
                    systems::wrap_ship,
                    systems::sync_ghosts,
                    systems::log_screen_bounds,
                )
                    .chain()
                    .in_set(GameSet::Wrap)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

pub mod assets;
pub mod hot_reload;
pub mod loader;
pub mod loading;
pub mod ship;

use bevy::prelude::*;

use assets::ShipDefAsset;
use loader::RonLoader;

/// Application state: Loading waits for assets, InGame runs gameplay.
#[derive(States, Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    InGame,
}

/// Keeps loaded definition handles alive for hot-reload detection.
#[derive(Resource)]
pub struct RegistryHandles {
    pub ship: Handle<ShipDefAsset>,
}

pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_asset::<ShipDefAsset>()
            .register_asset_loader(RonLoader::<ShipDefAsset>::new(&["def.ron"]))
            .add_systems(Startup, loading::start_loading)
            .add_systems(
                Update,
                loading::check_loading.run_if(in_state(AppState::Loading)),
            )
            .add_systems(
                Update,
                hot_reload::hot_reload_ship.run_if(in_state(AppState::InGame)),
            );
    }
}

use bevy::prelude::*;

use super::assets::ShipDefAsset;
use super::ship::ShipConfig;
use super::{AppState, RegistryHandles};

pub const SHIP_DEF_PATH: &str = "data/ship.def.ron";

/// Handles for assets being loaded.
#[derive(Resource)]
pub(crate) struct LoadingAssets {
    ship: Handle<ShipDefAsset>,
}

pub(crate) fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let ship = asset_server.load::<ShipDefAsset>(SHIP_DEF_PATH);
    commands.insert_resource(LoadingAssets { ship });
}

pub(crate) fn check_loading(
    mut commands: Commands,
    loading: Res<LoadingAssets>,
    ship_assets: Res<Assets<ShipDefAsset>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(ship) = ship_assets.get(&loading.ship) else {
        return; // not loaded yet
    };

    let config = ShipConfig::from_def(ship);
    info!(
        "Ship definition loaded: rotation={}°/s, thrust={}, size={}x{}",
        config.rotation_speed, config.move_speed, config.width, config.height
    );
    commands.insert_resource(config);
    commands.insert_resource(RegistryHandles {
        ship: loading.ship.clone(),
    });
    commands.remove_resource::<LoadingAssets>();
    next_state.set(AppState::InGame);
    info!("All registry assets loaded, entering InGame state");
}

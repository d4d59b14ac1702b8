//! Hot-reload systems for registry assets.

use bevy::asset::AssetEvent;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::assets::ShipDefAsset;
use super::ship::ShipConfig;
use super::RegistryHandles;

pub(crate) fn hot_reload_ship(
    mut events: MessageReader<AssetEvent<ShipDefAsset>>,
    handles: Res<RegistryHandles>,
    assets: Res<Assets<ShipDefAsset>>,
    mut config: ResMut<ShipConfig>,
) {
    for event in events.read() {
        if let AssetEvent::Modified { id } = event
            && *id == handles.ship.id()
            && let Some(asset) = assets.get(&handles.ship)
        {
            *config = ShipConfig::from_def(asset);
            info!(
                "Hot-reloaded ShipConfig: rotation={}, thrust={}, size={}x{}",
                config.rotation_speed, config.move_speed, config.width, config.height
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixtures;

    fn reload_app(def: ShipDefAsset) -> (App, AssetId<ShipDefAsset>) {
        let mut app = fixtures::test_app();
        app.init_resource::<Assets<ShipDefAsset>>();
        app.add_message::<AssetEvent<ShipDefAsset>>();
        let ship = app
            .world_mut()
            .resource_mut::<Assets<ShipDefAsset>>()
            .add(def);
        let id = ship.id();
        app.insert_resource(RegistryHandles { ship });
        app.add_systems(Update, hot_reload_ship);
        (app, id)
    }

    fn slow_ship() -> ShipDefAsset {
        ShipDefAsset {
            rotation_speed: 90.0,
            move_speed: 0.5,
            max_speed: 200.0,
            linear_damping: 1.0,
            width: 12.0,
            height: 16.0,
        }
    }

    #[test]
    fn modified_ship_def_replaces_config() {
        let (mut app, id) = reload_app(slow_ship());
        app.world_mut().write_message(AssetEvent::Modified { id });
        app.update();

        let config = app.world().resource::<ShipConfig>();
        assert_eq!(config.rotation_speed, 90.0);
        assert_eq!(config.move_speed, 1.0);
        assert_eq!(config.size(), Vec2::new(12.0, 16.0));
    }

    #[test]
    fn other_asset_events_leave_config_alone() {
        let (mut app, id) = reload_app(slow_ship());
        app.world_mut().write_message(AssetEvent::Added { id });
        app.world_mut()
            .write_message(AssetEvent::<ShipDefAsset>::Modified {
                id: AssetId::default(),
            });
        app.update();

        assert_eq!(
            *app.world().resource::<ShipConfig>(),
            fixtures::test_ship_config()
        );
    }
}

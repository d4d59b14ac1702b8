pub mod fixtures {
    use bevy::prelude::*;

    use crate::registry::ship::ShipConfig;
    use crate::ship::controls::ShipControls;
    use crate::wrap::bounds::ScreenBounds;
    use crate::wrap::WrapTracker;

    /// A 100 x 100 playfield centred on the origin.
    pub fn test_bounds() -> ScreenBounds {
        ScreenBounds::new(Vec2::new(-50.0, -50.0), 100.0, 100.0).unwrap()
    }

    pub fn test_ship_config() -> ShipConfig {
        ShipConfig {
            rotation_speed: 180.0,
            move_speed: 300.0,
            max_speed: 600.0,
            linear_damping: 0.3,
            width: 24.0,
            height: 32.0,
        }
    }

    /// Create a minimal Bevy App with the ship and wrap resources for system tests.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(test_ship_config());
        app.insert_resource(WrapTracker::new(test_bounds()));
        app.init_resource::<ShipControls>();
        app
    }
}

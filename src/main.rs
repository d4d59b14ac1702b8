mod camera;
mod math;
mod registry;
mod sets;
mod ship;
#[cfg(test)]
mod test_helpers;
mod ui;
mod wrap;

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(ImagePlugin::default_nearest())
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Wraparound".into(),
                    resolution: (1280, 720).into(),
                    // Wrap bounds are measured once; the playfield must not resize.
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
    )
    .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.05)))
    .add_plugins(EguiPlugin::default())
    .add_plugins(FrameTimeDiagnosticsPlugin::default())
    .add_plugins(registry::RegistryPlugin)
    .add_plugins(camera::CameraPlugin)
    .add_plugins(ship::ShipPlugin)
    .add_plugins(wrap::WrapPlugin)
    .add_plugins(ui::UiPlugin);
    sets::configure_game_sets(&mut app);
    app.run();
}

use bevy::prelude::*;

/// Orthographic scale of the fixed playfield camera. The wrap bounds are
/// derived from it, so it must not change after startup.
pub const CAMERA_SCALE: f32 = 1.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera);
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        Transform::default(),
    ));
}

pub mod controls;
pub mod movement;

use bevy::prelude::*;
use bevy::sprite_render::{ColorMaterial, MeshMaterial2d};

use crate::registry::ship::ShipConfig;
use crate::registry::AppState;
use crate::sets::GameSet;
use crate::wrap::ghost::GHOST_COUNT;
use crate::wrap::GhostShip;

use controls::ShipControls;

pub const MAX_DELTA_SECS: f32 = 1.0 / 20.0;

const SHIP_Z: f32 = 1.0;
const SHIP_COLOR: Color = Color::srgb(0.85, 0.9, 1.0);

/// The player-controlled primary ship.
#[derive(Component)]
pub struct Ship;

#[derive(Component, Default, Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

pub struct ShipPlugin;

impl Plugin for ShipPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShipControls>()
            .add_systems(OnEnter(AppState::InGame), spawn_ship)
            .add_systems(
                Update,
                (controls::read_ship_controls, movement::apply_ship_controls)
                    .chain()
                    .in_set(GameSet::Input)
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(
                Update,
                (
                    movement::sync_ship_scale.run_if(resource_changed::<ShipConfig>),
                    movement::integrate_velocity,
                )
                    .chain()
                    .in_set(GameSet::Physics)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

/// Spawn the ship at the origin plus its eight ghosts.
///
/// The mesh is a unit triangle; the transform's scale carries the ship's
/// size so the wrap tracker can read the extent straight from the transform.
fn spawn_ship(
    mut commands: Commands,
    ship_config: Res<ShipConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let mesh = meshes.add(Triangle2d::new(
        Vec2::new(0.0, 0.5),
        Vec2::new(-0.5, -0.5),
        Vec2::new(0.5, -0.5),
    ));
    let material = materials.add(SHIP_COLOR);
    let transform =
        Transform::from_xyz(0.0, 0.0, SHIP_Z).with_scale(ship_config.size().extend(1.0));

    commands.spawn((
        Ship,
        Velocity::default(),
        Mesh2d(mesh.clone()),
        MeshMaterial2d(material.clone()),
        transform,
    ));
    for index in 0..GHOST_COUNT {
        commands.spawn((
            GhostShip { index },
            Mesh2d(mesh.clone()),
            MeshMaterial2d(material.clone()),
            transform,
        ));
    }
}

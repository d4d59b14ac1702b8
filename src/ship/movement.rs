use bevy::prelude::*;

use crate::registry::ship::ShipConfig;
use crate::ship::controls::ShipControls;
use crate::ship::{Ship, Velocity, MAX_DELTA_SECS};

/// Rotate the ship and accelerate it along its nose for one frame of `dt`.
pub fn apply_controls(
    controls: &ShipControls,
    config: &ShipConfig,
    dt: f32,
    transform: &mut Transform,
    velocity: &mut Velocity,
) {
    let turn = controls.rotation_axis();
    if turn != 0.0 {
        transform.rotate_z(turn * config.rotation_speed.to_radians() * dt);
    }

    let thrust = controls.thrust_axis();
    if thrust != 0.0 {
        let forward = transform.up().truncate();
        velocity.0 += forward * thrust * config.move_speed * dt;
    }
}

/// Advance position by velocity, applying damping and the speed cap first.
pub fn step_velocity(
    config: &ShipConfig,
    dt: f32,
    transform: &mut Transform,
    velocity: &mut Velocity,
) {
    velocity.0 /= 1.0 + config.linear_damping * dt;
    velocity.0 = velocity.0.clamp_length_max(config.max_speed);
    transform.translation += velocity.0.extend(0.0) * dt;
}

pub fn apply_ship_controls(
    time: Res<Time>,
    controls: Res<ShipControls>,
    ship_config: Res<ShipConfig>,
    mut query: Query<(&mut Transform, &mut Velocity), With<Ship>>,
) {
    let dt = time.delta_secs().min(MAX_DELTA_SECS);
    for (mut transform, mut velocity) in &mut query {
        apply_controls(&controls, &ship_config, dt, &mut transform, &mut velocity);
    }
}

pub fn integrate_velocity(
    time: Res<Time>,
    ship_config: Res<ShipConfig>,
    mut query: Query<(&mut Transform, &mut Velocity), With<Ship>>,
) {
    let dt = time.delta_secs().min(MAX_DELTA_SECS);
    for (mut transform, mut velocity) in &mut query {
        step_velocity(&ship_config, dt, &mut transform, &mut velocity);
    }
}

/// Keep the ship's scale in line with the configured size (hot reload).
pub fn sync_ship_scale(ship_config: Res<ShipConfig>, mut query: Query<&mut Transform, With<Ship>>) {
    for mut transform in &mut query {
        transform.scale = ship_config.size().extend(1.0);
    }
}

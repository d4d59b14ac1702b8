use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::ship::controls::ShipControls;
use crate::ship::Ship;

use super::bounds::{viewport_corners, ScreenBounds};
use super::error::WrapError;
use super::tracker::{TickOutcome, WrapTracker};
use super::visibility::TrackedObject;
use super::GhostShip;

/// Snapshot of a transform as seen by the wrap tracker. The transform's
/// scale doubles as the object's world-space extent.
pub fn tracked_object(transform: &Transform) -> TrackedObject {
    let (_, _, angle) = transform.rotation.to_euler(EulerRot::XYZ);
    TrackedObject::new(
        transform.translation.truncate(),
        angle,
        transform.scale.truncate(),
    )
}

/// Build the screen bounds from the fixed camera and arm the tracker.
pub fn init_screen_bounds(
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform, &Projection), With<Camera2d>>,
    mut tracker: ResMut<WrapTracker>,
) -> Result {
    let window = windows.single()?;
    let (camera, camera_transform, projection) = camera_query.single()?;

    // Until the camera has rendered once it has no computed viewport and
    // fills the primary window.
    let viewport_size = camera
        .logical_viewport_size()
        .unwrap_or_else(|| window.size());
    let (bottom_left, top_right) = viewport_corners(projection, camera_transform, viewport_size)?;
    let bounds = ScreenBounds::from_viewport_corners(bottom_left, top_right)?;

    info!(
        "Screen bounds initialised: origin {}, size {} x {}",
        bounds.origin(),
        bounds.width(),
        bounds.height()
    );
    *tracker = WrapTracker::new(bounds);
    Ok(())
}

/// Run one tracker tick against the ship and apply any swap.
pub fn wrap_ship(
    mut tracker: ResMut<WrapTracker>,
    mut ship_query: Query<&mut Transform, With<Ship>>,
) -> Result {
    let mut transform = ship_query
        .single_mut()
        .map_err(|_| WrapError::MissingPrimary)?;
    let mut primary = tracked_object(&transform);

    if let TickOutcome::Swapped {
        ghost_index,
        from,
        to,
    } = tracker.tick(&mut primary)?
    {
        debug!("Ship wrapped via ghost {ghost_index}: {from} -> {to}");
        transform.translation.x = to.x;
        transform.translation.y = to.y;
    }
    Ok(())
}

/// Move the rendered ghosts to where the tracker placed them this tick.
pub fn sync_ghosts(
    tracker: Res<WrapTracker>,
    mut ghost_query: Query<(&GhostShip, &mut Transform), Without<Ship>>,
) {
    let Some(ghosts) = tracker.ghosts() else {
        return;
    };
    for (ghost, mut transform) in &mut ghost_query {
        let placed = &ghosts[ghost.index];
        transform.translation.x = placed.position().x;
        transform.translation.y = placed.position().y;
        transform.rotation = Quat::from_rotation_z(placed.object.rotation);
        transform.scale = placed.object.scale.extend(1.0);
    }
}

pub fn log_screen_bounds(controls: Res<ShipControls>, tracker: Res<WrapTracker>) -> Result {
    if !controls.log_requested {
        return Ok(());
    }
    let bounds = tracker.bounds()?;
    info!(
        "Screen bounds origin: {}, max: {}",
        bounds.origin(),
        bounds.max()
    );
    Ok(())
}

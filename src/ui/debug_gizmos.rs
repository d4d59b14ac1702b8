use bevy::prelude::*;

use crate::ship::Ship;
use crate::wrap::visibility::TrackedObject;
use crate::wrap::WrapTracker;

const BOUNDS_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
const GHOST_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
const HIDDEN_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);

/// The two diagonals of an object's bounding box.
pub fn bounding_cross(object: &TrackedObject) -> [(Vec2, Vec2); 2] {
    let [bottom_left, top_right, bottom_right, top_left] = object.corners();
    [(bottom_left, top_right), (bottom_right, top_left)]
}

/// Screen bounds in green, ghosts as red crosses, and a yellow ring around
/// the ship while it is off screen.
pub fn draw_wrap_gizmos(
    mut gizmos: Gizmos,
    tracker: Res<WrapTracker>,
    ship_query: Query<&Transform, With<Ship>>,
) {
    let Ok(bounds) = tracker.bounds() else {
        return;
    };

    let corners = bounds.corners();
    for i in 0..corners.len() {
        gizmos.line_2d(corners[i], corners[(i + 1) % corners.len()], BOUNDS_COLOR);
    }

    if let Some(ghosts) = tracker.ghosts() {
        for ghost in ghosts {
            for (a, b) in bounding_cross(&ghost.object) {
                gizmos.line_2d(a, b, GHOST_COLOR);
            }
        }
    }

    if tracker.primary_visible() {
        return;
    }
    if let Ok(ship_tf) = ship_query.single() {
        gizmos.circle_2d(
            ship_tf.translation.truncate(),
            ship_tf.scale.y,
            HIDDEN_COLOR,
        );
    }
}

use bevy::prelude::*;

use super::bounds::ScreenBounds;
use super::visibility::TrackedObject;

pub const GHOST_COUNT: usize = 8;

/// Screen-size multiples for each ghost, in scan order: right, bottom-right,
/// bottom, bottom-left, left, top-left, top, top-right.
pub const GHOST_OFFSET_SIGNS: [(i8, i8); GHOST_COUNT] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Shadow copy of the primary at one toroidal offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ghost {
    pub index: usize,
    pub offset: Vec2,
    pub object: TrackedObject,
}

impl Ghost {
    pub fn position(&self) -> Vec2 {
        self.object.position
    }
}

pub fn ghost_offset(index: usize, bounds: &ScreenBounds) -> Vec2 {
    let (sx, sy) = GHOST_OFFSET_SIGNS[index];
    Vec2::new(sx as f32 * bounds.width(), sy as f32 * bounds.height())
}

/// Place all eight ghosts around `primary`. Rotation and scale are copied.
pub fn position_ghosts(primary: &TrackedObject, bounds: &ScreenBounds) -> [Ghost; GHOST_COUNT] {
    std::array::from_fn(|index| {
        let offset = ghost_offset(index, bounds);
        Ghost {
            index,
            offset,
            object: TrackedObject {
                position: primary.position + offset,
                ..*primary
            },
        }
    })
}

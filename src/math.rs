use bevy::math::Vec2;

/// Axis-aligned bounding box used for corner-based visibility tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Aabb {
    pub fn from_center(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min_x: x - w / 2.0,
            max_x: x + w / 2.0,
            min_y: y - h / 2.0,
            max_y: y + h / 2.0,
        }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min_x: min.x,
            max_x: min.x + size.x,
            min_y: min.y,
            max_y: min.y + size.y,
        }
    }

    /// Corners in the order bottom-left, top-right, bottom-right, top-left.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.min_x, self.min_y),
            Vec2::new(self.max_x, self.max_y),
            Vec2::new(self.max_x, self.min_y),
            Vec2::new(self.min_x, self.max_y),
        ]
    }

    /// Closed-rectangle containment: points on any edge count as inside.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

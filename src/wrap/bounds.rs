use bevy::camera::CameraProjection;
use bevy::prelude::*;

use crate::math::Aabb;

use super::error::WrapError;

/// The camera's visible area in world space. Fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    origin: Vec2,
    width: f32,
    height: f32,
}

impl ScreenBounds {
    pub fn new(origin: Vec2, width: f32, height: f32) -> Result<Self, WrapError> {
        let valid = origin.is_finite()
            && width.is_finite()
            && height.is_finite()
            && width > 0.0
            && height > 0.0;
        if !valid {
            return Err(WrapError::InvalidBounds { width, height });
        }
        Ok(Self {
            origin,
            width,
            height,
        })
    }

    /// Build from the world-space positions of the viewport's bottom-left
    /// (viewport 0,0) and top-right (viewport 1,1) corners.
    pub fn from_viewport_corners(bottom_left: Vec2, top_right: Vec2) -> Result<Self, WrapError> {
        let size = top_right - bottom_left;
        Self::new(bottom_left, size.x, size.y)
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn min(&self) -> Vec2 {
        self.origin
    }

    pub fn max(&self) -> Vec2 {
        self.origin + self.size()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.aabb().contains_point(point)
    }

    /// Corners in drawing order: bottom-left, top-left, top-right, bottom-right.
    pub fn corners(&self) -> [Vec2; 4] {
        let (min, max) = (self.min(), self.max());
        [
            min,
            Vec2::new(min.x, max.y),
            max,
            Vec2::new(max.x, min.y),
        ]
    }

    fn aabb(&self) -> Aabb {
        Aabb::from_min_size(self.origin, self.size())
    }
}

/// World-space positions of the viewport's bottom-left and top-right corners
/// for a camera at `camera_transform` drawing into `viewport_size` logical
/// pixels. The projection is laid out exactly as the renderer lays out the
/// frame.
pub fn viewport_corners(
    projection: &Projection,
    camera_transform: &GlobalTransform,
    viewport_size: Vec2,
) -> Result<(Vec2, Vec2), WrapError> {
    let Projection::Orthographic(ortho) = projection else {
        return Err(WrapError::UnsupportedProjection);
    };
    let mut ortho = ortho.clone();
    ortho.update(viewport_size.x, viewport_size.y);

    let bottom_left = camera_transform.transform_point(ortho.area.min.extend(0.0));
    let top_right = camera_transform.transform_point(ortho.area.max.extend(0.0));
    Ok((bottom_left.truncate(), top_right.truncate()))
}

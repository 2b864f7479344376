//! Screen-rectangle mapping for pointer-driven surfaces

use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

/// Maps a screen-space pointer position onto a canvas displayed inside a
/// rectangle.
///
/// `screen_to_local` carries the camera/projection used to pick the
/// point, reduced to an affine transform from screen space into the
/// rectangle's local space. The rectangle is given by its local-space
/// minimum corner and size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenRectMapper {
    pub screen_to_local: Affine2,
    pub rect_min: Vec2,
    pub rect_size: Vec2,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl ScreenRectMapper {
    /// Map a screen point to a canvas pixel coordinate, or `None` if it
    /// falls outside the display rectangle.
    pub fn map(&self, screen_point: Vec2) -> Option<Vec2> {
        if self.rect_size.x <= 0.0 || self.rect_size.y <= 0.0 {
            return None;
        }

        let local = self.screen_to_local.transform_point2(screen_point);
        let uv = (local - self.rect_min) / self.rect_size;

        if !(0.0..=1.0).contains(&uv.x) || !(0.0..=1.0).contains(&uv.y) {
            return None;
        }

        Some(Vec2::new(
            uv.x * self.canvas_width as f32,
            uv.y * self.canvas_height as f32,
        ))
    }
}

//! Rasterization primitives - dabs and dab-stamped lines
//!
//! All writes are clipped to the canvas rectangle before iteration; no
//! input coordinate or radius can produce an out-of-bounds access.

use glam::Vec2;

use crate::brush::BrushMode;
use crate::canvas::blend::blend_over;
use crate::canvas::{Canvas, Rgba};

/// A dirty rectangle in pixel coordinates, half-open on right/bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn empty() -> Self {
        Self {
            left: i32::MAX,
            top: i32::MAX,
            right: i32::MIN,
            bottom: i32::MIN,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    pub fn union(&mut self, other: &Rect) {
        if other.is_empty() {
            return;
        }
        self.left = self.left.min(other.left);
        self.top = self.top.min(other.top);
        self.right = self.right.max(other.right);
        self.bottom = self.bottom.max(other.bottom);
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::empty()
    }
}

/// Stamp one filled-circle brush impression centered at `center`.
///
/// Pixels with squared distance to the center at most `radius^2` are
/// touched. Returns the clipped dirty rectangle (empty if the dab lies
/// entirely off-canvas).
pub fn fill_dab(
    canvas: &mut Canvas,
    center: Vec2,
    radius: f32,
    color: Rgba,
    mode: BrushMode,
) -> Rect {
    let radius = radius.max(1.0);
    let width = canvas.width() as i32;
    let height = canvas.height() as i32;

    let cx = center.x.floor() as i32;
    let cy = center.y.floor() as i32;
    let r = radius.ceil() as i32;

    let start_x = (cx - r).max(0);
    let end_x = (cx + r + 1).min(width);
    let start_y = (cy - r).max(0);
    let end_y = (cy + r + 1).min(height);

    if start_x >= end_x || start_y >= end_y {
        return Rect::empty();
    }

    let r_sq = radius * radius;
    let stride = width as usize;
    let pixels = canvas.pixels_mut();

    for y in start_y..end_y {
        let row = y as usize * stride;
        for x in start_x..end_x {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            if dx * dx + dy * dy <= r_sq {
                let idx = row + x as usize;
                pixels[idx] = match mode {
                    BrushMode::Draw => blend_over(pixels[idx], color),
                    BrushMode::Erase => Rgba::TRANSPARENT,
                };
            }
        }
    }

    Rect {
        left: start_x,
        top: start_y,
        right: end_x,
        bottom: end_y,
    }
}

/// Connect two points with a Bresenham walk, stamping a dab at every
/// step so fast strokes leave no gaps.
pub fn stamp_line(
    canvas: &mut Canvas,
    from: Vec2,
    to: Vec2,
    radius: f32,
    color: Rgba,
    mode: BrushMode,
) -> Rect {
    let mut x0 = from.x.floor() as i32;
    let mut y0 = from.y.floor() as i32;
    let x1 = to.x.floor() as i32;
    let y1 = to.y.floor() as i32;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut dirty = Rect::empty();
    loop {
        let dab = fill_dab(canvas, Vec2::new(x0 as f32, y0 as f32), radius, color, mode);
        dirty.union(&dab);

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
    dirty
}

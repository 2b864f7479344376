//! Canvas module - the persistent pixel store backing a painting surface

pub mod blend;
mod history;

pub use history::HistoryStack;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// An RGBA color sample with components in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    /// Transparent white, the background the original board clears to
    pub const CLEAR_WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to 8-bit channels for display or export
    pub fn to_u8_array(self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    pub fn from_u8_array(c: [u8; 4]) -> Self {
        Self {
            r: c[0] as f32 / 255.0,
            g: c[1] as f32 / 255.0,
            b: c[2] as f32 / 255.0,
            a: c[3] as f32 / 255.0,
        }
    }
}

/// The authoritative pixel buffer for one painting surface.
///
/// Dimensions are fixed at construction; the buffer length is always
/// `width * height`. One engine instance exclusively owns its canvas.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Create a canvas filled with transparent pixels
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        Self::with_background(width, height, Rgba::TRANSPARENT)
    }

    /// Create a canvas filled with the given background color
    pub fn with_background(width: u32, height: u32, background: Rgba) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidCanvasSize { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(EngineError::CanvasAllocation { width, height })?;

        Ok(Self {
            width,
            height,
            pixels: vec![background; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flat index for a pixel known to be in bounds
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Read a pixel, or `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Direct read access to the pixel buffer
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Mutable access for the rasterizer
    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Overwrite every pixel with one color
    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Deep copy of the current buffer, for the history stack
    pub fn snapshot(&self) -> Vec<Rgba> {
        self.pixels.clone()
    }

    /// Overwrite the buffer from a snapshot of matching length
    pub fn restore(&mut self, snapshot: &[Rgba]) {
        debug_assert_eq!(snapshot.len(), self.pixels.len());
        self.pixels.copy_from_slice(snapshot);
    }

    /// Convert to an 8-bit RGBA image for display or export
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut img = image::RgbaImage::new(self.width, self.height);
        for (i, px) in self.pixels.iter().enumerate() {
            let x = (i % self.width as usize) as u32;
            let y = (i / self.width as usize) as u32;
            img.put_pixel(x, y, image::Rgba(px.to_u8_array()));
        }
        img
    }

    /// Export the canvas as a PNG file
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), EngineError> {
        self.to_rgba_image().save(path.as_ref())?;
        Ok(())
    }
}

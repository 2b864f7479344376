//! Brush configuration types

use serde::{Deserialize, Serialize};

use crate::canvas::Rgba;

/// Painting mode for the brush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrushMode {
    /// Composite the brush color over existing pixels
    #[default]
    Draw,
    /// Clear covered pixels to fully transparent
    Erase,
}

/// Brush settings, read once per dab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrushSettings {
    /// Brush radius in pixels, clamped to at least 1.0
    pub radius: f32,
    /// RGBA brush color
    pub color: Rgba,
    /// Draw or erase
    pub mode: BrushMode,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            radius: 10.0,
            color: Rgba::BLACK,
            mode: BrushMode::Draw,
        }
    }
}

impl BrushSettings {
    /// Radius guarded against zero-pixel dabs
    pub fn effective_radius(&self) -> f32 {
        self.radius.max(1.0)
    }
}

/// Stroke smoothing parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingSettings {
    /// Samples closer than this to the previous accepted sample are dropped
    pub min_point_distance: f32,
    /// Sub-steps per spline segment; higher is smoother
    pub subdivisions: u32,
}

impl Default for SmoothingSettings {
    fn default() -> Self {
        Self {
            min_point_distance: 1.5,
            subdivisions: 10,
        }
    }
}

//! Easel - raster painting engine with spline-smoothed strokes
//!
//! A pointer (or a 3D stylus resolved through a surface hit) drives a
//! begin/continue/end stroke state machine; samples are smoothed with
//! Catmull-Rom splines and rasterized as alpha-composited brush dabs
//! into a persistent pixel buffer with snapshot-based undo.

pub mod brush;
pub mod canvas;
pub mod engine;
pub mod errors;
pub mod input;
pub mod mapper;
pub mod raster;
pub mod spline;

pub use brush::{BrushMode, BrushSettings, SmoothingSettings};
pub use canvas::{Canvas, HistoryStack, Rgba};
pub use engine::PaintEngine;
pub use errors::EngineError;
pub use input::{ContactTracker, StrokeEvent};
pub use mapper::{ScreenRectMapper, SurfaceMapper, SurfaceMesh};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for binaries and examples embedding the engine
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "easel=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

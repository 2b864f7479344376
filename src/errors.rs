use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("canvas allocation failed for {width}x{height}")]
    CanvasAllocation { width: u32, height: u32 },

    #[error("image export error: {0}")]
    ImageExport(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for blobcrop-label

use thiserror::Error;

/// Errors that can occur during labeling and extraction
#[derive(Debug, Error)]
pub enum LabelError {
    /// Core raster error
    #[error("core error: {0}")]
    Core(#[from] blobcrop_core::Error),

    /// Grid coordinate outside the label grid
    #[error("grid cell out of bounds: ({x}, {y}) in {width}x{height} grid")]
    GridOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type for labeling operations
pub type LabelResult<T> = Result<T, LabelError>;

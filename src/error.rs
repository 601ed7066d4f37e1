//! Editor errors.

use crate::geometry::Point;

/// Errors surfaced by the editing core.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Palette size must be at least 1 (got {size})")]
    DegeneratePalette { size: usize },

    #[error("Image must be at least 1x1 (got {width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Point {point} is outside the {width}x{height} image")]
    OutOfBounds {
        point: Point,
        width: u32,
        height: u32,
    },

    #[error("Failed to save {identifier}")]
    SaveFailure {
        identifier: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

//! Image file collaborator: loading, blank creation and saving.
//!
//! Files are decoded with whatever formats the `image` crate was built with
//! and converted to RGBA8. Saving always writes PNG, whatever the extension.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use thiserror::Error;
use tracing::{debug, info};

use crate::color::Color;

/// Errors from reading, writing or describing image files.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not encode or decode {}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid resolution '{0}': expected WIDTH,HEIGHT with both at least 1")]
    InvalidResolution(String),
}

/// Decode `path` into an RGBA image.
pub fn load(path: &Path) -> Result<RgbaImage, CodecError> {
    let image = image::open(path).map_err(|source| image_error(path, source))?;
    let rgba = image.to_rgba8();
    info!(path = %path.display(), width = rgba.width(), height = rgba.height(), "loaded image");
    Ok(rgba)
}

/// A `width` x `height` image filled with `fill`.
pub fn create_blank(width: u32, height: u32, fill: Color) -> RgbaImage {
    debug!(width, height, "creating blank image");
    RgbaImage::from_pixel(width, height, fill)
}

/// Parse `W,H` (or `WxH`) into a non-zero resolution.
pub fn parse_resolution(input: &str) -> Result<(u32, u32), CodecError> {
    let invalid = || CodecError::InvalidResolution(input.to_string());
    let (w, h) = input
        .split_once(',')
        .or_else(|| input.split_once(['x', 'X']))
        .ok_or_else(invalid)?;
    let width: u32 = w.trim().parse().map_err(|_| invalid())?;
    let height: u32 = h.trim().parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}

/// Encode `image` as PNG at `path`.
pub fn save(path: &Path, image: &RgbaImage) -> Result<(), CodecError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| image_error(path, source))?;
    info!(path = %path.display(), "saved image");
    Ok(())
}

fn image_error(path: &Path, source: image::ImageError) -> CodecError {
    match source {
        image::ImageError::IoError(source) => CodecError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => CodecError::Image {
            path: path.to_path_buf(),
            source,
        },
    }
}

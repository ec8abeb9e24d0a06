//! Image file I/O — thin wrappers over the `image` crate.
//!
//! Decoding and encoding are fully delegated; this module only maps the
//! failures into the crate's taxonomy: missing or unreadable files surface
//! as [`CodecError::Io`], undecodable bytes as [`CodecError::Decode`],
//! unwritable or unsupported outputs as [`CodecError::Encode`]. No recovery
//! is attempted — errors propagate unchanged to the caller.
//!
//! Compiled-in formats: png, jpeg, bmp, tiff, webp (explicit feature list
//! in Cargo.toml, no default decoders).

use crate::bitmap::BinaryImage;
use image::{DynamicImage, ImageError, ImageReader};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode {path}: {message}")]
    Decode { path: String, message: String },
    #[error("failed to encode {path}: {message}")]
    Encode { path: String, message: String },
}

/// Decode an image file into an in-memory multi-channel image.
pub fn load(path: &Path) -> Result<DynamicImage, CodecError> {
    ImageReader::open(path)
        .map_err(CodecError::Io)?
        .decode()
        .map_err(|e| match e {
            ImageError::IoError(io) => CodecError::Io(io),
            other => CodecError::Decode {
                path: path.display().to_string(),
                message: other.to_string(),
            },
        })
}

/// Encode a binary image and write it, format inferred from the extension.
///
/// The bitmap is exported as 8-bit luma (on = 255, off = 0) — every format
/// in the compiled-in set can represent that losslessly except jpeg, which
/// is accepted but lossy.
pub fn save(bitmap: &BinaryImage, path: &Path) -> Result<(), CodecError> {
    bitmap.to_luma8().save(path).map_err(|e| match e {
        ImageError::IoError(io) => CodecError::Io(io),
        other => CodecError::Encode {
            path: path.display().to_string(),
            message: other.to_string(),
        },
    })
}

//! Errors surfaced by the image codec adapter.
//!
//! The fill itself cannot fail; everything here comes from opening,
//! decoding, resizing or writing files.

use image::{ImageError, ImageFormat};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open image `{}`", .0.display())]
    Open(PathBuf, #[source] ImageError),

    #[error("failed to save image `{}`", .0.display())]
    Save(PathBuf, #[source] ImageError),

    #[error("IO error when creating `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{}` would be written as {format:?}, which cannot keep transparency; use .png or .webp", .path.display())]
    UnsupportedOutput { path: PathBuf, format: ImageFormat },

    #[error("invalid target size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;

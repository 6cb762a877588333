//! I/O helpers around the `image` codec.
//!
//! - `load_image` / `load_rgba`: decode any supported file
//! - `save_rgba`: write an RGBA buffer to a format that keeps alpha
//! - `save_image`: write an image in whatever format the extension names
//! - `rescale`: nearest-neighbour resize
use crate::error::{Error, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};
use log::debug;
use std::fs;
use std::path::Path;

/// Decode an image from disk.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| Error::Open(path.to_path_buf(), e))
}

/// Decode an image from disk and convert it to 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = load_image(path)?;
    debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.into_rgba8())
}

/// Pick the output format for an RGBA image.
///
/// A missing or unrecognised extension falls back to PNG. Recognised
/// formats this build cannot write with an alpha channel are rejected.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    match ImageFormat::from_path(path) {
        Ok(ImageFormat::Png) | Err(_) => Ok(ImageFormat::Png),
        Ok(ImageFormat::WebP) => Ok(ImageFormat::WebP),
        Ok(format) => Err(Error::UnsupportedOutput {
            path: path.to_path_buf(),
            format,
        }),
    }
}

/// Save an RGBA image, creating parent directories.
pub fn save_rgba(image: &RgbaImage, path: &Path) -> Result<()> {
    let format = output_format(path)?;
    ensure_parent_dir(path)?;
    debug!("writing {} as {:?}", path.display(), format);
    image
        .save_with_format(path, format)
        .map_err(|e| Error::Save(path.to_path_buf(), e))
}

/// Save an image using the format implied by the extension.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| Error::Save(path.to_path_buf(), e))
}

/// Resize to exactly `width` x `height` with nearest-neighbour sampling.
pub fn rescale(image: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidSize { width, height });
    }
    Ok(image.resize_exact(width, height, FilterType::Nearest))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::Io(parent.to_path_buf(), e))?;
        }
    }
    Ok(())
}

//! File-level operations: load, process, save.
//!
//! Loading always completes before any pixel is touched, and nothing is
//! written unless processing finished; a failure at any step propagates to
//! the caller.

use std::path::Path;

use image::RgbaImage;
use log::{debug, info};

use crate::error::Result;
use crate::filters::transparency::clear_matching_rgba;
use crate::io::{load_image, load_rgba, rescale, save_image, save_rgba};
use crate::selection::background::{fill_background_detailed, DEFAULT_THRESHOLD};

/// Which pixels are eligible for clearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// Only background connected to the image border
    #[default]
    Flood,
    /// Every background-colored pixel, enclosed or not
    Global,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearOptions {
    pub threshold: u8,
    pub mode: Mode,
}

impl Default for ClearOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            mode: Mode::Flood,
        }
    }
}

impl ClearOptions {
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

/// What `clear_background_file` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearSummary {
    pub width: u32,
    pub height: u32,
    pub cleared: usize,
}

/// Clear the background of a decoded image in place.
///
/// # Returns
/// Number of pixels made transparent
pub fn clear_background(image: &mut RgbaImage, options: &ClearOptions) -> usize {
    match options.mode {
        Mode::Flood => {
            let report = fill_background_detailed(image, options.threshold);
            debug!(
                "flood fill: cleared={} walls={} bounds={:?}",
                report.cleared, report.walls, report.bounds
            );
            report.cleared
        }
        Mode::Global => clear_matching_rgba(image, options.threshold),
    }
}

/// Load `src`, clear its background and write the result to `dst`.
pub fn clear_background_file(
    src: &Path,
    dst: &Path,
    options: &ClearOptions,
) -> Result<ClearSummary> {
    let mut image = load_rgba(src)?;
    let cleared = clear_background(&mut image, options);
    save_rgba(&image, dst)?;

    let (width, height) = image.dimensions();
    info!(
        "{} -> {}: {} of {} pixels made transparent (threshold {}, {:?})",
        src.display(),
        dst.display(),
        cleared,
        width as usize * height as usize,
        options.threshold,
        options.mode
    );

    Ok(ClearSummary {
        width,
        height,
        cleared,
    })
}

/// Resize `src` to `width` x `height` (nearest neighbour) and save it to `dst`.
pub fn rescale_file(src: &Path, dst: &Path, width: u32, height: u32) -> Result<()> {
    let image = load_image(src)?;
    let (from_w, from_h) = (image.width(), image.height());
    let resized = rescale(&image, width, height)?;
    save_image(&resized, dst)?;

    info!(
        "{} -> {}: {}x{} -> {}x{}",
        src.display(),
        dst.display(),
        from_w,
        from_h,
        width,
        height
    );
    Ok(())
}

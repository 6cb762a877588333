//! WebAssembly exports for background removal.
//!
//! These functions are exposed to JavaScript via wasm-bindgen and work on
//! flat RGBA byte arrays (length = width * height * 4), as produced by
//! `CanvasRenderingContext2D.getImageData`.

use wasm_bindgen::prelude::*;

use crate::buffer::RgbaBuffer;
use crate::filters::transparency::clear_matching_rgba;
use crate::selection::background::fill_background;

// ============================================================================
// Flood fill (border-connected background)
// ============================================================================

/// Make the border-connected near-white background transparent.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `threshold` - R, G and B must all exceed this value
///
/// # Returns
/// Flat array of RGBA bytes with the background cleared
#[wasm_bindgen]
pub fn remove_background_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    threshold: u8,
) -> Vec<u8> {
    let mut buffer = RgbaBuffer::from_raw(width, height, data.to_vec())
        .expect("Invalid dimensions");

    fill_background(&mut buffer, threshold);
    buffer.into_raw()
}

// ============================================================================
// Global (every background-colored pixel)
// ============================================================================

/// Make every near-white pixel transparent, enclosed or not.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `threshold` - R, G and B must all exceed this value
#[wasm_bindgen]
pub fn remove_background_global_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    threshold: u8,
) -> Vec<u8> {
    let mut output = RgbaBuffer::from_raw(width, height, data.to_vec())
        .expect("Invalid dimensions")
        .into_raw();

    clear_matching_rgba(&mut output, threshold);
    output
}

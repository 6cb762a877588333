//! Global background transparency.
//!
//! Clears every background-colored pixel regardless of connectivity. Unlike
//! [`crate::selection::background`], this also hollows out enclosed
//! near-white regions; it is the cheap per-pixel variant.
//!
//! ## Supported Formats
//!
//! - **RGBA**: (height, width, 4) - matching pixels become `(255, 255, 255, 0)`
//! - Other channel counts are returned unchanged (nothing to make transparent)

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

use crate::selection::background::{is_background, TRANSPARENT};

/// Clear all background pixels in packed RGBA bytes, in place.
///
/// Parallelized with Rayon across pixels.
///
/// # Arguments
/// * `data` - RGBA bytes (length is a multiple of 4; a trailing partial pixel is ignored)
/// * `threshold` - Channel value that R, G and B must all exceed
///
/// # Returns
/// Number of pixels cleared
pub fn clear_matching_rgba(data: &mut [u8], threshold: u8) -> usize {
    data.par_chunks_exact_mut(4)
        .map(|px| {
            if is_background([px[0], px[1], px[2], px[3]], threshold) {
                px.copy_from_slice(&TRANSPARENT);
                1
            } else {
                0
            }
        })
        .sum()
}

/// Clear all background pixels - ndarray version.
///
/// # Arguments
/// * `input` - Image (height, width, channels); only 4-channel input is modified
/// * `threshold` - Channel value that R, G and B must all exceed
///
/// # Returns
/// New image with matching pixels cleared
pub fn clear_matching_u8(input: ArrayView3<u8>, threshold: u8) -> Array3<u8> {
    let (_, _, channels) = input.dim();
    let mut output = input.as_standard_layout().into_owned();

    if channels != 4 {
        return output;
    }

    if let Some(data) = output.as_slice_mut() {
        clear_matching_rgba(data, threshold);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_matching_rgba() {
        let mut data = vec![
            250, 250, 250, 255, // cleared
            240, 250, 250, 255, // R not above threshold
            10, 20, 30, 255, // content
            255, 255, 255, 0, // already transparent, rewritten identically
        ];
        let cleared = clear_matching_rgba(&mut data, 240);

        assert_eq!(cleared, 2);
        assert_eq!(&data[0..4], &TRANSPARENT);
        assert_eq!(&data[4..8], &[240, 250, 250, 255]);
        assert_eq!(&data[8..12], &[10, 20, 30, 255]);
        assert_eq!(&data[12..16], &TRANSPARENT);
    }

    #[test]
    fn test_enclosed_region_also_cleared() {
        // 3x3: white centre surrounded by black
        let mut img = Array3::<u8>::zeros((3, 3, 4));
        for y in 0..3 {
            for x in 0..3 {
                img[[y, x, 3]] = 255;
            }
        }
        for c in 0..3 {
            img[[1, 1, c]] = 255;
        }

        let result = clear_matching_u8(img.view(), 240);

        assert_eq!(result[[1, 1, 3]], 0);
        assert_eq!(result[[0, 0, 3]], 255);
    }

    #[test]
    fn test_rgb_input_unchanged() {
        let img = Array3::<u8>::from_elem((2, 2, 3), 255);
        let result = clear_matching_u8(img.view(), 0);
        assert_eq!(result, img);
    }

    #[test]
    fn test_non_standard_layout() {
        // Transposed view is not contiguous in row-major order
        let mut img = Array3::<u8>::zeros((2, 3, 4));
        img[[0, 2, 0]] = 255;
        img[[0, 2, 1]] = 255;
        img[[0, 2, 2]] = 255;
        img[[0, 2, 3]] = 255;
        let swapped = img.view().permuted_axes([1, 0, 2]);

        let result = clear_matching_u8(swapped, 240);

        assert_eq!(result.dim(), (3, 2, 4));
        assert_eq!(result[[2, 0, 3]], 0);
        assert_eq!(result[[0, 0, 3]], 0); // black stays black
        assert_eq!(result[[0, 0, 0]], 0);
    }
}

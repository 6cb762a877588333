//! Pixel buffer access.
//!
//! The background engine only needs four operations on an image: its
//! width, its height, and per-coordinate get/set of an RGBA sample. The
//! [`PixelBuffer`] trait captures exactly that so the same traversal runs
//! over:
//! - [`RgbaBuffer`]: owned flat buffer, row-major, 4 bytes per pixel
//! - `image::RgbaImage`: the decoded codec buffer used by the CLI
//! - `ndarray::Array3<u8>`: shape (height, width, 4), used by the bindings

use image::RgbaImage;
use ndarray::Array3;

/// One RGBA sample.
pub type Pixel = [u8; 4];

/// Minimal mutable view of a 4-channel pixel grid.
///
/// Coordinates passed to `get`/`set` must satisfy `x < width()` and
/// `y < height()`; implementations may panic otherwise.
pub trait PixelBuffer {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn get(&self, x: usize, y: usize) -> Pixel;
    fn set(&mut self, x: usize, y: usize, pixel: Pixel);
}

/// Owned RGBA u8 buffer indexed by `(y * width + x) * 4`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Fully transparent black buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height * 4],
        }
    }

    /// Buffer with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Self {
        let data = pixel.repeat(width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap packed RGBA bytes. Returns `None` if the length does not match
    /// `width * height * 4`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        if data.len() != width * height * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 4
    }
}

impl PixelBuffer for RgbaBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Pixel {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, pixel: Pixel) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&pixel);
    }
}

impl PixelBuffer for RgbaImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Pixel {
        self.get_pixel(x as u32, y as u32).0
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, pixel: Pixel) {
        self.put_pixel(x as u32, y as u32, image::Rgba(pixel));
    }
}

/// (height, width, 4) layout, matching the rest of the ndarray filters.
impl PixelBuffer for Array3<u8> {
    fn width(&self) -> usize {
        self.dim().1
    }

    fn height(&self) -> usize {
        self.dim().0
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Pixel {
        [
            self[[y, x, 0]],
            self[[y, x, 1]],
            self[[y, x, 2]],
            self[[y, x, 3]],
        ]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, pixel: Pixel) {
        for (c, &v) in pixel.iter().enumerate() {
            self[[y, x, c]] = v;
        }
    }
}

//! bgclear
//!
//! Removes a uniform near-white background from raster images by making it
//! transparent, while keeping background-colored areas that are enclosed by
//! content (the inside of an "O", the white of an eye).
//!
//! ## Image Format
//! All processing happens on 8-bit RGBA:
//! - [`buffer::RgbaBuffer`]: flat row-major bytes
//! - `image::RgbaImage`: decoded files
//! - `ndarray::Array3<u8>`: (height, width, 4), used by the Python and WASM bindings
//!
//! ## Modes
//! - **Flood** ([`selection::background`]): border-seeded 8-connected flood fill
//! - **Global** ([`filters::transparency`]): per-pixel threshold, ignores connectivity
//!
//! A pixel is background when R, G and B are all strictly greater than the
//! threshold. Cleared pixels are written as `(255, 255, 255, 0)`.

pub mod buffer;
pub mod error;
pub mod filters;
pub mod io;
pub mod pipeline;
pub mod selection;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::{Pixel, PixelBuffer, RgbaBuffer};
pub use error::{Error, Result};
pub use pipeline::{clear_background_file, rescale_file, ClearOptions, ClearSummary, Mode};
pub use selection::background::{
    fill_background, fill_background_detailed, FillReport, DEFAULT_THRESHOLD, TRANSPARENT,
};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::filters::transparency::clear_matching_u8;
    use crate::selection::background::fill_background;

    fn ensure_rgba(shape: &[usize]) -> PyResult<()> {
        if shape.len() != 3 || shape[2] != 4 {
            return Err(PyValueError::new_err(format!(
                "expected an RGBA array of shape (height, width, 4), got {shape:?}"
            )));
        }
        Ok(())
    }

    /// Make the border-connected near-white background transparent.
    ///
    /// Background-colored regions enclosed by content are kept.
    ///
    /// # Arguments
    /// * `image` - RGBA u8 image (height, width, 4)
    /// * `threshold` - R, G and B must all exceed this value (default: 240)
    #[pyfunction]
    #[pyo3(signature = (image, threshold=240))]
    pub fn remove_background<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        threshold: u8,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        ensure_rgba(image.as_array().shape())?;
        let mut result = image.as_array().to_owned();
        fill_background(&mut result, threshold);
        Ok(result.into_pyarray(py))
    }

    /// Make every near-white pixel transparent, enclosed or not.
    #[pyfunction]
    #[pyo3(signature = (image, threshold=240))]
    pub fn remove_background_global<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        threshold: u8,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        ensure_rgba(image.as_array().shape())?;
        let result = clear_matching_u8(image.as_array(), threshold);
        Ok(result.into_pyarray(py))
    }

    /// bgclear Rust extension module
    #[pymodule]
    pub fn bgclear(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(remove_background, m)?)?;
        m.add_function(wrap_pyfunction!(remove_background_global, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::bgclear;

//! Per-pixel filters.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGBA8 | (H, W, 4) | u8 | RGB + alpha, 0-255 |
//! | Packed RGBA8 | W * H * 4 | u8 | Flat bytes, row-major |
//!
//! Filters in this module do not look at neighbouring pixels; they are
//! parallelized with rayon.

pub mod transparency;

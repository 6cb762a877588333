//! Selection algorithms.
//!
//! - **Background**: border-seeded flood fill that finds the background
//!   reachable from the image edge and clears it

pub mod background;

pub use background::{fill_background, fill_background_detailed, FillReport};

//! Border-connected background removal.
//!
//! Near-white pixels are made transparent only when they can be reached
//! from the image border through other near-white pixels (8-connectivity).
//! Background-colored regions enclosed by content, such as the inside of
//! an "O", are left untouched.
//!
//! The traversal is a multi-source BFS seeded with every border coordinate.
//! Coordinates are classified when dequeued, not when enqueued: neighbours
//! are pushed unconditionally and off-grid or already classified entries are
//! discarded on the way out. A coordinate is enqueued at most 8 times by its
//! neighbours (corners twice more by the seeding), so the queue is bounded by
//! roughly `8 * width * height` entries.

use std::collections::VecDeque;

use crate::buffer::{Pixel, PixelBuffer};

/// Threshold used when the caller does not pick one.
pub const DEFAULT_THRESHOLD: u8 = 240;

/// Value written to every cleared pixel.
pub const TRANSPARENT: Pixel = [255, 255, 255, 0];

/// N, S, W, E, NW, NE, SW, SE as (dx, dy) offsets.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Outcome of a background fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Pixels overwritten with [`TRANSPARENT`]
    pub cleared: usize,
    /// Non-background pixels that stopped the fill
    pub walls: usize,
    /// Bounds of cleared region
    pub bounds: Option<(usize, usize, usize, usize)>, // (x, y, width, height)
}

impl FillReport {
    /// Number of coordinates that were classified.
    pub fn visited(&self) -> usize {
        self.cleared + self.walls
    }
}

/// A pixel is background when R, G and B are all strictly above `threshold`.
/// Alpha is ignored.
#[inline]
pub fn is_background(pixel: Pixel, threshold: u8) -> bool {
    pixel[0] > threshold && pixel[1] > threshold && pixel[2] > threshold
}

/// Make the border-connected background transparent, in place.
///
/// # Arguments
/// * `buffer` - Image to modify
/// * `threshold` - Channel value that R, G and B must all exceed (0-255)
pub fn fill_background<B: PixelBuffer + ?Sized>(buffer: &mut B, threshold: u8) {
    fill_background_detailed(buffer, threshold);
}

/// Make the border-connected background transparent and report what changed.
pub fn fill_background_detailed<B: PixelBuffer + ?Sized>(
    buffer: &mut B,
    threshold: u8,
) -> FillReport {
    let width = buffer.width();
    let height = buffer.height();
    let mut report = FillReport::default();

    if width == 0 || height == 0 {
        return report;
    }

    let w = width as isize;
    let h = height as isize;

    let mut visited = vec![false; width * height];
    let mut queue: VecDeque<(isize, isize)> = VecDeque::with_capacity(2 * (width + height));

    // Corners are seeded twice; the visited flag takes care of that.
    for x in 0..w {
        queue.push_back((x, 0));
        queue.push_back((x, h - 1));
    }
    for y in 0..h {
        queue.push_back((0, y));
        queue.push_back((w - 1, y));
    }

    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0;
    let mut max_y = 0;

    while let Some((x, y)) = queue.pop_front() {
        if x < 0 || x >= w || y < 0 || y >= h {
            continue;
        }

        let (ux, uy) = (x as usize, y as usize);
        let idx = uy * width + ux;
        if visited[idx] {
            continue;
        }
        visited[idx] = true;

        if is_background(buffer.get(ux, uy), threshold) {
            buffer.set(ux, uy, TRANSPARENT);
            report.cleared += 1;
            min_x = min_x.min(ux);
            min_y = min_y.min(uy);
            max_x = max_x.max(ux);
            max_y = max_y.max(uy);

            for (dx, dy) in NEIGHBORS {
                queue.push_back((x + dx, y + dy));
            }
        } else {
            // Wall: classified, but the fill does not pass through it
            report.walls += 1;
        }
    }

    if report.cleared > 0 {
        report.bounds = Some((min_x, min_y, max_x - min_x + 1, max_y - min_y + 1));
    }

    report
}

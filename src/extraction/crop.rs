//! Square patch extraction around a nucleus coordinate
//!
//! Windows that run past an image edge are clamped to the image bounds, so a
//! nucleus near the border yields a smaller patch and a window entirely
//! outside the image yields an empty one.

use ndarray::{Array3, ArrayView3, s};
use std::ops::Range;

/// Clamp `[center - half_size, center + half_size)` into `[0, len)`
///
/// Returns an empty range when the window misses the axis entirely.
pub fn clamped_window(center: i64, half_size: usize, len: usize) -> Range<usize> {
    let half = i64::try_from(half_size).unwrap_or(i64::MAX);
    let upper = i64::try_from(len).unwrap_or(i64::MAX);

    let start = center.saturating_sub(half).clamp(0, upper);
    let end = center.saturating_add(half).clamp(0, upper);

    if end <= start {
        return 0..0;
    }
    (start as usize)..(end as usize)
}

/// Crop the window centred on `(x, y)` from `buffer`
///
/// An absent buffer crops to an empty array. In-bounds windows have
/// `2 * half_size` rows and columns and keep every channel.
pub fn crop(buffer: Option<ArrayView3<'_, u8>>, x: i64, y: i64, half_size: usize) -> Array3<u8> {
    let Some(pixels) = buffer else {
        return Array3::zeros((0, 0, 0));
    };

    let (height, width, channels) = pixels.dim();
    let rows = clamped_window(y, half_size, height);
    let cols = clamped_window(x, half_size, width);

    if rows.is_empty() || cols.is_empty() {
        return Array3::zeros((0, 0, channels));
    }

    pixels.slice(s![rows, cols, ..]).to_owned()
}

/// Whether the patch holds at least one non-zero element
pub fn has_signal(patch: &Array3<u8>) -> bool {
    patch.iter().any(|&value| value != 0)
}

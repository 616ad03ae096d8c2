//! L4 Atomic Layer: Time and unit utilities for scroll animations
//!
//! Pure functions for frame deltas and converting logical pixels to terminal cells.

use std::time::Duration;

/// Time since the previous frame. The first frame has no predecessor and
/// yields zero, as does a clock that went backwards.
#[inline]
pub fn frame_delta(last: Option<Duration>, now: Duration) -> Duration {
    match last {
        Some(last) => now.saturating_sub(last),
        None => Duration::ZERO,
    }
}

/// Distance covered at `speed` px/s over `elapsed`
#[inline]
pub fn distance(speed: f64, elapsed: Duration) -> f64 {
    speed * elapsed.as_secs_f64()
}

/// Whole terminal cells covered by `px` logical pixels
#[inline]
pub fn px_to_cells(px: f64, px_per_cell: f64) -> u16 {
    if px <= 0.0 || px_per_cell <= 0.0 || !px.is_finite() {
        return 0;
    }
    (px / px_per_cell).floor().min(u16::MAX as f64) as u16
}

/// Logical pixels spanned by `cells` terminal cells
#[inline]
pub fn cells_to_px(cells: u16, px_per_cell: f64) -> f64 {
    f64::from(cells) * px_per_cell
}

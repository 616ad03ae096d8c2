//! L4 Atomic Layer: How far the list moves per frame
//!
//! A [`ScrollMotion`] turns elapsed frame time into scroll distance. The
//! auto-scroller owns the offset and the wrap-around; motions only decide
//! the distance and may keep a layout of their own.

use std::fmt;
use std::time::Duration;

use hallboard_core::Result;

use super::timing::distance;

/// Which motion drives a scroller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    /// Continuous table scrolling
    Smooth,
    /// Carousel with its own slide layout
    Enhanced,
    /// Carousel that rotates one card per interval
    Fallback,
}

/// Geometry a motion lays itself out against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    pub item_extent: f64,
    pub item_count: usize,
    pub viewport_extent: f64,
}

/// Distance capability of a scroller
pub trait ScrollMotion: fmt::Debug {
    fn kind(&self) -> MotionKind;

    /// Distance in px to advance for a frame that took `elapsed`
    fn advance(&mut self, elapsed: Duration, item_extent: f64) -> f64;

    /// Rebuild internal layout after a resize
    fn relayout(&mut self, _layout: &LayoutInput) -> Result<()> {
        Ok(())
    }

    /// Drop any time accumulated toward the next step
    fn reset(&mut self) {}
}

/// Constant-speed scrolling with sub-pixel offsets
#[derive(Debug, Clone)]
pub struct SmoothMotion {
    speed: f64,
}

impl SmoothMotion {
    pub fn new(speed_px_per_sec: f64) -> Self {
        let speed = if speed_px_per_sec.is_finite() {
            speed_px_per_sec.max(0.0)
        } else {
            0.0
        };
        Self { speed }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl ScrollMotion for SmoothMotion {
    fn kind(&self) -> MotionKind {
        MotionKind::Smooth
    }

    #[inline]
    fn advance(&mut self, elapsed: Duration, _item_extent: f64) -> f64 {
        distance(self.speed, elapsed)
    }
}

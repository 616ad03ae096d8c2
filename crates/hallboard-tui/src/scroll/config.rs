//! L4 Atomic Layer: Configuration types for auto-scrolling
//!
//! Re-exports configuration from hallboard-core and provides additional utilities.

use std::time::Duration;

// Re-export config types from core
pub use hallboard_core::{ScrollConfig, ScrollMode};

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Get tick duration for the animation FPS
    fn frame_duration(&self) -> Duration;

    /// Idle time after an interaction before scrolling resumes
    fn interaction_grace(&self) -> Duration;

    /// Rotation interval of the fallback carousel
    fn fallback_interval(&self) -> Duration;

    /// Delay before a resize is applied
    fn resize_debounce(&self) -> Duration;

    /// Carousel speed in px/s derived from the per-frame step
    fn carousel_speed(&self) -> f64;

    /// Replace an unusable measured extent with the configured default
    fn sanitize_extent(&self, measured: Option<f64>) -> f64;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn frame_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn interaction_grace(&self) -> Duration {
        Duration::from_millis(self.interaction_grace_ms)
    }

    #[inline]
    fn fallback_interval(&self) -> Duration {
        Duration::from_millis(self.fallback_interval_ms.max(100))
    }

    #[inline]
    fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    fn carousel_speed(&self) -> f64 {
        let fps = if self.animation_fps == 0 { 60 } else { self.animation_fps };
        let speed = self.carousel_step_px * f64::from(fps);
        if speed.is_finite() {
            speed.max(0.0)
        } else {
            0.0
        }
    }

    fn sanitize_extent(&self, measured: Option<f64>) -> f64 {
        match measured {
            Some(extent) if extent.is_finite() && extent > 0.0 => extent,
            _ if self.default_item_extent_px.is_finite() && self.default_item_extent_px > 0.0 => {
                self.default_item_extent_px
            }
            _ => 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScrollConfig::default();
        assert_eq!(config.mode, ScrollMode::Table);
        assert_eq!(config.animation_fps, 60);
        assert_eq!(config.frame_duration(), Duration::from_millis(16));
        assert_eq!(config.interaction_grace(), Duration::from_millis(4000));
    }

    #[test]
    fn test_carousel_speed() {
        let config = ScrollConfig {
            carousel_step_px: 2.0,
            animation_fps: 50,
            ..Default::default()
        };
        assert!((config.carousel_speed() - 100.0).abs() < 1e-9);

        for step in [f64::INFINITY, f64::NAN, -3.0, f64::MAX] {
            let config = ScrollConfig {
                carousel_step_px: step,
                ..Default::default()
            };
            assert_eq!(config.carousel_speed(), 0.0);
        }
    }

    #[test]
    fn test_sanitize_extent() {
        let config = ScrollConfig::default();
        assert_eq!(config.sanitize_extent(Some(32.0)), 32.0);
        assert_eq!(config.sanitize_extent(Some(0.0)), 50.0);
        assert_eq!(config.sanitize_extent(Some(-4.0)), 50.0);
        assert_eq!(config.sanitize_extent(Some(f64::NAN)), 50.0);
        assert_eq!(config.sanitize_extent(None), 50.0);

        let broken = ScrollConfig {
            default_item_extent_px: 0.0,
            ..Default::default()
        };
        assert_eq!(broken.sanitize_extent(None), 50.0);
    }

    #[test]
    fn test_fallback_interval_floor() {
        let config = ScrollConfig {
            fallback_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.fallback_interval(), Duration::from_millis(100));
    }
}

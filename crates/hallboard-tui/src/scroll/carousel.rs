//! L4 Atomic Layer: Carousel motions
//!
//! The enhanced carousel keeps a slide layout (snap points and slides per
//! view) that is rebuilt from scratch on every resize. When it is not
//! available the fallback simply rotates one card per interval.

use std::time::Duration;

use hallboard_core::{Error, Result};
use tracing::{debug, info};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::motion::{LayoutInput, MotionKind, ScrollMotion};
use super::timing::distance;

/// Slide layout computed by the enhanced carousel
#[derive(Debug, Clone, PartialEq)]
pub struct SlideLayout {
    /// Start position of each slide
    pub snap_points: Vec<f64>,
    /// Whole slides that fit the viewport
    pub slides_per_view: usize,
}

/// Per-frame stepping carousel with its own layout
#[derive(Debug, Clone)]
pub struct EnhancedCarousel {
    speed: f64,
    layout: Option<SlideLayout>,
}

impl EnhancedCarousel {
    pub fn new(step_px: f64, fps: u32) -> Self {
        let config = ScrollConfig {
            carousel_step_px: step_px,
            animation_fps: fps,
            ..Default::default()
        };
        Self::from_config(&config)
    }

    pub fn from_config(config: &ScrollConfig) -> Self {
        Self {
            speed: config.carousel_speed(),
            layout: None,
        }
    }

    /// The enhanced carousel when the config allows it
    pub fn detect(config: &ScrollConfig) -> Option<Self> {
        if config.enhanced_carousel {
            Some(Self::from_config(config))
        } else {
            None
        }
    }

    pub fn layout(&self) -> Option<&SlideLayout> {
        self.layout.as_ref()
    }
}

impl ScrollMotion for EnhancedCarousel {
    fn kind(&self) -> MotionKind {
        MotionKind::Enhanced
    }

    fn advance(&mut self, elapsed: Duration, _item_extent: f64) -> f64 {
        distance(self.speed, elapsed)
    }

    fn relayout(&mut self, input: &LayoutInput) -> Result<()> {
        if input.item_count == 0 {
            return Err(Error::Layout("no slides to lay out".to_string()));
        }
        if !input.item_extent.is_finite() || input.item_extent <= 0.0 {
            return Err(Error::Layout(format!(
                "invalid slide extent {}",
                input.item_extent
            )));
        }
        if !input.viewport_extent.is_finite() || input.viewport_extent < input.item_extent {
            return Err(Error::Layout(format!(
                "viewport {} cannot hold a slide of {}",
                input.viewport_extent, input.item_extent
            )));
        }

        let snap_points = (0..input.item_count)
            .map(|i| i as f64 * input.item_extent)
            .collect();
        let slides_per_view = (input.viewport_extent / input.item_extent).floor() as usize;
        debug!(
            "Carousel layout rebuilt: {} slides, {} per view",
            input.item_count, slides_per_view
        );
        self.layout = Some(SlideLayout {
            snap_points,
            slides_per_view,
        });
        Ok(())
    }
}

/// Rotates exactly one card per interval, no sub-pixel movement
#[derive(Debug, Clone)]
pub struct FallbackCarousel {
    interval: Duration,
    accumulated: Duration,
}

impl FallbackCarousel {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
        }
    }

    pub fn from_config(config: &ScrollConfig) -> Self {
        Self::new(config.fallback_interval())
    }
}

impl ScrollMotion for FallbackCarousel {
    fn kind(&self) -> MotionKind {
        MotionKind::Fallback
    }

    fn advance(&mut self, elapsed: Duration, item_extent: f64) -> f64 {
        self.accumulated = self.accumulated.saturating_add(elapsed);
        let interval = self.interval.as_nanos();
        let steps = self.accumulated.as_nanos() / interval;
        let rest = self.accumulated.as_nanos() % interval;
        self.accumulated = Duration::from_nanos(u64::try_from(rest).unwrap_or(u64::MAX));
        steps as f64 * item_extent
    }

    fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

/// Pick the carousel motion once, at initialization
pub fn select_carousel(
    enhanced: Option<EnhancedCarousel>,
    config: &ScrollConfig,
) -> Box<dyn ScrollMotion> {
    match enhanced {
        Some(carousel) => {
            info!("Using enhanced carousel");
            Box::new(carousel)
        }
        None => {
            info!(
                "Enhanced carousel unavailable, rotating every {:?}",
                config.fallback_interval()
            );
            Box::new(FallbackCarousel::from_config(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(extent: f64, count: usize, viewport: f64) -> LayoutInput {
        LayoutInput {
            item_extent: extent,
            item_count: count,
            viewport_extent: viewport,
        }
    }

    #[test]
    fn test_fallback_steps_whole_items() {
        let mut carousel = FallbackCarousel::new(Duration::from_secs(3));
        assert_eq!(carousel.advance(Duration::from_secs(2), 40.0), 0.0);
        assert_eq!(carousel.advance(Duration::from_secs(1), 40.0), 40.0);
        assert_eq!(carousel.advance(Duration::from_secs(7), 40.0), 80.0);
        // 1s left over from the previous call
        assert_eq!(carousel.advance(Duration::from_secs(2), 40.0), 40.0);
    }

    #[test]
    fn test_fallback_long_idle_steps_at_once() {
        let mut carousel = FallbackCarousel::new(Duration::from_secs(3));
        let year = Duration::from_secs(365 * 24 * 3600);
        assert_eq!(carousel.advance(year, 40.0), 10_512_000.0 * 40.0);
        assert_eq!(carousel.advance(Duration::from_secs(2), 40.0), 0.0);
    }

    #[test]
    fn test_enhanced_rejects_infinite_step() {
        let mut carousel = EnhancedCarousel::new(f64::INFINITY, 60);
        assert_eq!(carousel.advance(Duration::from_secs(1), 80.0), 0.0);
    }

    #[test]
    fn test_fallback_reset_drops_progress() {
        let mut carousel = FallbackCarousel::new(Duration::from_secs(3));
        carousel.advance(Duration::from_millis(2900), 40.0);
        carousel.reset();
        assert_eq!(carousel.advance(Duration::from_millis(200), 40.0), 0.0);
    }

    #[test]
    fn test_enhanced_step_scales_with_frame_time() {
        let mut carousel = EnhancedCarousel::new(2.0, 50);
        // one nominal frame
        assert!((carousel.advance(Duration::from_millis(20), 80.0) - 2.0).abs() < 1e-9);
        // a hitch of five frames
        assert!((carousel.advance(Duration::from_millis(100), 80.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_enhanced_relayout() {
        let mut carousel = EnhancedCarousel::new(1.5, 60);
        carousel.relayout(&layout(80.0, 4, 250.0)).unwrap();
        let built = carousel.layout().unwrap();
        assert_eq!(built.snap_points, vec![0.0, 80.0, 160.0, 240.0]);
        assert_eq!(built.slides_per_view, 3);
    }

    #[test]
    fn test_enhanced_relayout_failure_keeps_previous() {
        let mut carousel = EnhancedCarousel::new(1.5, 60);
        carousel.relayout(&layout(80.0, 4, 250.0)).unwrap();
        assert!(carousel.relayout(&layout(80.0, 4, 0.0)).is_err());
        assert!(carousel.relayout(&layout(0.0, 4, 250.0)).is_err());
        assert!(carousel.relayout(&layout(80.0, 0, 250.0)).is_err());
        assert_eq!(carousel.layout().unwrap().slides_per_view, 3);
    }

    #[test]
    fn test_select_carousel() {
        let config = ScrollConfig::default();
        let chosen = select_carousel(EnhancedCarousel::detect(&config), &config);
        assert_eq!(chosen.kind(), MotionKind::Enhanced);

        let config = ScrollConfig {
            enhanced_carousel: false,
            ..Default::default()
        };
        let chosen = select_carousel(EnhancedCarousel::detect(&config), &config);
        assert_eq!(chosen.kind(), MotionKind::Fallback);
    }
}

//! Endless auto-scrolling for the meeting list
//!
//! The list scrolls continuously and loops without a visible seam. Items that
//! scroll out at the top are moved to the back of a duplicated sequence, so
//! the rendered list never runs out.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `timing` - Frame deltas and px/cell conversion
//! - `config` - Configuration types and defaults (re-exported from hallboard-core)
//! - `ring` - Duplicated, rotating item sequence
//! - `motion` - How far the list moves per frame
//! - `carousel` - Enhanced and fallback carousel motions
//!
//! ## L3 Molecular Layer
//! - `animation` - Auto-scroll controller combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use hallboard_tui::scroll::{AutoScroller, SmoothMotion, ScrollConfig};
//!
//! let config = ScrollConfig::default();
//! let motion = Box::new(SmoothMotion::new(config.row_speed_px_per_sec));
//! let mut scroller = AutoScroller::new(meetings, 5, motion, &config);
//! scroller.start(clock.monotonic());
//!
//! // In main loop, once per frame
//! let outcome = scroller.frame(clock.monotonic());
//! ```

// L4 Atomic Layer
pub mod carousel;
pub mod config;
pub mod motion;
pub mod ring;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

// Re-exports for convenient access
pub use animation::{AutoScroller, FrameOutcome, PauseReason, Playback, ScrollState};
pub use carousel::{select_carousel, EnhancedCarousel, FallbackCarousel, SlideLayout};
pub use config::{ScrollConfig, ScrollConfigExt, ScrollMode};
pub use motion::{LayoutInput, MotionKind, ScrollMotion, SmoothMotion};
pub use ring::ItemRing;

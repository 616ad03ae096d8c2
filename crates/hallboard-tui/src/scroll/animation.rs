//! L3 Molecular Layer: Auto-scroll controller
//!
//! Combines the item ring, a motion and the frame timing into the endless
//! scrolling loop of the meeting list. Call `frame()` once per animation
//! frame; it advances the offset, rotates items that scrolled out and reports
//! the offset to draw with.

use std::time::Duration;

use tracing::{debug, warn};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::motion::{LayoutInput, MotionKind, ScrollMotion};
use super::ring::ItemRing;
use super::timing::frame_delta;

/// Why a scroller is paused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseReason {
    /// Pointer hovering or keyboard focus on the region; lasts until it leaves
    Manual,
    /// Wheel, click or navigation; lifts by itself at `resume_at`
    Interaction { resume_at: Duration },
}

/// Playback state of a scroller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Not started, or too few items to scroll; rendered statically
    Static,
    Running,
    Paused(PauseReason),
    /// Host region removed; never runs again
    Detached,
}

/// Mutable scroll state, owned by one scroller
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    /// Distance the front item has scrolled out, in px. `0 <= offset < item_extent`
    /// after every frame.
    pub offset: f64,
    pub item_extent: f64,
    pub playback: Playback,
    /// Monotonic timestamp of the previous frame
    pub last_frame: Option<Duration>,
}

/// What a frame did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    /// Items moved from the front to the back
    pub rotations: u64,
    /// Offset to translate the list by
    pub offset: f64,
}

/// Endless auto-scrolling list
#[derive(Debug)]
pub struct AutoScroller<T> {
    ring: ItemRing<T>,
    state: ScrollState,
    motion: Box<dyn ScrollMotion>,
    visible: usize,
    viewport_extent: f64,
    grace: Duration,
    config: ScrollConfig,
}

impl<T: Clone> AutoScroller<T> {
    /// Create a scroller over `items`, materialized for a window of `visible`
    /// items. The scroller is static until `start()`.
    pub fn new(
        items: Vec<T>,
        visible: usize,
        motion: Box<dyn ScrollMotion>,
        config: &ScrollConfig,
    ) -> Self {
        let ring = ItemRing::new(items, visible);
        let item_extent = config.sanitize_extent(None);
        Self {
            ring,
            state: ScrollState {
                offset: 0.0,
                item_extent,
                playback: Playback::Static,
                last_frame: None,
            },
            motion,
            visible,
            viewport_extent: item_extent * visible as f64,
            grace: config.interaction_grace(),
            config: config.clone(),
        }
    }

    /// Start scrolling. Fewer than two source items leaves the list static.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.state.playback == Playback::Detached {
            return false;
        }
        if self.ring.source_len() < 2 {
            debug!(
                "Auto-scroll disabled: {} item(s) to show",
                self.ring.source_len()
            );
            self.state.playback = Playback::Static;
            return false;
        }
        self.state.playback = Playback::Running;
        self.state.last_frame = Some(now);
        self.relayout();
        true
    }

    /// Advance one animation frame
    pub fn frame(&mut self, now: Duration) -> FrameOutcome {
        match self.state.playback {
            Playback::Running => {}
            Playback::Paused(PauseReason::Interaction { resume_at }) if now >= resume_at => {
                debug!("Interaction pause over, resuming auto-scroll");
                self.resume_at(now);
                return self.idle_outcome();
            }
            _ => return self.idle_outcome(),
        }

        let elapsed = frame_delta(self.state.last_frame, now);
        self.state.last_frame = Some(now);

        let extent = self.state.item_extent;
        let advanced = self.motion.advance(elapsed, extent);
        if advanced.is_finite() && advanced > 0.0 {
            self.state.offset += advanced;
        } else if advanced != 0.0 {
            warn!("Dropping unusable scroll distance {}", advanced);
        }

        let rotations = self.wrap(extent);
        FrameOutcome {
            rotations,
            offset: self.state.offset,
        }
    }

    /// Fold whole items out of the offset, rotating the ring to match.
    /// Leaves `0 <= offset < extent`.
    fn wrap(&mut self, extent: f64) -> u64 {
        if !self.state.offset.is_finite() || self.state.offset < 0.0 {
            warn!("Scroll offset {} out of range, resetting", self.state.offset);
            self.state.offset = 0.0;
            return 0;
        }
        if self.state.offset < extent {
            return 0;
        }

        let wraps = (self.state.offset / extent).floor();
        self.state.offset %= extent;
        // The ring holds whole copies of the source, so only the remainder matters
        let len = self.ring.len();
        if len > 0 && wraps.is_finite() {
            self.ring.rotate_by((wraps % len as f64) as usize);
        }
        wraps as u64
    }

    /// Pointer entered the region
    pub fn pointer_enter(&mut self) {
        self.pause_manual();
    }

    /// Pointer left the region
    pub fn pointer_leave(&mut self, now: Duration) {
        self.resume_manual(now);
    }

    /// Keyboard focus moved into the region
    pub fn focus_in(&mut self) {
        self.pause_manual();
    }

    /// Keyboard focus left the region
    pub fn focus_out(&mut self, now: Duration) {
        self.resume_manual(now);
    }

    /// Wheel, touch, pointer-down or navigation key. Pauses until the grace
    /// period passes without further interaction. A manual pause wins.
    pub fn interact(&mut self, now: Duration) {
        match self.state.playback {
            Playback::Running | Playback::Paused(PauseReason::Interaction { .. }) => {
                self.state.playback = Playback::Paused(PauseReason::Interaction {
                    resume_at: now + self.grace,
                });
            }
            Playback::Paused(PauseReason::Manual) | Playback::Static | Playback::Detached => {}
        }
    }

    /// Step one item forward or back by hand. Counts as an interaction.
    pub fn step(&mut self, forward: bool, now: Duration) {
        if !self.is_active() {
            return;
        }
        if forward {
            self.ring.rotate();
        } else {
            self.ring.rotate_back();
        }
        self.state.offset = 0.0;
        self.interact(now);
    }

    /// Re-initialize after the viewport changed. An unusable measured extent
    /// falls back to the configured default. Layout failures of the motion
    /// are logged and the previous layout is kept.
    pub fn resize(
        &mut self,
        measured_extent: Option<f64>,
        visible: usize,
        viewport_extent: f64,
        now: Duration,
    ) {
        let extent = self.config.sanitize_extent(measured_extent);
        if measured_extent != Some(extent) {
            debug!(
                "Item extent {:?} unusable, using {}",
                measured_extent, extent
            );
        }

        self.state.item_extent = extent;
        self.state.offset = 0.0;
        self.visible = visible;
        self.viewport_extent = viewport_extent;
        if self.ring.ensure_window(visible) {
            debug!("Item ring grown to {} for {} visible", self.ring.len(), visible);
        }

        if self.is_active() {
            self.state.last_frame = Some(now);
            self.motion.reset();
            self.relayout();
        }
    }

    /// Stop for good; the host region is gone
    pub fn detach(&mut self) {
        self.state.playback = Playback::Detached;
        self.state.last_frame = None;
    }

    /// Monotonic time at which this scroller next needs a frame
    pub fn next_wakeup(&self, now: Duration) -> Option<Duration> {
        match self.state.playback {
            Playback::Running => Some(now),
            Playback::Paused(PauseReason::Interaction { resume_at }) => Some(resume_at),
            _ => None,
        }
    }

    #[inline]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    #[inline]
    pub fn playback(&self) -> Playback {
        self.state.playback
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    #[inline]
    pub fn item_extent(&self) -> f64 {
        self.state.item_extent
    }

    pub fn is_running(&self) -> bool {
        self.state.playback == Playback::Running
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state.playback, Playback::Paused(_))
    }

    /// Running or paused, i.e. started and not detached
    pub fn is_active(&self) -> bool {
        self.is_running() || self.is_paused()
    }

    pub fn motion_kind(&self) -> MotionKind {
        self.motion.kind()
    }

    pub fn items(&self) -> &ItemRing<T> {
        &self.ring
    }

    /// Items in display order, enough to fill the window plus the one
    /// partially scrolled in
    pub fn visible_items(&self) -> impl Iterator<Item = &T> {
        self.ring.window(self.visible + 1)
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    fn pause_manual(&mut self) {
        if matches!(
            self.state.playback,
            Playback::Running | Playback::Paused(PauseReason::Interaction { .. })
        ) {
            self.state.playback = Playback::Paused(PauseReason::Manual);
        }
    }

    fn resume_manual(&mut self, now: Duration) {
        if self.state.playback == Playback::Paused(PauseReason::Manual) {
            self.resume_at(now);
        }
    }

    /// Back to running without counting the paused time as scroll distance
    fn resume_at(&mut self, now: Duration) {
        self.state.playback = Playback::Running;
        self.state.last_frame = Some(now);
        self.motion.reset();
    }

    fn idle_outcome(&self) -> FrameOutcome {
        FrameOutcome {
            rotations: 0,
            offset: self.state.offset,
        }
    }

    fn relayout(&mut self) {
        let input = LayoutInput {
            item_extent: self.state.item_extent,
            item_count: self.ring.len(),
            viewport_extent: self.viewport_extent,
        };
        if let Err(e) = self.motion.relayout(&input) {
            warn!("Scroll layout rebuild failed, keeping previous layout: {}", e);
        }
    }
}

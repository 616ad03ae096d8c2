use std::time::Duration;

use chrono::NaiveDateTime;
use hallboard_core::display::apply_status;
use hallboard_core::scheduler::{Debouncer, Schedule, TimerHandle, TimerQueue};
use hallboard_core::{
    AppConfig, DisplaySnapshot, MeetingRecord, ScrollConfig, ScrollMode, StatusBoard, StatusKey,
};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info, trace};

use crate::input::{Action, PointerAction};
use crate::keymap::Keymap;
use crate::scroll::timing::cells_to_px;
use crate::scroll::{
    select_carousel, AutoScroller, EnhancedCarousel, ScrollConfigExt, ScrollMotion, SmoothMotion,
};
use crate::surface::TerminalSurface;
use crate::widgets::{meeting_rows_area, CARD_WIDTH, ROW_LINES};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Help overlay
    Help,
}

/// Work the run loop schedules on the timer queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Job {
    /// Advance the meeting list by one animation frame
    ScrollFrame,
    /// Recompute time, date and Hijri texts
    ClockRefresh,
    /// Cycle the room status (demo mode)
    StatusDemo,
}

/// Geometry of the meeting region as last laid out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeetingViewport {
    /// Whole region, used for pointer hit testing
    pub area: Rect,
    /// Part of the region the items scroll through
    pub rows: Rect,
    pub visible: usize,
    /// Measured item extent in px; `None` if the region has no room
    pub item_extent: Option<f64>,
    pub viewport_extent: f64,
}

impl MeetingViewport {
    /// Measure the meeting region for the given scroll mode
    pub fn measure(area: Rect, config: &ScrollConfig) -> Self {
        let rows = meeting_rows_area(area, config.mode);
        let (cells, per_item, px_per_cell) = match config.mode {
            ScrollMode::Table => (rows.height, ROW_LINES, config.px_per_line),
            ScrollMode::Carousel => (rows.width, CARD_WIDTH, config.px_per_column),
        };

        let item_extent = if rows.is_empty() {
            None
        } else {
            Some(cells_to_px(per_item, px_per_cell))
        };

        Self {
            area,
            rows,
            visible: usize::from(cells / per_item).max(1),
            item_extent,
            viewport_extent: cells_to_px(cells, px_per_cell),
        }
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    pub keymap: Keymap,
    /// Current room status
    pub board: StatusBoard,
    /// Computed texts and colors, as applied
    pub surface: TerminalSurface,
    /// Time, date and Hijri texts of the last clock refresh
    pub snapshot: DisplaySnapshot,
    /// Meeting dataset, in schedule order
    pub meetings: Vec<MeetingRecord>,
    /// Endless meeting list or carousel
    pub scroller: AutoScroller<MeetingRecord>,
    /// Meeting region as last applied to the scroller
    pub viewport: Option<MeetingViewport>,
    /// Current application mode
    pub mode: Mode,
    /// Kiosk mode: chrome and status bar hidden
    pub fullscreen: bool,
    /// Meeting list focused from the keyboard
    pub scroll_focused: bool,
    /// Status icon pulse phase
    pub pulse_on: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    timers: TimerQueue<Job>,
    scroll_job: Option<TimerHandle>,
    resize_debounce: Debouncer,
    pending_viewport: Option<MeetingViewport>,
    pointer_inside: bool,
}

impl App {
    /// Build the board and start its timers. `now` is monotonic, `local`
    /// wall-clock time.
    pub fn new(config: AppConfig, now: Duration, local: NaiveDateTime) -> Self {
        let keymap = Keymap::from_config(&config.keymap);
        let meetings = config.meetings();
        let motion = build_motion(&config.scroll);
        info!(
            "Board for {} with {} meetings, {:?} via {:?}",
            config.display.room_name,
            meetings.len(),
            config.scroll.mode,
            motion.kind()
        );

        let mut scroller = AutoScroller::new(meetings.clone(), 5, motion, &config.scroll);
        let mut timers = TimerQueue::new();

        let scroll_job = if scroller.start(now) {
            Some(timers.register(Job::ScrollFrame, Schedule::EveryFrame, now))
        } else {
            None
        };
        timers.register(
            Job::ClockRefresh,
            Schedule::Every(Duration::from_secs(config.display.clock_refresh_secs.max(1))),
            now,
        );
        if config.status.demo_cycle {
            let interval = Duration::from_secs(config.status.demo_interval_secs.max(1));
            debug!("Status demo cycling every {:?}", interval);
            timers.register(Job::StatusDemo, Schedule::Every(interval), now);
        }

        let board = StatusBoard::new(config.status.initial_key());
        let mut surface = TerminalSurface::new();
        apply_status(&mut surface, board.descriptor());

        let snapshot = DisplaySnapshot::compute(local, config.display.hour12);
        snapshot.apply_to(&mut surface);

        let fullscreen = config.display.start_fullscreen;

        Self {
            config,
            keymap,
            board,
            surface,
            snapshot,
            meetings,
            scroller,
            viewport: None,
            mode: Mode::Normal,
            fullscreen,
            scroll_focused: false,
            pulse_on: true,
            should_quit: false,
            timers,
            scroll_job,
            resize_debounce: Debouncer::new(),
            pending_viewport: None,
            pointer_inside: false,
        }
    }

    /// Run everything due at `now`
    pub fn tick(&mut self, now: Duration, local: NaiveDateTime) {
        if self.resize_debounce.fire(now) {
            if let Some(viewport) = self.pending_viewport.take() {
                self.apply_viewport(viewport, now);
            }
        }

        for job in self.timers.due(now) {
            match job {
                Job::ScrollFrame => {
                    let outcome = self.scroller.frame(now);
                    if outcome.rotations > 0 {
                        trace!("Rotated {} meeting(s) to the back", outcome.rotations);
                    }
                }
                Job::ClockRefresh => self.refresh_clock(local),
                Job::StatusDemo => {
                    let key = self.cycle_status();
                    debug!("Demo status -> {}", key);
                }
            }
        }

        // The refresh interval is coarse; never show a past minute
        if self.snapshot.is_stale(local) {
            self.refresh_clock(local);
        }

        self.pulse_on = (now.as_millis() / 1000) % 2 == 0;
    }

    /// Recompute and apply the time, date and Hijri texts
    pub fn refresh_clock(&mut self, local: NaiveDateTime) {
        self.snapshot = DisplaySnapshot::compute(local, self.config.display.hour12);
        self.snapshot.apply_to(&mut self.surface);
    }

    pub fn set_status(&mut self, key: StatusKey) {
        if self.board.set(key) {
            apply_status(&mut self.surface, self.board.descriptor());
        }
    }

    /// Advance to the next status and apply it
    pub fn cycle_status(&mut self) -> StatusKey {
        let key = self.board.cycle();
        apply_status(&mut self.surface, self.board.descriptor());
        key
    }

    pub fn handle_action(&mut self, action: Action, now: Duration) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::CycleStatus => {
                self.cycle_status();
            }
            Action::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                debug!("Fullscreen: {}", self.fullscreen);
            }
            Action::ToggleFocus => self.toggle_scroll_focus(now),
            Action::StepForward => self.scroller.step(true, now),
            Action::StepBack => self.scroller.step(false, now),
            Action::Help => self.mode = Mode::Help,
            Action::ExitMode => self.mode = Mode::Normal,
            Action::None => {}
        }
    }

    pub fn handle_pointer(&mut self, action: PointerAction, now: Duration) {
        match action {
            PointerAction::Hover(at) => self.pointer_at(at, now),
            PointerAction::Interact(at) => {
                self.pointer_at(at, now);
                if self.pointer_inside {
                    self.scroller.interact(now);
                }
            }
            PointerAction::None => {}
        }
    }

    /// The terminal window lost focus; keyboard focus has left the list
    pub fn focus_lost(&mut self, now: Duration) {
        if self.scroll_focused {
            self.scroll_focused = false;
            self.scroller.focus_out(now);
        }
    }

    /// Record where the meeting region was laid out. The first layout is
    /// applied at once, later changes after the resize debounce.
    pub fn observe_meeting_area(&mut self, area: Rect, now: Duration) {
        let viewport = MeetingViewport::measure(area, &self.config.scroll);

        if self.pending_viewport == Some(viewport) {
            return;
        }
        match self.viewport {
            None => self.apply_viewport(viewport, now),
            Some(current) if current == viewport => {
                // Changed back before the debounce fired
                self.pending_viewport = None;
                self.resize_debounce.cancel();
            }
            Some(_) => {
                self.pending_viewport = Some(viewport);
                self.resize_debounce
                    .arm(now, self.config.scroll.resize_debounce());
            }
        }
    }

    /// How long the run loop may sleep before something needs doing
    pub fn poll_wait(&self, now: Duration) -> Option<Duration> {
        [
            self.scroller.next_wakeup(now),
            self.resize_debounce.deadline(),
            self.timers.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
        .map(|at| at.saturating_sub(now))
    }

    /// Stop the scroll loop; the board is going away
    pub fn teardown(&mut self) {
        if let Some(handle) = self.scroll_job.take() {
            self.timers.cancel(handle);
        }
        self.scroller.detach();
        info!("Board stopped");
    }

    /// Meeting in progress at the snapshot time
    pub fn current_meeting(&self) -> Option<&MeetingRecord> {
        let time = self.snapshot.taken_at.time();
        self.meetings.iter().find(|m| m.is_in_progress(time))
    }

    /// Next meeting to start after the snapshot time
    pub fn upcoming_meeting(&self) -> Option<&MeetingRecord> {
        hallboard_core::meeting::next_meeting(&self.meetings, self.snapshot.taken_at.time())
    }

    fn toggle_scroll_focus(&mut self, now: Duration) {
        self.scroll_focused = !self.scroll_focused;
        if self.scroll_focused {
            self.scroller.focus_in();
        } else {
            self.scroller.focus_out(now);
        }
    }

    fn pointer_at(&mut self, at: Position, now: Duration) {
        let inside = self.viewport.is_some_and(|v| v.area.contains(at));
        if inside == self.pointer_inside {
            return;
        }
        self.pointer_inside = inside;
        if inside {
            self.scroller.pointer_enter();
        } else {
            self.scroller.pointer_leave(now);
        }
    }

    fn apply_viewport(&mut self, viewport: MeetingViewport, now: Duration) {
        debug!(
            "Meeting region {}x{}: {} visible",
            viewport.rows.width, viewport.rows.height, viewport.visible
        );
        self.viewport = Some(viewport);
        self.scroller.resize(
            viewport.item_extent,
            viewport.visible,
            viewport.viewport_extent,
            now,
        );
    }
}

fn build_motion(config: &ScrollConfig) -> Box<dyn ScrollMotion> {
    match config.mode {
        ScrollMode::Table => Box::new(SmoothMotion::new(config.row_speed_px_per_sec)),
        ScrollMode::Carousel => select_carousel(EnhancedCarousel::detect(config), config),
    }
}

/// App over the sample meetings at 2000-01-01 09:05, monotonic zero
#[cfg(test)]
pub(crate) fn test_app() -> App {
    test_app_with(AppConfig::default())
}

#[cfg(test)]
pub(crate) fn test_app_with(config: AppConfig) -> App {
    let local = chrono::NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.and_hms_opt(9, 5, 0))
        .unwrap();
    App::new(config, Duration::ZERO, local)
}

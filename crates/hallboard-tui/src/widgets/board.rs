use std::time::Duration;

use hallboard_core::ScrollMode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::{
    HeaderWidget, MeetingCarouselWidget, MeetingTableWidget, NextMeetingWidget, PopupWidget,
    StatusBarWidget, StatusPanelWidget,
};
use crate::app::{App, Mode};

/// Regions of the board for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub header: Rect,
    pub status: Rect,
    pub next: Rect,
    pub meetings: Rect,
    /// Hidden in kiosk mode
    pub status_bar: Option<Rect>,
}

impl BoardLayout {
    pub fn compute(area: Rect, fullscreen: bool) -> Self {
        let bar_height = if fullscreen { 0 } else { 1 };

        // Main layout: header + body + status bar
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HeaderWidget::height(fullscreen)),
                Constraint::Min(0),
                Constraint::Length(bar_height),
            ])
            .split(area);

        // Status panel beside the meetings column
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
            .split(main[1]);

        let meetings = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(NextMeetingWidget::height(fullscreen)),
                Constraint::Min(0),
            ])
            .split(body[1]);

        Self {
            header: main[0],
            status: body[0],
            next: meetings[0],
            meetings: meetings[1],
            status_bar: (!fullscreen).then_some(main[2]),
        }
    }
}

/// Draw the whole board. Records the meeting region on the app so scrolling
/// follows the layout.
pub fn draw(frame: &mut Frame, app: &mut App, now: Duration) {
    let layout = BoardLayout::compute(frame.area(), app.fullscreen);
    app.observe_meeting_area(layout.meetings, now);

    HeaderWidget::render(frame, layout.header, app);
    StatusPanelWidget::render(frame, layout.status, app);
    NextMeetingWidget::render(frame, layout.next, app);
    match app.config.scroll.mode {
        ScrollMode::Table => MeetingTableWidget::render(frame, layout.meetings, app),
        ScrollMode::Carousel => MeetingCarouselWidget::render(frame, layout.meetings, app),
    }
    if let Some(bar) = layout.status_bar {
        StatusBarWidget::render(frame, bar, app);
    }

    // Render popup on top
    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, app);
    }
}

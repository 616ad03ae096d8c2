use hallboard_core::Region;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};
use crate::input::Action;
use crate::scroll::{MotionKind, PauseReason, Playback};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.surface.theme();

        let mode_str = match app.mode {
            Mode::Normal => "BOARD",
            Mode::Help => "HELP",
        };

        let playback_str = match app.scroller.playback() {
            Playback::Running => "SCROLLING",
            Playback::Paused(PauseReason::Manual) => "HOLD",
            Playback::Paused(PauseReason::Interaction { .. }) => "PAUSED",
            Playback::Static => "STATIC",
            Playback::Detached => "STOPPED",
        };

        let motion_str = match app.scroller.motion_kind() {
            MotionKind::Smooth => "table",
            MotionKind::Enhanced => "carousel",
            MotionKind::Fallback => "carousel (basic)",
        };

        let status_text = format!(
            " {} | {} | {} | {} | Meetings: {}",
            mode_str,
            playback_str,
            motion_str,
            app.surface.text(Region::StatusLabel),
            app.meetings.len()
        );

        let key = |action: Action| app.keymap.describe(&action).unwrap_or_else(|| "-".to_string());
        let help_hint = format!(
            " {}:quit {}:status {}:hold {}:help ",
            key(Action::Quit),
            key(Action::CycleStatus),
            key(Action::ToggleFocus),
            key(Action::Help)
        );

        let padding_len = usize::from(area.width)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg1)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg1)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg1)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

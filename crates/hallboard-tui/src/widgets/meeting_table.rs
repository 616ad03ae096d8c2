use hallboard_core::ScrollMode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{displayed_meetings, fit, meeting_rows_area};
use crate::app::App;
use crate::scroll::timing::px_to_cells;

/// Lines per meeting row: English title, then Arabic title
pub const ROW_LINES: u16 = 2;

const TIME_WIDTH: usize = 15;
const ATTENDEES_WIDTH: usize = 10;

/// Smoothly scrolling meeting table
pub struct MeetingTableWidget;

impl MeetingTableWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.surface.theme();

        let border_style = if app.scroll_focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.grey0)
        };
        let title = if app.scroller.is_paused() {
            " Schedule | الجدول  [paused] "
        } else {
            " Schedule | الجدول "
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.is_empty() {
            return;
        }

        let title_width = usize::from(inner.width).saturating_sub(TIME_WIDTH + ATTENDEES_WIDTH);

        let header = Line::from(Span::styled(
            format!(
                "{}{}{:>width$}",
                fit(" Time", TIME_WIDTH),
                fit("Meeting", title_width),
                "Attendees ",
                width = ATTENDEES_WIDTH
            ),
            Style::default().fg(theme.grey1).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(
            Paragraph::new(header),
            Rect { height: 1, ..inner },
        );

        let rows = meeting_rows_area(area, ScrollMode::Table);
        if rows.is_empty() {
            return;
        }

        let now = app.snapshot.taken_at.time();
        let mut lines = Vec::new();
        for meeting in displayed_meetings(app) {
            let in_progress = meeting.is_in_progress(now);
            let (marker, time_style) = if in_progress {
                ("●", Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD))
            } else {
                (" ", Style::default().fg(theme.grey1))
            };
            let row_style = if in_progress {
                Style::default().bg(theme.bg1)
            } else {
                Style::default()
            };

            lines.push(
                Line::from(vec![
                    Span::styled(
                        fit(&format!("{}{}", marker, meeting.time_range), TIME_WIDTH),
                        time_style,
                    ),
                    Span::styled(
                        fit(&meeting.title.en, title_width),
                        Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:>width$} ", meeting.attendees, width = ATTENDEES_WIDTH - 1),
                        Style::default().fg(theme.accent),
                    ),
                ])
                .style(row_style),
            );
            lines.push(
                Line::from(vec![
                    Span::raw(fit("", TIME_WIDTH)),
                    Span::styled(fit(&meeting.title.ar, title_width), Style::default().fg(theme.grey1)),
                    Span::raw(fit("", ATTENDEES_WIDTH)),
                ])
                .style(row_style),
            );
        }

        let skip = px_to_cells(app.scroller.offset(), app.config.scroll.px_per_line)
            .min(ROW_LINES - 1);
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().bg(theme.bg0))
                .scroll((skip, 0)),
            rows,
        );

        // Edge fade where rows scroll in and out
        if rows.height >= 4 {
            let fade = Style::default().bg(theme.fade);
            let buffer = frame.buffer_mut();
            buffer.set_style(Rect { height: 1, ..rows }, fade);
            buffer.set_style(
                Rect {
                    y: rows.bottom() - 1,
                    height: 1,
                    ..rows
                },
                fade,
            );
        }
    }
}

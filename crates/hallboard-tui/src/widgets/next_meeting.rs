use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Card with the meeting in progress and the next one to start
pub struct NextMeetingWidget;

impl NextMeetingWidget {
    /// Rows the card needs; emphasized in kiosk mode
    pub fn height(fullscreen: bool) -> u16 {
        if fullscreen {
            6
        } else {
            5
        }
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.surface.theme();

        let (border_type, border_style) = if app.fullscreen {
            (BorderType::Thick, Style::default().fg(theme.accent))
        } else {
            (BorderType::Rounded, Style::default().fg(theme.grey0))
        };
        let block = Block::default()
            .title(" Up next | التالي ")
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .style(Style::default().bg(theme.bg1));

        let label = Style::default().fg(theme.grey1);
        let mut lines = Vec::new();

        if let Some(current) = app.current_meeting() {
            lines.push(Line::from(vec![
                Span::styled("Now   ", label),
                Span::styled(current.time_range.as_str(), Style::default().fg(theme.highlight)),
                Span::raw("  "),
                Span::styled(current.title.joined(), Style::default().fg(theme.fg0)),
            ]));
        }

        match app.upcoming_meeting() {
            Some(next) => {
                lines.push(Line::from(vec![
                    Span::styled("Next  ", label),
                    Span::styled(
                        next.time_range.as_str(),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        next.title.en.as_str(),
                        Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::from(vec![
                    Span::raw("      "),
                    Span::styled(next.title.ar.as_str(), label),
                    Span::styled(format!("  ({} attendees)", next.attendees), label),
                ]));
            }
            None => lines.push(Line::from(Span::styled(
                "No more meetings today | لا توجد اجتماعات أخرى اليوم",
                label,
            ))),
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

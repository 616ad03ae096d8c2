use hallboard_core::Region;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;

/// Room name, clock, Gregorian date and Hijri date
pub struct HeaderWidget;

impl HeaderWidget {
    /// Rows the header needs
    pub fn height(fullscreen: bool) -> u16 {
        if fullscreen {
            2
        } else {
            3
        }
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.surface.theme();
        let base = Style::default().fg(theme.text).bg(theme.header_bg);

        frame.render_widget(Block::default().style(base), area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1); 3])
            .split(area);

        // Kiosk mode drops the room name row
        let info_row = if app.fullscreen {
            rows[0]
        } else {
            let room = Line::from(vec![
                Span::styled(
                    app.config.display.room_name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" | "),
                Span::raw(app.config.display.room_name_ar.as_str()),
            ]);
            frame.render_widget(
                Paragraph::new(room).alignment(Alignment::Center).style(base),
                rows[0],
            );
            rows[1]
        };

        let mut texts = vec![
            (Region::Clock, Alignment::Left),
            (Region::Date, Alignment::Center),
        ];
        if app.config.display.show_hijri {
            texts.push((Region::Hijri, Alignment::Right));
        } else {
            texts[1].1 = Alignment::Right;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, texts.len() as u32); texts.len()])
            .split(info_row);

        for ((region, alignment), column) in texts.into_iter().zip(columns.iter()) {
            let style = if region == Region::Clock {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            let text = format!(" {} ", app.surface.text(region));
            frame.render_widget(
                Paragraph::new(Span::styled(text, style)).alignment(alignment),
                *column,
            );
        }
    }
}

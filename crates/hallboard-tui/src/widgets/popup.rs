use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::app::App;
use crate::input::Action;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key binding overlay
    pub fn render_help(frame: &mut Frame, app: &App) {
        let theme = app.surface.theme();
        let entries = [
            (Action::Quit, "Quit"),
            (Action::CycleStatus, "Cycle status"),
            (Action::ToggleFullscreen, "Toggle kiosk mode"),
            (Action::ToggleFocus, "Hold / release the list"),
            (Action::StepForward, "Next meeting"),
            (Action::StepBack, "Previous meeting"),
            (Action::Help, "This help"),
        ];

        let mut lines: Vec<Line> = entries
            .into_iter()
            .map(|(action, description)| {
                let key = app.keymap.describe(&action).unwrap_or_else(|| "-".to_string());
                Line::from(vec![
                    Span::styled(
                        format!("{:>8}  ", key),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "Hover or scroll over the list to pause it",
                Style::default().fg(theme.grey1),
            ))
            .alignment(Alignment::Center),
        );

        // Calculate popup size - centered, reasonable width
        let area = frame.area();
        let popup_area: Rect = centered_rect(48, lines.len() as u16 + 2, area);

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

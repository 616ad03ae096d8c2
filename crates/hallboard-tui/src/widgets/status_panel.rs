use hallboard_core::Region;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Large room status: gradient background, pulsing icon, bilingual label
pub struct StatusPanelWidget;

impl StatusPanelWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.is_empty() {
            return;
        }
        let theme = app.surface.theme();
        let status = app.surface.status();

        // Gradient stops as horizontal bands, top to bottom
        let stops = theme.gradient.len();
        for row in 0..area.height {
            let stop = usize::from(row) * stops / usize::from(area.height);
            let band = Rect::new(area.x, area.y + row, area.width, 1);
            frame
                .buffer_mut()
                .set_style(band, Style::default().bg(theme.gradient[stop]));
        }

        let icon_color = if app.pulse_on { theme.pulse } else { theme.text };
        let lines = vec![
            Line::from(Span::styled(
                app.surface.text(Region::StatusIcon).to_string(),
                Style::default().fg(icon_color).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                status.label.to_uppercase(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(status.label_ar),
        ];

        let height = (lines.len() as u16).min(area.height);
        let y = area.y + (area.height - height) / 2;
        let text_area = Rect::new(area.x, y, area.width, height);

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.text)),
            text_area,
        );
    }
}

use hallboard_core::{MeetingRecord, ScrollMode};
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
use crate::theme::Theme;

/// Columns per card, including the gap after it
pub const CARD_WIDTH: u16 = 30;

const CARD_GAP: usize = 2;
const CARD_HEIGHT: u16 = 6;

/// Horizontally sliding meeting cards
pub struct MeetingCarouselWidget;

impl MeetingCarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.surface.theme();

        let border_style = if app.scroll_focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.grey0)
        };
        let block = Block::default()
            .title(" Meetings | الاجتماعات ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.bg0));
        frame.render_widget(block, area);

        let rows = meeting_rows_area(area, ScrollMode::Carousel);
        if rows.is_empty() {
            return;
        }

        let now = app.snapshot.taken_at.time();
        let mut lines: Vec<Line> = (0..CARD_HEIGHT).map(|_| Line::default()).collect();
        for meeting in displayed_meetings(app) {
            let card = card_lines(meeting, meeting.is_in_progress(now), theme);
            for (line, span) in lines.iter_mut().zip(card) {
                line.spans.push(span);
            }
        }

        let height = CARD_HEIGHT.min(rows.height);
        lines.truncate(usize::from(height));
        let card_area = Rect {
            y: rows.y + (rows.height - height) / 2,
            height,
            ..rows
        };

        let shift = px_to_cells(app.scroller.offset(), app.config.scroll.px_per_column)
            .min(CARD_WIDTH - 1);
        frame.render_widget(Paragraph::new(lines).scroll((0, shift)), card_area);
    }
}

/// One card as `CARD_HEIGHT` spans of exactly `CARD_WIDTH` columns
fn card_lines(meeting: &MeetingRecord, in_progress: bool, theme: &Theme) -> Vec<Span<'static>> {
    let inner = usize::from(CARD_WIDTH) - CARD_GAP - 4;
    let gap = " ".repeat(CARD_GAP);

    let frame_style = if in_progress {
        Style::default().fg(theme.highlight)
    } else {
        Style::default().fg(theme.accent)
    };
    let body = |text: &str, style: Style| {
        Span::styled(format!("│ {} │{}", fit(text, inner), gap), style)
    };

    let time = if in_progress {
        format!("● {}", meeting.time_range)
    } else {
        meeting.time_range.clone()
    };

    vec![
        Span::styled(format!("╭{}╮{}", "─".repeat(inner + 2), gap), frame_style),
        body(&time, frame_style.add_modifier(Modifier::BOLD)),
        body(&meeting.title.en, Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)),
        body(&meeting.title.ar, Style::default().fg(theme.grey1)),
        body(&format!("{} attendees", meeting.attendees), Style::default().fg(theme.grey1)),
        Span::styled(format!("╰{}╯{}", "─".repeat(inner + 2), gap), frame_style),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_cards_have_fixed_width() {
        let theme = Theme::default();
        let meeting = MeetingRecord::new(
            "10:45 - 11:30",
            "A very long vendor presentation title",
            "عرض المورد",
            15,
        );
        for in_progress in [false, true] {
            let card = card_lines(&meeting, in_progress, &theme);
            assert_eq!(card.len(), usize::from(CARD_HEIGHT));
            for span in card {
                assert_eq!(span.content.width(), usize::from(CARD_WIDTH));
            }
        }
    }
}

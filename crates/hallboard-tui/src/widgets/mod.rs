mod board;
mod header;
mod meeting_carousel;
mod meeting_table;
mod next_meeting;
mod popup;
mod status_bar;
mod status_panel;

pub use board::{draw, BoardLayout};
pub use header::HeaderWidget;
pub use meeting_carousel::{MeetingCarouselWidget, CARD_WIDTH};
pub use meeting_table::{MeetingTableWidget, ROW_LINES};
pub use next_meeting::NextMeetingWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
pub use status_panel::StatusPanelWidget;

use hallboard_core::{MeetingRecord, ScrollMode};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::scroll::Playback;

/// Part of the meeting region the items scroll through: inside the border,
/// below the column header in table mode
pub fn meeting_rows_area(area: Rect, mode: ScrollMode) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    match mode {
        ScrollMode::Table => Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1),
            ..inner
        },
        ScrollMode::Carousel => inner,
    }
}

/// Items to draw in list order. A static list shows the dataset once.
pub(crate) fn displayed_meetings(app: &App) -> Vec<&MeetingRecord> {
    match app.scroller.playback() {
        Playback::Static => app.meetings.iter().collect(),
        _ => app.scroller.visible_items().collect(),
    }
}

/// Truncate or pad `text` to exactly `width` terminal columns
pub(crate) fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 3), "abc");
        assert_eq!(fit("", 2), "  ");
        // wide glyphs never overflow
        assert_eq!(fit("会議室", 5).width(), 5);
        assert_eq!(fit("القاعة الرئيسية", 6).width(), 6);
    }

    #[test]
    fn test_meeting_rows_area() {
        let area = Rect::new(0, 0, 40, 12);
        assert_eq!(
            meeting_rows_area(area, ScrollMode::Table),
            Rect::new(1, 2, 38, 9)
        );
        assert_eq!(
            meeting_rows_area(area, ScrollMode::Carousel),
            Rect::new(1, 1, 38, 10)
        );
        assert!(meeting_rows_area(Rect::new(0, 0, 2, 2), ScrollMode::Table).is_empty());
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(centered_rect(50, 10, area), Rect::new(25, 10, 50, 10));
        assert_eq!(centered_rect(200, 50, area), area);
    }
}

use std::collections::HashMap;

use hallboard_core::{DisplaySurface, Region, StatusDescriptor, StatusKey};
use tracing::trace;

use crate::theme::Theme;

/// Terminal-side store of the texts and colors the board shows.
///
/// Computed state is applied here; widgets only read from it.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    texts: HashMap<Region, String>,
    status: &'static StatusDescriptor,
    theme: Theme,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        let status = StatusKey::Available.descriptor();
        Self {
            texts: HashMap::new(),
            status,
            theme: Theme::for_status(status),
        }
    }
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text last written to a region, empty if none
    pub fn text(&self, region: Region) -> &str {
        self.texts.get(&region).map(String::as_str).unwrap_or("")
    }

    pub fn status(&self) -> &'static StatusDescriptor {
        self.status
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl DisplaySurface for TerminalSurface {
    fn write_text(&mut self, region: Region, text: &str) {
        trace!("Surface {:?} <- {:?}", region, text);
        self.texts.insert(region, text.to_string());
    }

    fn apply_status(&mut self, status: &'static StatusDescriptor) {
        self.status = status;
        self.theme = Theme::for_status(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hallboard_core::display::apply_status;
    use hallboard_core::DisplaySnapshot;

    #[test]
    fn test_snapshot_lands_in_regions() {
        let now = NaiveDate::from_ymd_opt(2000, 1, 1)
            .and_then(|d| d.and_hms_opt(9, 5, 0))
            .unwrap();
        let mut surface = TerminalSurface::new();
        DisplaySnapshot::compute(now, false).apply_to(&mut surface);

        assert_eq!(surface.text(Region::Clock), "09:05");
        assert_eq!(surface.text(Region::Date), "Saturday, January 1, 2000");
        assert!(surface.text(Region::Hijri).starts_with("24 "));
        assert_eq!(surface.text(Region::StatusLabel), "");
    }

    #[test]
    fn test_status_swaps_theme() {
        let mut surface = TerminalSurface::new();
        let before = surface.theme().accent;
        apply_status(&mut surface, StatusKey::Engaged.descriptor());

        assert_eq!(surface.status().key, StatusKey::Engaged);
        assert_eq!(surface.text(Region::StatusIcon), "✖");
        assert!(surface.text(Region::StatusLabel).starts_with("Engaged"));
        assert_ne!(surface.theme().accent, before);
    }
}

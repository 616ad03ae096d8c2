//! Computing what the board shows, separately from drawing it.
//!
//! [`DisplaySnapshot::compute`] is pure: wall-clock time in, texts out.
//! [`DisplaySurface`] is the seam to whatever actually draws the regions.

use chrono::{NaiveDateTime, Timelike};

use crate::calendar::HijriDate;
use crate::status::StatusDescriptor;

/// Named regions of the board that receive text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Clock,
    Date,
    Hijri,
    StatusLabel,
    StatusIcon,
}

/// Something that can present the board's computed state
pub trait DisplaySurface {
    fn write_text(&mut self, region: Region, text: &str);

    fn apply_status(&mut self, status: &'static StatusDescriptor);
}

/// Time, date and Hijri texts for one refresh tick
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySnapshot {
    pub taken_at: NaiveDateTime,
    pub time_text: String,
    pub date_text: String,
    pub hijri: HijriDate,
    pub hijri_text: String,
}

impl DisplaySnapshot {
    pub fn compute(now: NaiveDateTime, hour12: bool) -> Self {
        let time_text = if hour12 {
            now.format("%I:%M %p").to_string()
        } else {
            now.format("%H:%M").to_string()
        };
        let date_text = now.format("%A, %B %-d, %Y").to_string();
        let hijri = HijriDate::from_naive(now.date());

        Self {
            taken_at: now,
            time_text,
            date_text,
            hijri,
            hijri_text: hijri.to_string(),
        }
    }

    /// True once `now` falls in a different minute than the snapshot
    pub fn is_stale(&self, now: NaiveDateTime) -> bool {
        now.date() != self.taken_at.date()
            || now.hour() != self.taken_at.hour()
            || now.minute() != self.taken_at.minute()
    }

    /// Write the texts into their regions
    pub fn apply_to<S: DisplaySurface + ?Sized>(&self, surface: &mut S) {
        surface.write_text(Region::Clock, &self.time_text);
        surface.write_text(Region::Date, &self.date_text);
        surface.write_text(Region::Hijri, &self.hijri_text);
    }
}

/// Write a status into its regions
pub fn apply_status<S: DisplaySurface + ?Sized>(surface: &mut S, status: &'static StatusDescriptor) {
    surface.write_text(Region::StatusLabel, &status.bilingual_label());
    surface.write_text(Region::StatusIcon, status.glyph);
    surface.apply_status(status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusKey;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RecordingSurface {
        texts: HashMap<Region, String>,
        status: Option<StatusKey>,
    }

    impl DisplaySurface for RecordingSurface {
        fn write_text(&mut self, region: Region, text: &str) {
            self.texts.insert(region, text.to_string());
        }

        fn apply_status(&mut self, status: &'static StatusDescriptor) {
            self.status = Some(status.key);
        }
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_compute_texts() {
        let snap = DisplaySnapshot::compute(at(2000, 1, 1, 14, 5), false);
        assert_eq!(snap.time_text, "14:05");
        assert_eq!(snap.date_text, "Saturday, January 1, 2000");
        assert_eq!(snap.hijri_text, "24 Ramadan 1420 AH");
    }

    #[test]
    fn test_compute_12_hour() {
        let snap = DisplaySnapshot::compute(at(2000, 1, 1, 14, 5), true);
        assert_eq!(snap.time_text, "02:05 PM");
    }

    #[test]
    fn test_staleness() {
        let snap = DisplaySnapshot::compute(at(2024, 5, 1, 9, 30), false);
        assert!(!snap.is_stale(at(2024, 5, 1, 9, 30) + chrono::Duration::seconds(59)));
        assert!(snap.is_stale(at(2024, 5, 1, 9, 31)));
        assert!(snap.is_stale(at(2024, 5, 2, 9, 30)));
    }

    #[test]
    fn test_apply_writes_regions() {
        let mut surface = RecordingSurface::default();
        let snap = DisplaySnapshot::compute(at(2000, 1, 1, 8, 0), false);
        snap.apply_to(&mut surface);
        apply_status(&mut surface, StatusKey::Engaged.descriptor());

        assert_eq!(surface.texts[&Region::Clock], "08:00");
        assert_eq!(surface.texts[&Region::Hijri], "24 Ramadan 1420 AH");
        assert_eq!(surface.texts[&Region::StatusLabel], "Engaged | مشغول");
        assert_eq!(surface.texts[&Region::StatusIcon], "✖");
        assert_eq!(surface.status, Some(StatusKey::Engaged));
    }
}

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Text shown in both English and Arabic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    pub en: String,
    #[serde(default)]
    pub ar: String,
}

impl BilingualText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// "English | Arabic", or just the English text when no translation is set
    pub fn joined(&self) -> String {
        if self.ar.is_empty() {
            self.en.clone()
        } else {
            format!("{} | {}", self.en, self.ar)
        }
    }
}

/// A scheduled meeting as shown on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRecord {
    /// "HH:MM - HH:MM"
    pub time_range: String,
    #[serde(default)]
    pub attendees: u32,
    pub title: BilingualText,
}

impl MeetingRecord {
    pub fn new(
        time_range: impl Into<String>,
        title_en: impl Into<String>,
        title_ar: impl Into<String>,
        attendees: u32,
    ) -> Self {
        Self {
            time_range: time_range.into(),
            attendees,
            title: BilingualText::new(title_en, title_ar),
        }
    }

    /// Start of the time range, `None` if the range is malformed
    pub fn start_time(&self) -> Option<NaiveTime> {
        self.bounds().map(|(start, _)| start)
    }

    /// End of the time range, `None` if the range is malformed
    pub fn end_time(&self) -> Option<NaiveTime> {
        self.bounds().map(|(_, end)| end)
    }

    /// Whether the meeting is running at `time`
    pub fn is_in_progress(&self, time: NaiveTime) -> bool {
        self.bounds()
            .map(|(start, end)| start <= time && time < end)
            .unwrap_or(false)
    }

    fn bounds(&self) -> Option<(NaiveTime, NaiveTime)> {
        let (start, end) = self.time_range.split_once('-')?;
        let start = NaiveTime::parse_from_str(start.trim(), "%H:%M").ok()?;
        let end = NaiveTime::parse_from_str(end.trim(), "%H:%M").ok()?;
        Some((start, end))
    }
}

/// The first meeting that starts at or after `now`, by start time.
/// Records with a malformed time range are skipped.
pub fn next_meeting(records: &[MeetingRecord], now: NaiveTime) -> Option<&MeetingRecord> {
    records
        .iter()
        .filter_map(|m| m.start_time().map(|start| (start, m)))
        .filter(|(start, _)| *start >= now)
        .min_by_key(|(start, _)| *start)
        .map(|(_, m)| m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_time_range_parsing() {
        let m = MeetingRecord::new("09:00 - 10:30", "Standup", "", 4);
        assert_eq!(m.start_time(), Some(at(9, 0)));
        assert_eq!(m.end_time(), Some(at(10, 30)));
        assert!(m.is_in_progress(at(9, 45)));
        assert!(!m.is_in_progress(at(10, 30)));
    }

    #[test]
    fn test_malformed_range() {
        let m = MeetingRecord::new("soon", "Mystery", "", 1);
        assert_eq!(m.start_time(), None);
        assert!(!m.is_in_progress(at(12, 0)));
    }

    #[test]
    fn test_next_meeting() {
        let records = vec![
            MeetingRecord::new("14:00 - 15:00", "Review", "", 6),
            MeetingRecord::new("09:00 - 10:00", "Standup", "", 4),
            MeetingRecord::new("bad", "Broken", "", 0),
            MeetingRecord::new("11:00 - 12:00", "Planning", "", 8),
        ];
        assert_eq!(next_meeting(&records, at(8, 0)).unwrap().title.en, "Standup");
        assert_eq!(next_meeting(&records, at(10, 15)).unwrap().title.en, "Planning");
        assert!(next_meeting(&records, at(16, 0)).is_none());
    }

    #[test]
    fn test_joined_title() {
        assert_eq!(BilingualText::new("Board", "").joined(), "Board");
        assert_eq!(BilingualText::new("Board", "مجلس").joined(), "Board | مجلس");
    }
}

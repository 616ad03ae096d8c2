use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Room availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKey {
    Available,
    Engaged,
    Upcoming,
}

/// Everything the display needs to present one status
#[derive(Debug, Clone, PartialEq)]
pub struct StatusDescriptor {
    pub key: StatusKey,
    pub label: &'static str,
    pub label_ar: &'static str,
    /// Icon identifier in the board's icon set
    pub icon: &'static str,
    /// Terminal glyph for the icon
    pub glyph: &'static str,
    pub pulse_color: &'static str,
    /// Page background gradient, first stop to last
    pub gradient: [&'static str; 8],
    pub text_color: &'static str,
    /// Edge fade applied over the scrolling region
    pub fade_color: &'static str,
    pub fade_alpha: f32,
    pub header_bg: &'static str,
}

static AVAILABLE: StatusDescriptor = StatusDescriptor {
    key: StatusKey::Available,
    label: "Available",
    label_ar: "متـــــــاح",
    icon: "check",
    glyph: "✔",
    pulse_color: "#16a34a",
    gradient: [
        "#10b981", "#059669", "#047857", "#10b981", "#065f46", "#047857", "#064e3b", "#10b981",
    ],
    text_color: "#ffffff",
    fade_color: "#10b981",
    fade_alpha: 0.35,
    header_bg: "#10b981",
};

static ENGAGED: StatusDescriptor = StatusDescriptor {
    key: StatusKey::Engaged,
    label: "Engaged",
    label_ar: "مشغول",
    icon: "times",
    glyph: "✖",
    pulse_color: "#ef4444",
    gradient: [
        "#ef4444", "#dc2626", "#b91c1c", "#ef4444", "#991b1b", "#dc2626", "#7f1d1d", "#ef4444",
    ],
    text_color: "#ffffff",
    fade_color: "#ef4444",
    fade_alpha: 0.35,
    header_bg: "#ef4444",
};

static UPCOMING: StatusDescriptor = StatusDescriptor {
    key: StatusKey::Upcoming,
    label: "Starting Soon",
    label_ar: "يبدأ قريباً",
    icon: "clock",
    glyph: "◷",
    pulse_color: "#fb923c",
    gradient: [
        "#fb923c", "#f97316", "#ea580c", "#fb923c", "#c2410c", "#f97316", "#9a3412", "#fb923c",
    ],
    text_color: "#ffffff",
    fade_color: "#fb923c",
    fade_alpha: 0.35,
    header_bg: "#fb923c",
};

impl StatusKey {
    /// Cycle order of the status toggle
    pub const ALL: [StatusKey; 3] = [StatusKey::Available, StatusKey::Engaged, StatusKey::Upcoming];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKey::Available => "available",
            StatusKey::Engaged => "engaged",
            StatusKey::Upcoming => "upcoming",
        }
    }

    pub fn descriptor(&self) -> &'static StatusDescriptor {
        match self {
            StatusKey::Available => &AVAILABLE,
            StatusKey::Engaged => &ENGAGED,
            StatusKey::Upcoming => &UPCOMING,
        }
    }

    /// The status after this one in toggle order, wrapping around
    pub fn next(&self) -> StatusKey {
        match self {
            StatusKey::Available => StatusKey::Engaged,
            StatusKey::Engaged => StatusKey::Upcoming,
            StatusKey::Upcoming => StatusKey::Available,
        }
    }
}

impl fmt::Display for StatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(StatusKey::Available),
            "engaged" => Ok(StatusKey::Engaged),
            "upcoming" => Ok(StatusKey::Upcoming),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

impl StatusDescriptor {
    /// "English | Arabic" label
    pub fn bilingual_label(&self) -> String {
        format!("{} | {}", self.label, self.label_ar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(s: &str) -> bool {
        s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_descriptors_well_formed() {
        for key in StatusKey::ALL {
            let d = key.descriptor();
            assert_eq!(d.key, key);
            assert!(!d.label.is_empty());
            assert!(!d.label_ar.is_empty());
            assert!(!d.icon.is_empty());
            assert!(!d.glyph.is_empty());
            assert!(is_hex_color(d.pulse_color), "{:?}", key);
            assert!(is_hex_color(d.text_color), "{:?}", key);
            assert!(is_hex_color(d.fade_color), "{:?}", key);
            assert!(is_hex_color(d.header_bg), "{:?}", key);
            assert!(d.gradient.iter().all(|c| is_hex_color(c)), "{:?}", key);
            assert!(d.fade_alpha > 0.0 && d.fade_alpha <= 1.0);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(StatusKey::Available.descriptor().label, "Available");
        assert_eq!(StatusKey::Engaged.descriptor().label, "Engaged");
        assert_eq!(StatusKey::Upcoming.descriptor().label, "Starting Soon");
    }

    #[test]
    fn test_parse() {
        assert_eq!("available".parse::<StatusKey>().unwrap(), StatusKey::Available);
        assert_eq!(" Engaged ".parse::<StatusKey>().unwrap(), StatusKey::Engaged);
        assert_eq!("UPCOMING".parse::<StatusKey>().unwrap(), StatusKey::Upcoming);
        assert!(matches!(
            "busy".parse::<StatusKey>(),
            Err(Error::UnknownStatus(s)) if s == "busy"
        ));
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut key = StatusKey::Available;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(key);
            key = key.next();
        }
        assert_eq!(seen, StatusKey::ALL.to_vec());
        assert_eq!(key, StatusKey::Available);
    }

    #[test]
    fn test_display_roundtrip() {
        for key in StatusKey::ALL {
            assert_eq!(key.to_string().parse::<StatusKey>().unwrap(), key);
        }
    }
}

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::julian::GregorianDate;

/// Hijri month names, index 0 is month 1
pub const HIJRI_MONTHS: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-awwal",
    "Rabi al-thani",
    "Jumada al-awwal",
    "Jumada al-thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

/// JDN of 1 Muharram 1 AH in the civil (Friday) epoch
const HIJRI_EPOCH_JDN: i64 = 1_948_440;

/// Days in a 30-year tabular cycle
const CYCLE_DAYS: i64 = 10_631;

/// A date in the tabular Islamic calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i64,
    /// 1-12
    pub month: u32,
    /// 1-30
    pub day: u32,
}

impl HijriDate {
    /// English name of the month
    pub fn month_name(&self) -> &'static str {
        HIJRI_MONTHS[(self.month.clamp(1, 12) - 1) as usize]
    }

    /// Convert a chrono date (typically today's local date)
    pub fn from_naive(date: NaiveDate) -> Self {
        to_hijri(GregorianDate::from(date))
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} AH", self.day, self.month_name(), self.year)
    }
}

/// Convert a Gregorian date to the tabular Hijri calendar
pub fn to_hijri(date: GregorianDate) -> HijriDate {
    jdn_to_hijri(date.jdn())
}

/// Convert a Julian Day Number to the tabular Hijri calendar
pub fn jdn_to_hijri(jdn: i64) -> HijriDate {
    let l = jdn - HIJRI_EPOCH_JDN + CYCLE_DAYS + 1;
    // Whole 30-year cycles, floored so dates before the epoch land in negative cycles
    let n = (l - 1).div_euclid(CYCLE_DAYS);
    let l = l - CYCLE_DAYS * n + 354;

    // Year within the cycle
    let j = (10985 - l).div_euclid(5316) * (50 * l).div_euclid(17719)
        + l.div_euclid(5670) * (43 * l).div_euclid(15238);

    // Day of year, rebased so month and day fall out of the 709/24 relation
    let l = l
        - (30 - j).div_euclid(15) * (17719 * j).div_euclid(50)
        - j.div_euclid(16) * (15238 * j).div_euclid(43)
        + 29;

    let month = (24 * l).div_euclid(709);
    let day = l - (709 * month).div_euclid(24);
    let year = 30 * n + j - 30;

    HijriDate {
        year,
        month: month as u32,
        day: day as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hijri(year: i32, month: u32, day: u32) -> HijriDate {
        to_hijri(GregorianDate::new(year, month, day))
    }

    #[test]
    fn test_reference_date() {
        let h = hijri(2000, 1, 1);
        assert_eq!((h.year, h.month, h.day), (1420, 9, 24));
        assert_eq!(h.month_name(), "Ramadan");
    }

    #[test]
    fn test_known_dates() {
        let cases = [
            ((2024, 3, 11), (1445, 9, 1)),
            ((2023, 7, 19), (1445, 1, 1)),
            ((2025, 6, 26), (1446, 12, 29)),
            ((1970, 1, 1), (1389, 10, 22)),
            ((2026, 10, 16), (1448, 5, 4)),
        ];
        for ((y, m, d), (hy, hm, hd)) in cases {
            let h = hijri(y, m, d);
            assert_eq!((h.year, h.month, h.day), (hy, hm, hd), "{}-{}-{}", y, m, d);
        }
    }

    #[test]
    fn test_epoch_is_first_of_muharram() {
        let h = jdn_to_hijri(HIJRI_EPOCH_JDN);
        assert_eq!((h.year, h.month, h.day), (1, 1, 1));
        // proleptic Gregorian 19 July 622
        assert_eq!(hijri(622, 7, 19), h);
    }

    #[test]
    fn test_before_epoch_stays_in_range() {
        let h = hijri(500, 3, 1);
        assert_eq!((h.year, h.month, h.day), (-126, 11, 12));
    }

    #[test]
    fn test_ranges_and_day_progression() {
        let mut date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap();
        let mut prev = HijriDate::from_naive(date);

        while date < end {
            date = date.succ_opt().unwrap();
            let h = HijriDate::from_naive(date);
            assert!((1..=12).contains(&h.month), "{} -> {:?}", date, h);
            assert!((1..=30).contains(&h.day), "{} -> {:?}", date, h);

            if h.day == 1 {
                assert!(prev.day == 29 || prev.day == 30, "{} -> {:?}", date, prev);
                let expected_month = if prev.month == 12 { 1 } else { prev.month + 1 };
                assert_eq!(h.month, expected_month);
            } else {
                assert_eq!(h.day, prev.day + 1);
                assert_eq!((h.year, h.month), (prev.year, prev.month));
            }
            prev = h;
        }
    }

    #[test]
    fn test_deterministic() {
        let date = GregorianDate::new(2031, 5, 17);
        assert_eq!(to_hijri(date), to_hijri(date));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(hijri(2000, 1, 1).to_string(), "24 Ramadan 1420 AH");
        assert_eq!(hijri(2023, 7, 19).to_string(), "1 Muharram 1445 AH");
    }
}

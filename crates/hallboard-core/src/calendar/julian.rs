use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A proleptic Gregorian calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GregorianDate {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
}

impl GregorianDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Julian Day Number of this date
    pub fn jdn(&self) -> i64 {
        gregorian_to_jdn(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Convert a proleptic Gregorian date to its Julian Day Number.
///
/// All divisions are floor divisions with positive divisors, and the month
/// shift `a` is never negative, so the result stays exact for years before
/// any epoch as long as the arithmetic fits in `i64`.
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let year = i64::from(year);
    let month = i64::from(month);
    let day = i64::from(day);

    // 1 for January and February, 0 otherwise
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Offset between chrono's day count from 0001-01-01 (day 1) and the JDN
    const CE_TO_JDN: i64 = 1_721_425;

    #[test]
    fn test_j2000_epoch() {
        assert_eq!(gregorian_to_jdn(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn test_unix_epoch() {
        assert_eq!(gregorian_to_jdn(1970, 1, 1), 2_440_588);
    }

    #[test]
    fn test_month_and_year_boundaries_are_contiguous() {
        assert_eq!(gregorian_to_jdn(1999, 12, 31) + 1, gregorian_to_jdn(2000, 1, 1));
        assert_eq!(gregorian_to_jdn(2000, 2, 29) + 1, gregorian_to_jdn(2000, 3, 1));
        assert_eq!(gregorian_to_jdn(1900, 2, 28) + 1, gregorian_to_jdn(1900, 3, 1));
        assert_eq!(gregorian_to_jdn(2024, 1, 31) + 1, gregorian_to_jdn(2024, 2, 1));
    }

    #[test]
    fn test_matches_chrono_day_count() {
        let mut date = NaiveDate::from_ymd_opt(1850, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2150, 12, 31).unwrap();
        while date <= end {
            let expected = i64::from(date.num_days_from_ce()) + CE_TO_JDN;
            assert_eq!(GregorianDate::from(date).jdn(), expected, "{}", date);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_pre_epoch_years() {
        // 1 January 4713 BC (Julian) is JDN 0, i.e. 24 November -4713 proleptic Gregorian
        assert_eq!(gregorian_to_jdn(-4713, 11, 24), 0);
        assert_eq!(gregorian_to_jdn(-4713, 11, 23), -1);
    }
}

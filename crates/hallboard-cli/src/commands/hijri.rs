use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::Serialize;

use hallboard_core::{GregorianDate, HijriDate};

#[derive(Debug, Serialize)]
struct Conversion {
    gregorian: String,
    julian_day: i64,
    hijri: HijriDate,
    month_name: &'static str,
    formatted: String,
}

impl Conversion {
    fn of(date: NaiveDate) -> Self {
        let hijri = HijriDate::from_naive(date);
        Self {
            gregorian: date.format("%Y-%m-%d").to_string(),
            julian_day: GregorianDate::from(date).jdn(),
            hijri,
            month_name: hijri.month_name(),
            formatted: hijri.to_string(),
        }
    }
}

pub fn run(date: Option<NaiveDate>, json: bool) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let conversion = Conversion::of(date);

    if json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        println!("{}  ->  {}", conversion.gregorian, conversion.formatted);
        println!("Julian day: {}", conversion.julian_day);
        println!("(tabular Hijri calendar; may differ by a day or two from observed dates)");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_fields() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let conversion = Conversion::of(date);
        assert_eq!(conversion.gregorian, "2000-01-01");
        assert_eq!(conversion.julian_day, 2_451_545);
        assert_eq!(conversion.month_name, "Ramadan");
        assert_eq!(conversion.formatted, "24 Ramadan 1420 AH");
    }

    #[test]
    fn test_json_shape() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let value = serde_json::to_value(Conversion::of(date)).unwrap();
        assert_eq!(value["hijri"]["year"], 1445);
        assert_eq!(value["hijri"]["month"], 9);
        assert_eq!(value["hijri"]["day"], 1);
        assert_eq!(value["julian_day"], 2_460_381);
    }
}

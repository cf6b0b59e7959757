//! Proleptic-Gregorian calendar dates with a linear day-number mapping.
//!
//! The date digest in signature derivation is the count of days since
//! 1970-01-01, so the conversion here must be exact for any birth year.
//! Both directions use the standard era-based civil-date algorithms.

use super::error::ChartError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Build a date, validating month and day-in-month (leap years
    /// included).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        if month == 0 || month > 12 {
            return None;
        }
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Parse `YYYY-MM-DD` form text, as submitted by a date field.
    pub fn parse(text: &str) -> Result<Self, ChartError> {
        let invalid = || ChartError::InvalidDate {
            text: text.to_string(),
        };

        let mut parts = text.splitn(3, '-');
        let year = parts.next().and_then(|p| p.parse::<i32>().ok());
        let month = parts.next().and_then(|p| p.parse::<u8>().ok());
        let day = parts.next().and_then(|p| p.parse::<u8>().ok());

        match (year, month, day) {
            (Some(y), Some(m), Some(d)) => Self::from_ymd(y, m, d).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }

    /// Today according to the system clock. Used only to reject
    /// future-dated input; derivation never consults it.
    pub fn today() -> Self {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        Self::from_day_number(secs.div_euclid(86_400))
    }

    /// Days since 1970-01-01, negative for earlier dates.
    pub fn day_number(&self) -> i64 {
        let y = self.year as i64 - if self.month <= 2 { 1 } else { 0 };
        let m = self.month as i64;
        let d = self.day as i64;

        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let doy = (153 * (m + if m > 2 { -3 } else { 9 }) + 2) / 5 + d - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;

        era * 146_097 + doe - 719_468
    }

    /// Inverse of [`day_number`](Self::day_number).
    pub fn from_day_number(days: i64) -> Self {
        let z = days + 719_468;
        let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = (y + i64::from(month <= 2)) as i32;

        Self { year, month, day }
    }

    /// One-based ordinal of this date within its year.
    pub fn day_of_year(&self) -> i64 {
        let jan_first = Self {
            year: self.year,
            month: 1,
            day: 1,
        };
        self.day_number() - jan_first.day_number() + 1
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_day_zero() {
        let epoch = CivilDate::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(epoch.day_number(), 0);
        assert_eq!(CivilDate::from_day_number(0), epoch);
    }

    #[test]
    fn known_day_numbers() {
        assert_eq!(
            CivilDate::from_ymd(2000, 1, 1).unwrap().day_number(),
            10_957
        );
        assert_eq!(CivilDate::from_ymd(1969, 12, 31).unwrap().day_number(), -1);
    }

    #[test]
    fn day_number_round_trips() {
        for &(y, m, d) in &[
            (1900, 2, 28),
            (1952, 6, 15),
            (2000, 2, 29),
            (2023, 12, 31),
            (1800, 1, 1),
        ] {
            let date = CivilDate::from_ymd(y, m, d).unwrap();
            assert_eq!(CivilDate::from_day_number(date.day_number()), date);
        }
    }

    #[test]
    fn leap_day_validation() {
        assert!(CivilDate::from_ymd(2000, 2, 29).is_some());
        assert!(CivilDate::from_ymd(1900, 2, 29).is_none());
        assert!(CivilDate::from_ymd(2023, 2, 29).is_none());
        assert!(CivilDate::from_ymd(2024, 2, 29).is_some());
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(CivilDate::from_ymd(2000, 0, 1).is_none());
        assert!(CivilDate::from_ymd(2000, 13, 1).is_none());
        assert!(CivilDate::from_ymd(2000, 4, 31).is_none());
        assert!(CivilDate::from_ymd(2000, 1, 0).is_none());
    }

    #[test]
    fn parses_form_dates() {
        let date = CivilDate::parse("1988-07-04").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1988, 7, 4));

        assert!(CivilDate::parse("").is_err());
        assert!(CivilDate::parse("1988-07").is_err());
        assert!(CivilDate::parse("not-a-date").is_err());
        assert!(CivilDate::parse("1988-13-04").is_err());
    }

    #[test]
    fn day_of_year_counts_from_one() {
        assert_eq!(CivilDate::from_ymd(2026, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(CivilDate::from_ymd(2026, 8, 4).unwrap().day_of_year(), 216);
        assert_eq!(
            CivilDate::from_ymd(2024, 12, 31).unwrap().day_of_year(),
            366
        );
    }

    #[test]
    fn displays_iso_form() {
        let date = CivilDate::from_ymd(431, 3, 9).unwrap();
        assert_eq!(date.to_string(), "0431-03-09");
    }
}

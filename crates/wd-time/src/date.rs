//! `Date` — a calendar date without a time component.
//!
//! Dates are stored as a serial day number.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31; anything that would
//!   leave it is reported as [`Error::Date`].

use std::str::FromStr;

use crate::weekday::Weekday;
use wd_core::ensure;
use wd_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
///
/// `Date` is `Copy` and never mutated in place: arithmetic returns a new
/// value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        (1..m).map(|mon| days_in_month(y, mon) as u16).sum::<u16>() + d as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 → Monday, serial 2 → Tuesday, …
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Move by `n` calendar days (negative moves backwards).
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).ok_or_else(|| {
            Error::Date(format!("date arithmetic: {self} + {n} days overflows"))
        })?;
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "date arithmetic: {self} + {n} days is out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the *n*-th occurrence of `weekday` in `year`/`month`.
    ///
    /// For example, `nth_weekday(4, Weekday::Thursday, 2023, 11)` returns the
    /// fourth Thursday of November 2023 (2023-11-23).
    ///
    /// # Errors
    /// Returns [`Error::Precondition`] unless `1 <= n <= 5`, and a date
    /// error if the month has fewer than `n` such weekdays or is out of
    /// range.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        ensure!((1..=5).contains(&n), "nth_weekday: n must be in [1, 5], got {n}");
        let first = Date::from_ymd(year, month, 1)?;
        let skip = (weekday.ordinal() as i32 - first.weekday().ordinal() as i32).rem_euclid(7);
        let day = 1 + skip as u8 + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }

    /// Return the last occurrence of `weekday` in `year`/`month`.
    pub fn last_weekday(weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        let first = Date::from_ymd(year, month, 1)?;
        let last = first.add_days(days_in_month(year, month) as i32 - 1)?;
        let back = (last.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        last.add_days(-back)
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidArgument(format!("expected YYYY-MM-DD, got {s:?}"));
        let mut parts = s.trim().splitn(3, '-');
        let mut next = || parts.next().ok_or_else(invalid);
        let (y, m, d) = (next()?, next()?, next()?);
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(invalid());
        }
        let year = y.parse::<u16>().map_err(|_| invalid())?;
        let month = m.parse::<u8>().map_err(|_| invalid())?;
        let day = d.parse::<u8>().map_err(|_| invalid())?;
        Date::from_ymd(year, month, day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(date: Date) -> Self {
        let (y, m, d) = date.ymd();
        chrono::NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32)
            .expect("every Date is a valid chrono::NaiveDate")
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(date.year())
            .map_err(|_| Error::Date(format!("year {} out of range [1900, 2199]", date.year())))?;
        Date::from_ymd(year, date.month() as u8, date.day() as u8)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Convert (year, month, day) to a serial number. Serial 1 = 1900-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    // Days in the whole years 1900..year, then leap days in [1901, year).
    let mut serial = (y - 1900) * 365;
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1900, 1, 1).serial(), 1);
        assert_eq!(date(1900, 1, 1), Date::MIN);
        assert_eq!(date(2199, 12, 31), Date::MAX);
    }

    #[test]
    fn test_ymd_components() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29),
            (2100, 2, 28),
            (2023, 1, 2),
            (2024, 12, 31),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            assert_eq!(date(y, m, d).ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2023, 1, 1).weekday(), Weekday::Sunday);
        assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
        assert_eq!(date(2023, 7, 4).weekday(), Weekday::Tuesday);
    }

    #[test]
    fn test_invalid_components() {
        assert!(matches!(Date::from_ymd(1899, 12, 31), Err(Error::Date(_))));
        assert!(matches!(Date::from_ymd(2200, 1, 1), Err(Error::Date(_))));
        assert!(matches!(Date::from_ymd(2023, 13, 1), Err(Error::Date(_))));
        assert!(matches!(Date::from_ymd(2023, 2, 29), Err(Error::Date(_))));
        assert!(matches!(Date::from_serial(0), Err(Error::Date(_))));
    }

    #[test]
    fn test_add_days() {
        let d = date(2023, 1, 1);
        assert_eq!(d.add_days(31).unwrap(), date(2023, 2, 1));
        assert_eq!(d.add_days(-1).unwrap(), date(2022, 12, 31));
        assert_eq!(date(2023, 2, 1) - d, 31);
        assert_eq!(d.days_between(date(2023, 2, 1)), 31);
    }

    #[test]
    fn test_add_days_out_of_range() {
        assert!(matches!(Date::MAX.add_days(1), Err(Error::Date(_))));
        assert!(matches!(Date::MIN.add_days(-1), Err(Error::Date(_))));
        assert!(matches!(Date::MAX.add_days(i32::MAX), Err(Error::Date(_))));
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(2023, 1, 1).day_of_year(), 1);
        assert_eq!(date(2024, 3, 1).day_of_year(), 61);
        assert_eq!(date(2023, 12, 31).day_of_year(), 365);
    }

    #[test]
    fn test_nth_weekday() {
        // Thanksgiving 2023
        let d = Date::nth_weekday(4, Weekday::Thursday, 2023, 11).unwrap();
        assert_eq!(d, date(2023, 11, 23));
        // Labor Day 2023
        let d = Date::nth_weekday(1, Weekday::Monday, 2023, 9).unwrap();
        assert_eq!(d, date(2023, 9, 4));
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, 2).is_err());
        assert!(matches!(
            Date::nth_weekday(0, Weekday::Monday, 2024, 1),
            Err(Error::Precondition(_))
        ));
        assert!(Date::nth_weekday(40, Weekday::Monday, 2024, 1).is_err());
    }

    #[test]
    fn test_last_weekday() {
        // Memorial Day
        assert_eq!(Date::last_weekday(Weekday::Monday, 2023, 5).unwrap(), date(2023, 5, 29));
        assert_eq!(Date::last_weekday(Weekday::Monday, 2021, 5).unwrap(), date(2021, 5, 31));
        assert_eq!(Date::last_weekday(Weekday::Friday, 2024, 2).unwrap(), date(2024, 2, 23));
    }

    #[test]
    fn test_display_and_parse() {
        let d = date(2023, 7, 4);
        assert_eq!(d.to_string(), "2023-07-04");
        assert_eq!(format!("{d:?}"), "Date(2023-07-04)");
        assert_eq!("2023-07-04".parse::<Date>().unwrap(), d);
        assert_eq!(" 2023-07-04 ".parse::<Date>().unwrap(), d);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for s in ["", "2023-7-4", "2023/07/04", "20230704", "2023-07-xx", "2023-02-30"] {
            assert!(s.parse::<Date>().is_err(), "{s:?} should not parse");
        }
        assert!(matches!("2023-02-30".parse::<Date>(), Err(Error::Date(_))));
        assert!(matches!("2023-7-4".parse::<Date>(), Err(Error::InvalidArgument(_))));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_round_trip() {
        let d = date(2024, 2, 29);
        let naive: chrono::NaiveDate = d.into();
        assert_eq!(naive, chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(Date::try_from(naive).unwrap(), d);
        let early = chrono::NaiveDate::from_ymd_opt(1850, 1, 1).unwrap();
        assert!(Date::try_from(early).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_iso_string() {
        let d = date(2023, 11, 23);
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2023-11-23\"");
        assert_eq!(serde_json::from_str::<Date>("\"2023-11-23\"").unwrap(), d);
        assert!(serde_json::from_str::<Date>("\"2023-11-31\"").is_err());
    }
}

//! Observed US federal-style holidays.
//!
//! The table for a year holds nine entries:
//! * New Year's Day (Jan 1; if Sat → Fri; if Sun → Mon)
//! * Memorial Day (last Mon in May)
//! * Independence Day (Jul 4; if Sat → Fri; if Sun → Mon)
//! * Labor Day (1st Mon in Sep)
//! * Thanksgiving Day (4th Thu in Nov)
//! * Christmas Eve (Dec 24; if Sat → Fri; if Sun → Mon)
//! * Christmas Day (Dec 25; if Sat → Fri; if Sun → Mon)
//! * New Year's Eve (Dec 31; if Sat → Fri; if Sun → Mon)
//! * New Year's Day of the following year (shifted the same way)
//!
//! Weekday-rule holidays never fall on a weekend and are not shifted.
//! Shifted holidays can collide (Christmas Eve on a Friday pulls a Saturday
//! Christmas onto the same Friday), so a [`HolidaySet`] may hold fewer than
//! nine dates.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::ops::Bound;

use tracing::debug;

use crate::date::Date;
use crate::weekday::Weekday;
use wd_core::errors::{Result, ResultExt};

const US_HOLIDAYS: &str = concat!(module_path!(), "::us_holidays");
const OBSERVED_US_HOLIDAYS: &str = concat!(module_path!(), "::observed_us_holidays");

// ── Holiday ───────────────────────────────────────────────────────────────────

/// A named entry of the US holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holiday {
    /// January 1.
    NewYearsDay,
    /// Last Monday in May.
    MemorialDay,
    /// July 4.
    IndependenceDay,
    /// First Monday in September.
    LaborDay,
    /// Fourth Thursday in November.
    Thanksgiving,
    /// December 24.
    ChristmasEve,
    /// December 25.
    ChristmasDay,
    /// December 31.
    NewYearsEve,
    /// January 1 of the following year.
    NextNewYearsDay,
}

impl Holiday {
    /// Return `true` for fixed-date holidays that move off weekends.
    pub fn is_weekend_shifted(&self) -> bool {
        !matches!(
            self,
            Holiday::MemorialDay | Holiday::LaborDay | Holiday::Thanksgiving
        )
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Holiday::NewYearsDay => "New Year's Day",
            Holiday::MemorialDay => "Memorial Day",
            Holiday::IndependenceDay => "Independence Day",
            Holiday::LaborDay => "Labor Day",
            Holiday::Thanksgiving => "Thanksgiving Day",
            Holiday::ChristmasEve => "Christmas Eve",
            Holiday::ChristmasDay => "Christmas Day",
            Holiday::NewYearsEve => "New Year's Eve",
            Holiday::NextNewYearsDay => "New Year's Day (following year)",
        };
        write!(f, "{name}")
    }
}

/// One holiday of a year's table with its rule date and observed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservedHoliday {
    /// Which holiday this is.
    pub holiday: Holiday,
    /// The date given by the holiday's rule.
    pub nominal: Date,
    /// The date the holiday is observed on.
    pub observed: Date,
}

// ── HolidaySet ────────────────────────────────────────────────────────────────

/// Ordered, de-duplicating set of observed holiday dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet(BTreeSet<Date>);

impl HolidaySet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a date; returns `false` if it was already present.
    pub fn insert(&mut self, date: Date) -> bool {
        self.0.insert(date)
    }

    /// Return `true` if `date` is in the set.
    pub fn contains(&self, date: Date) -> bool {
        self.0.contains(&date)
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the set holds no dates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the dates in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, Date> {
        self.0.iter()
    }

    /// Merge `other` into `self`.
    pub fn union(mut self, other: HolidaySet) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Number of holidays `h` with `from < h < to`. Zero unless `from < to`.
    pub fn count_strictly_between(&self, from: Date, to: Date) -> usize {
        if from >= to {
            return 0;
        }
        self.0
            .range((Bound::Excluded(from), Bound::Excluded(to)))
            .count()
    }
}

impl FromIterator<Date> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        HolidaySet(iter.into_iter().collect())
    }
}

impl IntoIterator for HolidaySet {
    type Item = Date;
    type IntoIter = btree_set::IntoIter<Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a Date;
    type IntoIter = btree_set::Iter<'a, Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── Holiday rules ─────────────────────────────────────────────────────────────

/// Move a holiday that lands on a weekend to the date it is observed on:
/// Saturday → preceding Friday, Sunday → following Monday.
pub fn adjust_for_weekend_holiday(holiday: Date) -> Result<Date> {
    match holiday.weekday() {
        Weekday::Saturday => holiday.add_days(-1),
        Weekday::Sunday => holiday.add_days(1),
        _ => Ok(holiday),
    }
}

/// The US holiday table for `year`, each entry with its nominal and
/// observed date, in table order.
///
/// # Errors
/// Fails with [`wd_core::Error::Operation`] when any date of the table,
/// including January 1 of `year + 1`, is outside the supported range.
#[tracing::instrument(level = "debug")]
pub fn observed_us_holidays(year: u16) -> Result<Vec<ObservedHoliday>> {
    let table = holiday_table(year);
    if let Err(e) = &table {
        debug!(error = %e, "holiday table failed");
    }
    table.in_operation(OBSERVED_US_HOLIDAYS)
}

/// The set of observed US holidays for `year`, including the observed New
/// Year's Day of `year + 1`.
///
/// ```
/// use wd_time::{us_holidays, Date};
///
/// let holidays = us_holidays(2023).unwrap();
/// // Jan 1 2023 is a Sunday, observed Monday Jan 2.
/// assert!(holidays.contains(Date::from_ymd(2023, 1, 2).unwrap()));
/// assert!(holidays.contains(Date::from_ymd(2024, 1, 1).unwrap()));
/// ```
///
/// # Errors
/// Fails with [`wd_core::Error::Operation`] when any date of the table is
/// outside the supported range.
#[tracing::instrument(level = "debug")]
pub fn us_holidays(year: u16) -> Result<HolidaySet> {
    let set: Result<HolidaySet> =
        holiday_table(year).map(|table| table.into_iter().map(|h| h.observed).collect());
    if let Err(e) = &set {
        debug!(error = %e, "holiday set failed");
    }
    set.in_operation(US_HOLIDAYS)
}

fn holiday_table(year: u16) -> Result<Vec<ObservedHoliday>> {
    let next_year = year.saturating_add(1);
    let rules = [
        (Holiday::NewYearsDay, Date::from_ymd(year, 1, 1)?),
        (Holiday::MemorialDay, Date::last_weekday(Weekday::Monday, year, 5)?),
        (Holiday::IndependenceDay, Date::from_ymd(year, 7, 4)?),
        (Holiday::LaborDay, Date::nth_weekday(1, Weekday::Monday, year, 9)?),
        (Holiday::Thanksgiving, Date::nth_weekday(4, Weekday::Thursday, year, 11)?),
        (Holiday::ChristmasEve, Date::from_ymd(year, 12, 24)?),
        (Holiday::ChristmasDay, Date::from_ymd(year, 12, 25)?),
        (Holiday::NewYearsEve, Date::from_ymd(year, 12, 31)?),
        (Holiday::NextNewYearsDay, Date::from_ymd(next_year, 1, 1)?),
    ];
    rules
        .into_iter()
        .map(|(holiday, nominal)| -> Result<ObservedHoliday> {
            let observed = if holiday.is_weekend_shifted() {
                adjust_for_weekend_holiday(nominal)?
            } else {
                nominal
            };
            Ok(ObservedHoliday {
                holiday,
                nominal,
                observed,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekend_adjustment() {
        // Saturday → Friday
        assert_eq!(adjust_for_weekend_holiday(date(2020, 7, 4)).unwrap(), date(2020, 7, 3));
        // Sunday → Monday
        assert_eq!(adjust_for_weekend_holiday(date(2021, 7, 4)).unwrap(), date(2021, 7, 5));
        // Weekday unchanged
        assert_eq!(adjust_for_weekend_holiday(date(2023, 7, 4)).unwrap(), date(2023, 7, 4));
    }

    #[test]
    fn table_keeps_nominal_and_observed() {
        let table = observed_us_holidays(2023).unwrap();
        assert_eq!(table.len(), 9);
        let new_year = table[0];
        assert_eq!(new_year.holiday, Holiday::NewYearsDay);
        assert_eq!(new_year.nominal, date(2023, 1, 1));
        assert_eq!(new_year.observed, date(2023, 1, 2));
        let memorial = table[1];
        assert_eq!(memorial.holiday, Holiday::MemorialDay);
        assert_eq!(memorial.nominal, memorial.observed);
    }

    #[test]
    fn rule_holidays_are_not_shifted() {
        assert!(!Holiday::MemorialDay.is_weekend_shifted());
        assert!(!Holiday::LaborDay.is_weekend_shifted());
        assert!(!Holiday::Thanksgiving.is_weekend_shifted());
        assert!(Holiday::ChristmasEve.is_weekend_shifted());
    }

    #[test]
    fn count_strictly_between_excludes_bounds() {
        let set: HolidaySet = [date(2023, 1, 2), date(2023, 1, 4), date(2023, 1, 9)]
            .into_iter()
            .collect();
        assert_eq!(set.count_strictly_between(date(2023, 1, 2), date(2023, 1, 9)), 1);
        assert_eq!(set.count_strictly_between(date(2023, 1, 1), date(2023, 1, 10)), 3);
        assert_eq!(set.count_strictly_between(date(2023, 1, 4), date(2023, 1, 4)), 0);
        assert_eq!(set.count_strictly_between(date(2023, 1, 9), date(2023, 1, 1)), 0);
    }

    #[test]
    fn set_deduplicates() {
        let mut set = HolidaySet::new();
        assert!(set.insert(date(2023, 12, 25)));
        assert!(!set.insert(date(2023, 12, 25)));
        assert_eq!(set.len(), 1);
        let merged = set.union([date(2023, 12, 25), date(2024, 1, 1)].into_iter().collect());
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn holiday_names() {
        assert_eq!(Holiday::Thanksgiving.to_string(), "Thanksgiving Day");
        assert_eq!(Holiday::NewYearsEve.to_string(), "New Year's Eve");
    }
}

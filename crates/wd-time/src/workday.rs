//! Workday arithmetic: counting, adding and adjusting.
//!
//! All three operations work with whole weeks rather than walking the
//! calendar day by day. A week has 5 workdays (Monday–Friday) or 6 when
//! Saturday is worked; positions inside a week come from
//! [`Weekday::offset`] (Sunday = 0 … Saturday = 6).
//!
//! Every public function wraps a failure in [`wd_core::Error::Operation`]
//! naming itself, so callers can tell which operation ran out of the
//! supported date range and still reach the underlying error.

use tracing::{debug, trace};

use crate::config::WorkdayConfig;
use crate::date::Date;
use crate::holidays::{us_holidays, HolidaySet};
use crate::weekday::Weekday;
use wd_core::errors::{Error, Result, ResultExt};

const COUNT_WORKDAYS: &str = concat!(module_path!(), "::count_workdays");
const ADD_WORKDAYS: &str = concat!(module_path!(), "::add_workdays");
const ADJUST_TO_NEXT_WORKDAY: &str = concat!(module_path!(), "::adjust_to_next_workday");
const IS_WORKDAY: &str = concat!(module_path!(), "::is_workday");

// ── Public operations ─────────────────────────────────────────────────────────

/// Count the workdays from `start` up to (not including) `end`.
///
/// If `end` is before `start` the dates are swapped and the result is
/// negated, so `count_workdays(a, b, ..) == -count_workdays(b, a, ..)`.
///
/// With `account_for_holidays`, every observed holiday of the start and end
/// years that lies strictly between the two dates takes one off the count.
/// The holiday is subtracted whether or not it falls on a counted workday.
///
/// ```
/// use wd_time::{count_workdays, Date};
///
/// let mon = Date::from_ymd(2023, 7, 3).unwrap();
/// let next_mon = Date::from_ymd(2023, 7, 10).unwrap();
/// assert_eq!(count_workdays(mon, next_mon, false, false).unwrap(), 5);
/// // Independence Day (Tue Jul 4) lies strictly between.
/// assert_eq!(count_workdays(mon, next_mon, false, true).unwrap(), 4);
/// ```
#[tracing::instrument(level = "debug")]
pub fn count_workdays(
    start: Date,
    end: Date,
    work_on_saturday: bool,
    account_for_holidays: bool,
) -> Result<i32> {
    let count = signed_workday_count(start, end, work_on_saturday, account_for_holidays);
    if let Err(e) = &count {
        debug!(error = %e, "workday count failed");
    }
    count.in_operation(COUNT_WORKDAYS)
}

/// Add `n` workdays to `date`, or subtract them when `n` is negative.
///
/// The result never lands on Sunday, nor on Saturday unless
/// `work_on_saturday` is set. `n == 0` returns `date` unchanged.
///
/// `account_for_holidays` is accepted for symmetry with
/// [`count_workdays`] and [`adjust_to_next_workday`] but is **not
/// consulted**: holidays are never skipped when adding workdays. Callers
/// that need it can run the result through [`adjust_to_next_workday`].
///
/// ```
/// use wd_time::{add_workdays, Date};
///
/// let fri = Date::from_ymd(2023, 6, 30).unwrap();
/// assert_eq!(add_workdays(fri, 1, false, false).unwrap(), Date::from_ymd(2023, 7, 3).unwrap());
/// // Jul 4 is not skipped.
/// assert_eq!(add_workdays(fri, 2, false, true).unwrap(), Date::from_ymd(2023, 7, 4).unwrap());
/// ```
#[tracing::instrument(level = "debug")]
pub fn add_workdays(
    date: Date,
    n: i32,
    work_on_saturday: bool,
    account_for_holidays: bool,
) -> Result<Date> {
    if account_for_holidays {
        trace!("holiday flag is not consulted when adding workdays");
    }
    let result = shift_by_workdays(date, n, work_on_saturday);
    if let Err(e) = &result {
        debug!(error = %e, "adding workdays failed");
    }
    result.in_operation(ADD_WORKDAYS)
}

/// Move `date` forward until it is neither a non-worked weekend day (when
/// `account_for_weekends`) nor an observed holiday (when
/// `account_for_holidays`).
///
/// Holidays come from the set for `date.year()`, which already holds the
/// observed New Year's Day of the following year. The result is a fixed
/// point: adjusting it again returns it unchanged.
///
/// ```
/// use wd_time::{adjust_to_next_workday, Date};
///
/// // Sat Dec 23 2023 → Mon Dec 25 is Christmas → Tue Dec 26.
/// let sat = Date::from_ymd(2023, 12, 23).unwrap();
/// let adjusted = adjust_to_next_workday(sat, true, true, false).unwrap();
/// assert_eq!(adjusted, Date::from_ymd(2023, 12, 26).unwrap());
/// ```
#[tracing::instrument(level = "debug")]
pub fn adjust_to_next_workday(
    date: Date,
    account_for_weekends: bool,
    account_for_holidays: bool,
    work_on_saturday: bool,
) -> Result<Date> {
    let result = next_workday(
        date,
        account_for_weekends,
        account_for_holidays,
        work_on_saturday,
    );
    if let Err(e) = &result {
        debug!(error = %e, "workday adjustment failed");
    }
    result.in_operation(ADJUST_TO_NEXT_WORKDAY)
}

/// Return `true` if `date` is a workday: a worked weekday that, with
/// `account_for_holidays`, is not an observed holiday of its year.
pub fn is_workday(date: Date, work_on_saturday: bool, account_for_holidays: bool) -> Result<bool> {
    if !date.weekday().is_workday(work_on_saturday) {
        return Ok(false);
    }
    if !account_for_holidays {
        return Ok(true);
    }
    us_holidays(date.year())
        .map(|holidays| !holidays.contains(date))
        .in_operation(IS_WORKDAY)
}

// ── WorkdayCalculator ─────────────────────────────────────────────────────────

/// The workday operations bound to one [`WorkdayConfig`].
///
/// Holds nothing but the configuration, so it is `Copy` and can be shared
/// freely between threads.
///
/// ```
/// use wd_time::{Date, WorkdayCalculator, WorkdayConfig};
///
/// let calc = WorkdayCalculator::new(WorkdayConfig::default().with_work_on_saturday(true));
/// let fri = Date::from_ymd(2023, 6, 2).unwrap();
/// assert_eq!(calc.add_workdays(fri, 1).unwrap(), Date::from_ymd(2023, 6, 3).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WorkdayCalculator {
    config: WorkdayConfig,
}

impl WorkdayCalculator {
    /// Create a calculator for `config`.
    pub fn new(config: WorkdayConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> WorkdayConfig {
        self.config
    }

    /// See [`count_workdays`].
    pub fn count_workdays(&self, start: Date, end: Date) -> Result<i32> {
        count_workdays(
            start,
            end,
            self.config.work_on_saturday,
            self.config.account_for_holidays,
        )
    }

    /// See [`add_workdays`].
    pub fn add_workdays(&self, date: Date, n: i32) -> Result<Date> {
        add_workdays(
            date,
            n,
            self.config.work_on_saturday,
            self.config.account_for_holidays,
        )
    }

    /// See [`adjust_to_next_workday`].
    pub fn adjust_to_next_workday(&self, date: Date) -> Result<Date> {
        adjust_to_next_workday(
            date,
            self.config.account_for_weekends,
            self.config.account_for_holidays,
            self.config.work_on_saturday,
        )
    }

    /// See [`is_workday`].
    pub fn is_workday(&self, date: Date) -> Result<bool> {
        is_workday(
            date,
            self.config.work_on_saturday,
            self.config.account_for_holidays,
        )
    }

    /// The observed US holidays for `year`.
    pub fn holidays(&self, year: u16) -> Result<HolidaySet> {
        us_holidays(year)
    }
}

// ── Counting ──────────────────────────────────────────────────────────────────

fn signed_workday_count(
    start: Date,
    end: Date,
    work_on_saturday: bool,
    account_for_holidays: bool,
) -> Result<i32> {
    let (begin, ending, reversed) = if end < start {
        (end, start, true)
    } else {
        (start, end, false)
    };

    let mut total = raw_workdays(begin, ending, work_on_saturday)?;

    if account_for_holidays {
        let mut holidays = us_holidays(begin.year())?;
        if ending.year() != begin.year() {
            holidays = holidays.union(us_holidays(ending.year())?);
        }
        let skipped = holidays.count_strictly_between(begin, ending) as i32;
        trace!(skipped, "holidays strictly between");
        total -= skipped;
    }

    Ok(if reversed { -total } else { total })
}

/// Workdays in `[begin, ending)` for `begin <= ending`, split into the rest
/// of the first week, whole weeks, and the final partial week.
fn raw_workdays(begin: Date, ending: Date, work_on_saturday: bool) -> Result<i32> {
    let per_week = workdays_per_week(work_on_saturday);

    // Nothing before the next Monday counts when starting on a day off.
    let mut begin = begin;
    let weekday = begin.weekday();
    if !weekday.is_workday(work_on_saturday) {
        let to_monday = days_to_next_monday(weekday);
        if ending - begin <= to_monday {
            return Ok(0);
        }
        begin = begin.add_days(to_monday)?;
    }

    let offset = begin.weekday().offset();
    let days_between = ending - begin;
    if days_between <= per_week - offset {
        return Ok(days_between);
    }

    let first_week = per_week - (offset - 1);
    let remaining = days_between - first_week;
    let weeks = remaining / 7;
    let days_in_final_week = remaining % 7;
    // The weekend days of the final week come first.
    let final_week = if days_in_final_week > 1 {
        days_in_final_week - (7 - per_week)
    } else {
        0
    };
    trace!(first_week, weeks, final_week, "week split");

    Ok(first_week + weeks * per_week + final_week)
}

// ── Adding ────────────────────────────────────────────────────────────────────

fn shift_by_workdays(date: Date, n: i32, work_on_saturday: bool) -> Result<Date> {
    match n {
        0 => Ok(date),
        n if n > 0 => add_forward(date, n, work_on_saturday),
        n => {
            let back = n
                .checked_neg()
                .ok_or_else(|| Error::InvalidArgument(format!("cannot subtract {n} workdays")))?;
            add_backward(date, back, work_on_saturday)
        }
    }
}

/// Add `n > 0` workdays.
fn add_forward(date: Date, n: i32, work_on_saturday: bool) -> Result<Date> {
    let per_week = workdays_per_week(work_on_saturday);
    let weekday = date.weekday();

    // A day off has the whole coming week ahead of it; its next Monday is
    // the first workday reached.
    if !weekday.is_workday(work_on_saturday) {
        let monday = date.add_days(days_to_next_monday(weekday))?;
        return if n == 1 {
            Ok(monday)
        } else {
            add_forward(monday, n - 1, work_on_saturday)
        };
    }

    // Workdays needed to reach next Monday.
    let first_week = per_week - (weekday.offset() - 1);
    if n <= first_week {
        return skip_weekend_forward(date.add_days(n)?, work_on_saturday);
    }

    let remaining = n - first_week;
    let weeks = remaining / per_week;
    let final_week = remaining % per_week;
    trace!(first_week, weeks, final_week, "forward week split");

    let monday = skip_weekend_forward(
        date.add_days(week_span(first_week, weeks)?)?,
        work_on_saturday,
    )?;
    monday.add_days(final_week)
}

/// Subtract `n > 0` workdays.
fn add_backward(date: Date, n: i32, work_on_saturday: bool) -> Result<Date> {
    let per_week = workdays_per_week(work_on_saturday);
    let weekday = date.weekday();

    // From a day off the last workday before it is the first one reached.
    if !weekday.is_workday(work_on_saturday) {
        let last = skip_weekend_backward(date, work_on_saturday)?;
        return if n == 1 {
            Ok(last)
        } else {
            add_backward(last, n - 1, work_on_saturday)
        };
    }

    // Workdays needed to reach the end of the previous week.
    let first_week = weekday.offset();
    if n <= first_week {
        return skip_weekend_backward(date.add_days(-n)?, work_on_saturday);
    }

    let remaining = n - first_week;
    let weeks = remaining / per_week;
    let final_week = remaining % per_week;
    trace!(first_week, weeks, final_week, "backward week split");

    let week_end = skip_weekend_backward(
        date.add_days(-week_span(first_week, weeks)?)?,
        work_on_saturday,
    )?;
    week_end.add_days(-final_week)
}

/// Saturday (when not worked) moves +2, Sunday +1.
fn skip_weekend_forward(date: Date, work_on_saturday: bool) -> Result<Date> {
    match date.weekday() {
        Weekday::Saturday if !work_on_saturday => date.add_days(2),
        Weekday::Sunday => date.add_days(1),
        _ => Ok(date),
    }
}

/// Saturday (when not worked) moves −1, Sunday −2 (or −1 onto a worked
/// Saturday).
fn skip_weekend_backward(date: Date, work_on_saturday: bool) -> Result<Date> {
    match date.weekday() {
        Weekday::Saturday if !work_on_saturday => date.add_days(-1),
        Weekday::Sunday if work_on_saturday => date.add_days(-1),
        Weekday::Sunday => date.add_days(-2),
        _ => Ok(date),
    }
}

/// Calendar days covered by `first_week` days plus `weeks` whole weeks.
fn week_span(first_week: i32, weeks: i32) -> Result<i32> {
    weeks
        .checked_mul(7)
        .and_then(|days| days.checked_add(first_week))
        .ok_or_else(|| Error::Date(format!("{weeks} weeks exceed the supported date range")))
}

// ── Adjusting ─────────────────────────────────────────────────────────────────

fn next_workday(
    date: Date,
    account_for_weekends: bool,
    account_for_holidays: bool,
    work_on_saturday: bool,
) -> Result<Date> {
    let holidays = if account_for_holidays {
        Some(us_holidays(date.year())?)
    } else {
        None
    };
    let is_day_off = |d: Date| account_for_weekends && !d.weekday().is_workday(work_on_saturday);
    let is_holiday = |d: Date| holidays.as_ref().is_some_and(|h| h.contains(d));

    let mut current = date;
    while is_day_off(current) {
        current = move_weekend_date_to_monday(current, work_on_saturday)?;
        while is_holiday(current) {
            current = current.add_days(1)?;
        }
    }
    while is_holiday(current) {
        current = current.add_days(1)?;
        while is_day_off(current) {
            current = move_weekend_date_to_monday(current, work_on_saturday)?;
        }
    }
    Ok(current)
}

/// Step a non-worked Saturday or a Sunday towards Monday.
fn move_weekend_date_to_monday(date: Date, work_on_saturday: bool) -> Result<Date> {
    let mut current = date;
    if !work_on_saturday && current.weekday() == Weekday::Saturday {
        current = current.add_days(1)?;
    }
    if current.weekday() == Weekday::Sunday {
        current = current.add_days(1)?;
    }
    Ok(current)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn workdays_per_week(work_on_saturday: bool) -> i32 {
    WorkdayConfig::default()
        .with_work_on_saturday(work_on_saturday)
        .workdays_per_week()
}

/// Saturday → 2, Sunday → 1, Monday → 7, …
fn days_to_next_monday(weekday: Weekday) -> i32 {
    let days = (8 - weekday.offset()) % 7;
    if days == 0 {
        7
    } else {
        days
    }
}

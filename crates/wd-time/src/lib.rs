//! # wd-time
//!
//! Date, weekday, US holiday, and workday arithmetic types.
//!
//! ```
//! use wd_time::{add_workdays, count_workdays, Date};
//!
//! let start = Date::from_ymd(2023, 1, 2).unwrap();
//! let end = Date::from_ymd(2023, 1, 9).unwrap();
//! assert_eq!(count_workdays(start, end, false, true).unwrap(), 5);
//! assert_eq!(add_workdays(start, 5, false, false).unwrap(), end);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `WorkdayConfig` — per-call switches.
pub mod config;

/// `Date` type.
pub mod date;

/// Observed US holidays and `HolidaySet`.
pub mod holidays;

/// `Weekday` — day of the week and its Sunday-based offset.
pub mod weekday;

/// Counting, adding, and adjusting workdays.
pub mod workday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use config::WorkdayConfig;
pub use date::Date;
pub use holidays::{
    adjust_for_weekend_holiday, observed_us_holidays, us_holidays, Holiday, HolidaySet,
    ObservedHoliday,
};
pub use weekday::Weekday;
pub use workday::{
    add_workdays, adjust_to_next_workday, count_workdays, is_workday, WorkdayCalculator,
};

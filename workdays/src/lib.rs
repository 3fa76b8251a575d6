//! # workdays
//!
//! Workday-aware date arithmetic: count business days between two dates,
//! add or subtract workdays, roll a date forward to the next workday, and
//! list the observed US holidays of a year.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on it rather than on
//! `wd-core` / `wd-time` directly.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! workdays = "0.1"
//! ```
//!
//! ```rust
//! use workdays::prelude::*;
//!
//! let calc = WorkdayCalculator::new(WorkdayConfig::default());
//! let sat = Date::from_ymd(2023, 12, 23).unwrap();
//! let due = calc.adjust_to_next_workday(sat).unwrap();
//! assert_eq!(due.to_string(), "2023-12-26");
//! ```
//!
//! ## Features
//!
//! * `serde` — serialize `Date` (as `YYYY-MM-DD`), `WorkdayConfig` and
//!   `Holiday`.
//! * `chrono` — convert between `Date` and `chrono::NaiveDate`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types.
pub use wd_core as core;

/// Dates, weekdays, holidays, and workday arithmetic.
pub use wd_time as time;

/// The types and operations most callers need.
pub mod prelude {
    pub use wd_core::{Error, Result};
    pub use wd_time::{
        add_workdays, adjust_to_next_workday, count_workdays, us_holidays, Date, Holiday,
        HolidaySet, Weekday, WorkdayCalculator, WorkdayConfig,
    };
}

//! `Weekday` — day-of-week enum.
//!
//! # Offsets
//!
//! Workday arithmetic counts positions within a Sunday-started week. That
//! mapping lives in one place, [`Weekday::offset`]:
//!
//! | Weekday   | ordinal | offset |
//! |-----------|---------|--------|
//! | Sunday    | 7       | 0      |
//! | Monday    | 1       | 1      |
//! | Tuesday   | 2       | 2      |
//! | Wednesday | 3       | 3      |
//! | Thursday  | 4       | 4      |
//! | Friday    | 5       | 5      |
//! | Saturday  | 6       | 6      |

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

/// Sunday-based offsets indexed by `ordinal - 1`.
const OFFSETS: [u8; 7] = [1, 2, 3, 4, 5, 6, 0];

impl Weekday {
    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the position in a Sunday-started week (Sunday = 0 …
    /// Saturday = 6).
    pub fn offset(&self) -> i32 {
        OFFSETS[self.ordinal() as usize - 1] as i32
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Return `true` if this day is worked: Monday–Friday, plus Saturday
    /// when `work_on_saturday` is set. Sunday is never a workday.
    pub fn is_workday(&self, work_on_saturday: bool) -> bool {
        match self {
            Weekday::Sunday => false,
            Weekday::Saturday => work_on_saturday,
            _ => true,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

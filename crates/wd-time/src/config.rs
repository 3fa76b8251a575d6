//! `WorkdayConfig` — the per-call switches of workday arithmetic.

/// Independent toggles that shape workday arithmetic.
///
/// The value is passed per call (or held by a
/// [`WorkdayCalculator`](crate::workday::WorkdayCalculator)); nothing is
/// global. With the `serde` feature enabled a partial document deserializes
/// with the missing flags taken from [`Default`].
///
/// ```
/// use wd_time::WorkdayConfig;
///
/// let six_day_week = WorkdayConfig::default().with_work_on_saturday(true);
/// assert_eq!(six_day_week.workdays_per_week(), 6);
/// assert!(six_day_week.account_for_holidays);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorkdayConfig {
    /// Treat Saturday as a workday (six-day week).
    pub work_on_saturday: bool,
    /// Skip observed US holidays.
    pub account_for_holidays: bool,
    /// Skip weekend days that are not worked.
    pub account_for_weekends: bool,
}

impl Default for WorkdayConfig {
    /// Monday–Friday week, holidays and weekends both honoured.
    fn default() -> Self {
        Self {
            work_on_saturday: false,
            account_for_holidays: true,
            account_for_weekends: true,
        }
    }
}

impl WorkdayConfig {
    /// Set whether Saturday is a workday.
    pub fn with_work_on_saturday(mut self, on: bool) -> Self {
        self.work_on_saturday = on;
        self
    }

    /// Set whether observed US holidays are skipped.
    pub fn with_holidays(mut self, on: bool) -> Self {
        self.account_for_holidays = on;
        self
    }

    /// Set whether non-worked weekend days are skipped.
    pub fn with_weekends(mut self, on: bool) -> Self {
        self.account_for_weekends = on;
        self
    }

    /// Number of workdays in a week: 5, or 6 when Saturday is worked.
    pub fn workdays_per_week(&self) -> i32 {
        if self.work_on_saturday {
            6
        } else {
            5
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_day_week_with_holidays() {
        let c = WorkdayConfig::default();
        assert!(!c.work_on_saturday);
        assert!(c.account_for_holidays);
        assert!(c.account_for_weekends);
        assert_eq!(c.workdays_per_week(), 5);
    }

    #[test]
    fn builders_toggle_one_flag_each() {
        let c = WorkdayConfig::default().with_holidays(false);
        assert!(!c.account_for_holidays);
        assert!(c.account_for_weekends);
        let c = c.with_weekends(false).with_work_on_saturday(true);
        assert!(!c.account_for_weekends);
        assert_eq!(c.workdays_per_week(), 6);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_document_fills_defaults() {
        let c: WorkdayConfig = serde_json::from_str(r#"{"work_on_saturday": true}"#).unwrap();
        assert_eq!(c, WorkdayConfig::default().with_work_on_saturday(true));
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(serde_json::from_str::<WorkdayConfig>(&json).unwrap(), c);
    }
}

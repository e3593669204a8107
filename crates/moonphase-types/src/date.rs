use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar day as picked by the user, before any validation.
///
/// Components are kept raw so that out-of-range triples (day 0, 31 February,
/// month 13) can be resolved according to a [`DatePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl CalendarDate {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Resolve to a concrete day under the given policy.
    ///
    /// Returns `None` when the triple is rejected (strict) or when the
    /// rolled-over day falls outside the supported calendar range.
    pub fn resolve(&self, policy: DatePolicy) -> Option<NaiveDate> {
        match policy {
            DatePolicy::Strict => NaiveDate::from_ymd_opt(self.year, self.month, self.day),
            DatePolicy::Normalize => self.normalized(),
        }
    }

    /// Calendar overflow: excess months roll into years, excess days roll
    /// into the following months, day 0 is the last day of the previous month.
    fn normalized(&self) -> Option<NaiveDate> {
        let months = i64::from(self.year) * 12 + i64::from(self.month) - 1;
        let year = i32::try_from(months.div_euclid(12)).ok()?;
        let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;

        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        first.checked_add_signed(Duration::days(i64::from(self.day) - 1))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// How invalid day/month/year triples are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePolicy {
    /// Roll over like a calendar overflow (31 February becomes 3 March)
    #[default]
    Normalize,
    /// Reject anything that is not a real calendar day
    Strict,
}

/// Which midnight a calendar day is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MidnightZone {
    #[default]
    Local,
    Utc,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_valid_date_resolves_under_both_policies() {
        let date = CalendarDate::new(18, 2, 2007);
        assert_eq!(date.resolve(DatePolicy::Normalize), Some(ymd(2007, 2, 18)));
        assert_eq!(date.resolve(DatePolicy::Strict), Some(ymd(2007, 2, 18)));
    }

    #[test]
    fn test_day_overflow_rolls_into_next_month() {
        let date = CalendarDate::new(31, 2, 2007);
        assert_eq!(date.resolve(DatePolicy::Normalize), Some(ymd(2007, 3, 3)));
        assert_eq!(date.resolve(DatePolicy::Strict), None);
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(
            CalendarDate::new(29, 2, 2024).resolve(DatePolicy::Strict),
            Some(ymd(2024, 2, 29))
        );
        assert_eq!(
            CalendarDate::new(29, 2, 2023).resolve(DatePolicy::Normalize),
            Some(ymd(2023, 3, 1))
        );
    }

    #[test]
    fn test_day_zero_is_last_day_of_previous_month() {
        let date = CalendarDate::new(0, 3, 2024);
        assert_eq!(date.resolve(DatePolicy::Normalize), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_month_overflow_rolls_into_next_year() {
        assert_eq!(
            CalendarDate::new(5, 13, 2020).resolve(DatePolicy::Normalize),
            Some(ymd(2021, 1, 5))
        );
        assert_eq!(
            CalendarDate::new(5, 0, 2020).resolve(DatePolicy::Normalize),
            Some(ymd(2019, 12, 5))
        );
    }

    #[test]
    fn test_unrepresentable_year_is_rejected() {
        let date = CalendarDate::new(1, 1, i32::MAX);
        assert_eq!(date.resolve(DatePolicy::Normalize), None);
        assert_eq!(date.resolve(DatePolicy::Strict), None);
    }

    #[test]
    fn test_display_is_iso_like() {
        assert_eq!(CalendarDate::new(8, 3, 2024).to_string(), "2024-03-08");
    }
}

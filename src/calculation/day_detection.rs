//! Day detection logic.
//!
//! This module determines the day type (weekday, Saturday, Sunday) of a
//! calendar date. Sunday is the only day that attracts the Sunday premium;
//! holiday calendars are not modelled.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for premium calculation.
///
/// # Example
///
/// ```
/// use reform_cost_engine::calculation::DayType;
///
/// let day_type = DayType::Sunday;
/// assert_eq!(format!("{:?}", day_type), "Sunday");
/// assert!(day_type.is_premium_day());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday, costed like a weekday.
    Saturday,
    /// Sunday, every hour attracts the Sunday premium.
    Sunday,
}

impl DayType {
    /// Returns true if every hour of the day attracts the Sunday premium.
    pub fn is_premium_day(&self) -> bool {
        matches!(self, DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use reform_cost_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2025-06-15 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// assert_eq!(get_day_type(sunday), DayType::Sunday);
///
/// // 2026-01-15 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(get_day_type(thursday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

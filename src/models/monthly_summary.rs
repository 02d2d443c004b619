//! Monthly summary models.
//!
//! This module contains the [`YearMonth`] key used to group days and the
//! [`MonthlySummary`] rows handed to a table or chart.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar month, displayed and serialized as `YYYY-MM`.
///
/// Ordering is chronological.
///
/// # Example
///
/// ```
/// use reform_cost_engine::models::YearMonth;
/// use chrono::NaiveDate;
///
/// let month = YearMonth::from_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
/// assert_eq!(month.to_string(), "2026-01");
/// assert_eq!("2026-01".parse::<YearMonth>().unwrap(), month);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Month of the year, 1 to 12.
    pub month: u32,
}

impl YearMonth {
    /// Returns the month a date belongs to.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns true if the date falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("expected YYYY-MM, got '{}'", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("invalid year in '{}'", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("invalid month in '{}'", s))?;
        if !(1..=12).contains(&month) {
            return Err(format!("month out of range in '{}'", s));
        }
        Ok(Self { year, month })
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The aggregated cost of every simulated day in one calendar month.
///
/// Hour totals are per employee, summed over the days present in the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The month being summarized.
    pub month: YearMonth,
    /// Number of days of this month present in the simulated range.
    pub days: u32,
    /// Sum of the daily total costs.
    pub total_monthly_cost: Decimal,
    /// Sum of the daily ordinary hours.
    pub ordinary_hours: Decimal,
    /// Sum of the daily overtime hours.
    pub overtime_hours: Decimal,
    /// Sum of the daily night hours.
    pub night_hours: Decimal,
    /// Sum of the daily Sunday hours.
    pub sunday_hours: Decimal,
}

impl MonthlySummary {
    /// Creates an empty summary for a month.
    pub fn empty(month: YearMonth) -> Self {
        Self {
            month,
            days: 0,
            total_monthly_cost: Decimal::ZERO,
            ordinary_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
            sunday_hours: Decimal::ZERO,
        }
    }
}

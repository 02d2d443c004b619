//! Monthly aggregation of daily cost breakdowns.

use std::borrow::Borrow;
use std::collections::HashMap;

use crate::models::{DailyCostBreakdown, MonthlySummary, YearMonth};

/// Groups daily breakdowns by calendar month and sums each numeric field.
///
/// Months are returned in the order they first appear in the input, which
/// is chronological for any date range walk. Accepts owned or borrowed
/// breakdowns.
///
/// # Example
///
/// ```
/// use reform_cost_engine::calculation::{aggregate, compute_day_default, DateRange};
/// use reform_cost_engine::models::OperatingParameters;
/// use chrono::NaiveDate;
///
/// let params = OperatingParameters::default();
/// let days: Vec<_> = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
/// )
/// .map(|date| compute_day_default(date, &params))
/// .collect();
///
/// let months = aggregate(&days);
/// assert_eq!(months.len(), 2);
/// assert_eq!(months[0].month.to_string(), "2026-01");
/// assert_eq!(months[0].days, 2);
/// assert_eq!(months[1].days, 2);
/// ```
pub fn aggregate<I>(days: I) -> Vec<MonthlySummary>
where
    I: IntoIterator,
    I::Item: Borrow<DailyCostBreakdown>,
{
    let mut summaries: Vec<MonthlySummary> = Vec::new();
    let mut index: HashMap<YearMonth, usize> = HashMap::new();

    for day in days {
        let day = day.borrow();
        let month = YearMonth::from_date(day.date);
        let position = *index.entry(month).or_insert_with(|| {
            summaries.push(MonthlySummary::empty(month));
            summaries.len() - 1
        });

        let summary = &mut summaries[position];
        summary.days += 1;
        summary.total_monthly_cost += day.total_daily_cost;
        summary.ordinary_hours += day.ordinary_hours;
        summary.overtime_hours += day.overtime_hours;
        summary.night_hours += day.night_hours;
        summary.sunday_hours += day.sunday_hours;
    }

    summaries
}

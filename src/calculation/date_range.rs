//! Inclusive calendar date ranges.

use std::iter::FusedIterator;

use chrono::NaiveDate;

/// A lazy, finite walk over every calendar date from `start` to `end`, both inclusive.
///
/// The range is `Clone`, so a cloned range restarts from wherever the
/// original was when cloned. An inverted range yields nothing.
///
/// # Example
///
/// ```
/// use reform_cost_engine::calculation::DateRange;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
/// let range = DateRange::new(start, end);
///
/// assert_eq!(range.len(), 4);
/// let dates: Vec<String> = range.map(|d| d.to_string()).collect();
/// assert_eq!(dates, ["2025-12-30", "2025-12-31", "2026-01-01", "2026-01-02"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl DateRange {
    /// Creates the range `start..=end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            next: (start <= end).then_some(start),
            end,
        }
    }

    fn remaining(&self) -> usize {
        self.next
            .map(|next| (self.end - next).num_days() + 1)
            .and_then(|days| usize::try_from(days).ok())
            .unwrap_or(0)
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ_opt()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRange {}

impl FusedIterator for DateRange {}

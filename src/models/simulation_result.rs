//! Simulation result models.
//!
//! This module contains the [`SimulationResult`] returned for a complete
//! run over a date range.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DailyCostBreakdown, MonthlySummary, OperatingParameters};

/// Aggregated totals over the whole simulated range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationTotals {
    /// Sum of every monthly cost.
    pub total_cost: Decimal,
    /// Number of simulated days.
    pub day_count: u64,
    /// Number of months in the summary.
    pub month_count: usize,
}

/// The complete result of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Unique identifier for this run.
    pub simulation_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// The parameters the run was computed with.
    pub parameters: OperatingParameters,
    /// One row per calendar month, in chronological order.
    pub months: Vec<MonthlySummary>,
    /// Per-day breakdowns, present only when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<DailyCostBreakdown>>,
    /// Totals over the whole range.
    pub totals: SimulationTotals,
    /// Run duration in microseconds.
    pub duration_us: u64,
}

impl SimulationResult {
    /// Returns `(month, cost)` points for plotting a line chart keyed by month.
    pub fn chart_series(&self) -> Vec<(String, Decimal)> {
        self.months
            .iter()
            .map(|m| (m.month.to_string(), m.total_monthly_cost))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::YearMonth;

    fn sample_result() -> SimulationResult {
        let mut january = MonthlySummary::empty(YearMonth {
            year: 2026,
            month: 1,
        });
        january.days = 31;
        january.total_monthly_cost = Decimal::from(100);
        let mut february = MonthlySummary::empty(YearMonth {
            year: 2026,
            month: 2,
        });
        february.days = 28;
        february.total_monthly_cost = Decimal::from(90);

        SimulationResult {
            simulation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            parameters: OperatingParameters::default(),
            months: vec![january, february],
            days: None,
            totals: SimulationTotals {
                total_cost: Decimal::from(190),
                day_count: 59,
                month_count: 2,
            },
            duration_us: 10,
        }
    }

    #[test]
    fn test_chart_series_is_keyed_by_month() {
        let series = sample_result().chart_series();
        assert_eq!(
            series,
            vec![
                ("2026-01".to_string(), Decimal::from(100)),
                ("2026-02".to_string(), Decimal::from(90)),
            ]
        );
    }

    #[test]
    fn test_days_are_omitted_when_absent() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        assert!(!json.contains("\"days\":["));
        assert!(json.contains("\"month_count\":2"));

        let back: SimulationResult = serde_json::from_str(&json).unwrap();
        assert!(back.days.is_none());
    }
}

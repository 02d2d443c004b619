//! Simulation runs over a date range.
//!
//! A run validates its [`OperatingParameters`], walks the inclusive date
//! range one day at a time, costs each day and reduces the days by
//! calendar month.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::RegulatoryConfig;
use crate::error::EngineResult;
use crate::models::{DailyCostBreakdown, OperatingParameters, SimulationResult, SimulationTotals};

use super::{DateRange, aggregate, check_cost_range, compute_day};

/// Lazily costs every day of the parameters' date range.
///
/// The parameters are validated and the run's cost range is checked first;
/// on either error no day is produced.
///
/// # Example
///
/// ```
/// use reform_cost_engine::calculation::simulate_days;
/// use reform_cost_engine::config::RegulatoryConfig;
/// use reform_cost_engine::models::OperatingParameters;
/// use chrono::NaiveDate;
///
/// let config = RegulatoryConfig::default();
/// let params = OperatingParameters {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     ..OperatingParameters::default()
/// };
///
/// let days = simulate_days(&params, &config).unwrap();
/// assert_eq!(days.count(), 31);
/// ```
pub fn simulate_days<'a>(
    params: &'a OperatingParameters,
    config: &'a RegulatoryConfig,
) -> EngineResult<impl Iterator<Item = DailyCostBreakdown> + 'a> {
    params.validate()?;
    check_cost_range(params, config)?;

    Ok(DateRange::new(params.start_date, params.end_date)
        .map(move |date| compute_day(date, params, config)))
}

/// Runs a complete simulation and packages the monthly summary.
///
/// Per-day breakdowns are kept in the result only when `include_daily`
/// is set.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateRange`](crate::error::EngineError::InvalidDateRange)
/// when `start_date >= end_date`, or
/// [`EngineError::InvalidParameter`](crate::error::EngineError::InvalidParameter)
/// for out-of-domain values in strict validation mode, or
/// [`EngineError::CostOutOfRange`](crate::error::EngineError::CostOutOfRange)
/// when the run's costs would not fit in a `Decimal`.
pub fn run_simulation(
    params: &OperatingParameters,
    config: &RegulatoryConfig,
    include_daily: bool,
) -> EngineResult<SimulationResult> {
    let start_time = Instant::now();
    let simulation_id = Uuid::new_v4();

    debug!(
        simulation_id = %simulation_id,
        start_date = %params.start_date,
        end_date = %params.end_date,
        "Starting simulation"
    );

    let days: Vec<DailyCostBreakdown> = simulate_days(params, config)?.collect();
    let months = aggregate(&days);

    let total_cost: Decimal = months.iter().map(|m| m.total_monthly_cost).sum();
    let totals = SimulationTotals {
        total_cost,
        day_count: days.len() as u64,
        month_count: months.len(),
    };

    let duration_us = start_time.elapsed().as_micros() as u64;
    info!(
        simulation_id = %simulation_id,
        day_count = totals.day_count,
        month_count = totals.month_count,
        total_cost = %totals.total_cost.round_dp(2),
        duration_us,
        "Simulation completed"
    );

    Ok(SimulationResult {
        simulation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        parameters: params.clone(),
        months,
        days: include_daily.then_some(days),
        totals,
        duration_us,
    })
}

/// Returns the dates within `start..=end` on which any regime field changes.
pub fn regime_transitions(
    config: &RegulatoryConfig,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<NaiveDate> {
    let timeline = config.timeline();
    let mut dates: Vec<NaiveDate> = timeline
        .weekly_ordinary_hours_threshold
        .transition_dates()
        .chain(timeline.night_start_hour.transition_dates())
        .chain(timeline.sunday_premium_multiplier.transition_dates())
        .filter(|date| (start..=end).contains(date))
        .collect();
    dates.sort();
    dates.dedup();
    dates
}

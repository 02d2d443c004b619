//! Daily cost calculation.
//!
//! This module computes the labor cost of a single calendar day for a
//! round-the-clock plant under the regime in force on that day.
//!
//! The day is modelled as:
//! - a night block from the regime's night start hour to midnight,
//! - the weekly ordinary hours spread evenly across seven days,
//! - overtime for the daytime hours beyond that ordinary share,
//! - on Sundays, all 24 hours again at the Sunday premium, in addition to
//!   the categories above.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::RegulatoryConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CostCategory, CostLine, DAYS_PER_WEEK, DailyCostBreakdown, HOURS_PER_DAY, OperatingParameters,
};

use super::{get_day_type, resolve_with};

/// Computes the cost breakdown of one day.
///
/// Pure and deterministic: identical inputs give identical output. The
/// parameters are assumed to have been validated by the caller.
///
/// # Panics
///
/// Panics if a cost overflows `Decimal`. Runs that pass
/// [`check_cost_range`] never do.
///
/// # Example
///
/// ```
/// use reform_cost_engine::calculation::compute_day;
/// use reform_cost_engine::config::RegulatoryConfig;
/// use reform_cost_engine::models::OperatingParameters;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = RegulatoryConfig::default();
/// let params = OperatingParameters::default();
///
/// // 2026-01-15 is a Thursday: night from 19:00, 44 h weekly threshold
/// let day = compute_day(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(), &params, &config);
/// assert_eq!(day.night_hours, Decimal::from(5));
/// assert_eq!(day.daytime_hours, Decimal::from(19));
/// assert_eq!(day.sunday_hours, Decimal::ZERO);
/// assert_eq!(day.total_daily_cost.round_dp(2), Decimal::new(215357143, 2));
/// ```
pub fn compute_day(
    date: NaiveDate,
    params: &OperatingParameters,
    config: &RegulatoryConfig,
) -> DailyCostBreakdown {
    let regime = resolve_with(config.timeline(), date);
    let surcharges = config.surcharges();
    let day_type = get_day_type(date);
    let wage = params.hourly_wage;

    let night_hours = Decimal::from(regime.night_hours());
    let daytime_hours = Decimal::from(regime.daytime_hours());
    let ordinary_hours =
        Decimal::from(regime.weekly_ordinary_hours_threshold) / Decimal::from(DAYS_PER_WEEK);
    let overtime_hours = (daytime_hours - ordinary_hours).max(Decimal::ZERO);
    let sunday_hours = if day_type.is_premium_day() {
        Decimal::from(HOURS_PER_DAY)
    } else {
        Decimal::ZERO
    };

    let cost_lines: Vec<CostLine> = [
        (CostCategory::Ordinary, ordinary_hours, wage),
        (
            CostCategory::Overtime,
            overtime_hours,
            wage * surcharges.overtime_multiplier,
        ),
        (
            CostCategory::Night,
            night_hours,
            wage * surcharges.night_surcharge,
        ),
        (
            CostCategory::Sunday,
            sunday_hours,
            wage * regime.sunday_premium_multiplier,
        ),
    ]
    .into_iter()
    .filter(|(_, hours, _)| !hours.is_zero())
    .map(|(category, hours, rate)| CostLine {
        category,
        hours,
        rate,
        amount: hours * rate,
    })
    .collect();

    let employees_total = params.employees_total();
    let per_employee_cost: Decimal = cost_lines.iter().map(|line| line.amount).sum();
    let total_daily_cost = per_employee_cost * Decimal::from(employees_total);

    DailyCostBreakdown {
        date,
        day_type,
        regime,
        ordinary_hours,
        overtime_hours,
        night_hours,
        daytime_hours,
        sunday_hours,
        employees_total,
        cost_lines,
        per_employee_cost,
        total_daily_cost,
    }
}

/// Checks that every cost of a run over the parameters' range fits in a
/// `Decimal`.
///
/// No cost line exceeds 24 hours at its rate, so one employee-day costs at
/// most `|wage| * 24 * (1 + overtime + night + highest Sunday premium)`.
/// That bound times the headcount and the day count covers every daily,
/// monthly and run total.
///
/// # Example
///
/// ```
/// use reform_cost_engine::calculation::check_cost_range;
/// use reform_cost_engine::config::RegulatoryConfig;
/// use reform_cost_engine::models::OperatingParameters;
/// use rust_decimal::Decimal;
///
/// let config = RegulatoryConfig::default();
/// assert!(check_cost_range(&OperatingParameters::default(), &config).is_ok());
///
/// let huge = OperatingParameters {
///     hourly_wage: Decimal::from_i128_with_scale(10_i128.pow(26), 0),
///     ..OperatingParameters::default()
/// };
/// assert!(check_cost_range(&huge, &config).is_err());
/// ```
pub fn check_cost_range(
    params: &OperatingParameters,
    config: &RegulatoryConfig,
) -> EngineResult<()> {
    let surcharges = config.surcharges();
    let sunday = &config.timeline().sunday_premium_multiplier;
    let highest_sunday = sunday
        .steps
        .iter()
        .map(|step| step.value.abs())
        .fold(sunday.baseline.abs(), Decimal::max);

    let bound = [
        surcharges.overtime_multiplier.abs(),
        surcharges.night_surcharge.abs(),
        highest_sunday,
    ]
    .into_iter()
    .try_fold(Decimal::ONE, |factor, rate| factor.checked_add(rate))
    .and_then(|factor| factor.checked_mul(Decimal::from(HOURS_PER_DAY)))
    .and_then(|hours| hours.checked_mul(params.hourly_wage.abs()))
    .and_then(|day| day.checked_mul(Decimal::from(params.employees_total())))
    .and_then(|day| day.checked_mul(Decimal::from(params.day_count())));

    match bound {
        Some(_) => Ok(()),
        None => Err(EngineError::CostOutOfRange {
            message: format!(
                "hourly wage {} for {} employees over {} days",
                params.hourly_wage,
                params.employees_total(),
                params.day_count()
            ),
        }),
    }
}

/// Computes the cost breakdown of one day under the built-in reform rules.
pub fn compute_day_default(date: NaiveDate, params: &OperatingParameters) -> DailyCostBreakdown {
    compute_day(date, params, &RegulatoryConfig::default())
}

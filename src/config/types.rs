//! Configuration types for the regulatory timeline.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the built-in
//! configuration for the 2025-2027 reform.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{HOURS_PER_DAY, RegulatoryRegime};

/// Metadata about the reform being simulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReformMetadata {
    /// Short identifier for the rule set (e.g., "co_reform_2025").
    pub code: String,
    /// The human-readable name of the reform.
    pub name: String,
    /// The version of the rule set.
    pub version: String,
}

/// Surcharge rates that do not change over the reform timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeRates {
    /// Multiplier on the wage for each overtime hour.
    pub overtime_multiplier: Decimal,
    /// Fraction of the wage added for each night hour.
    pub night_surcharge: Decimal,
}

impl Default for SurchargeRates {
    fn default() -> Self {
        Self {
            overtime_multiplier: Decimal::new(125, 2),
            night_surcharge: Decimal::new(35, 2),
        }
    }
}

/// A value that takes effect on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStep<T> {
    /// First date on which the value applies.
    pub effective_date: NaiveDate,
    /// The value in force from the effective date onward.
    pub value: T,
}

/// A step function of the date: a baseline value and the dated changes to it.
///
/// A step's effective date belongs to the new value, so the schedule is
/// total over every date.
///
/// # Example
///
/// ```
/// use reform_cost_engine::config::{ScheduleStep, StepSchedule};
/// use chrono::NaiveDate;
///
/// let july = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// let schedule = StepSchedule::new(46, vec![ScheduleStep { effective_date: july, value: 44 }]);
///
/// assert_eq!(schedule.value_at(july.pred_opt().unwrap()), 46);
/// assert_eq!(schedule.value_at(july), 44);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSchedule<T> {
    /// Value in force before the first step.
    pub baseline: T,
    /// Dated changes, oldest first.
    #[serde(default)]
    pub steps: Vec<ScheduleStep<T>>,
}

impl<T: Copy> StepSchedule<T> {
    /// Creates a schedule from a baseline and its steps.
    pub fn new(baseline: T, steps: Vec<ScheduleStep<T>>) -> Self {
        Self { baseline, steps }
    }

    /// Returns the value of the latest step effective on or before `date`.
    pub fn value_at(&self, date: NaiveDate) -> T {
        self.steps
            .iter()
            .rev()
            .find(|step| step.effective_date <= date)
            .map(|step| step.value)
            .unwrap_or(self.baseline)
    }

    /// Returns the dates on which the value changes.
    pub fn transition_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.steps.iter().map(|step| step.effective_date)
    }

    /// Checks that the steps are in strictly increasing date order.
    pub fn validate(&self, field: &str) -> EngineResult<()> {
        for pair in self.steps.windows(2) {
            if pair[1].effective_date <= pair[0].effective_date {
                return Err(EngineError::InvalidTimeline {
                    field: field.to_string(),
                    message: format!(
                        "step on {} does not follow step on {}",
                        pair[1].effective_date, pair[0].effective_date
                    ),
                });
            }
        }
        Ok(())
    }
}

/// The three independent schedules that make up the reform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulatoryTimeline {
    /// Legal weekly ordinary hours.
    pub weekly_ordinary_hours_threshold: StepSchedule<u32>,
    /// Clock hour at which night hours begin.
    pub night_start_hour: StepSchedule<u32>,
    /// Sunday premium multiplier.
    pub sunday_premium_multiplier: StepSchedule<Decimal>,
}

impl RegulatoryTimeline {
    /// The 2025-2027 reform timeline.
    ///
    /// - weekly hours: 46, then 44 from 2025-07-01
    /// - night start: 21:00, then 19:00 from 2025-12-01
    /// - Sunday premium: 75%, then 80% from 2025-07-01, 90% from 2026-07-01
    ///   and 100% from 2027-07-01
    pub fn builtin() -> Self {
        Self {
            weekly_ordinary_hours_threshold: StepSchedule::new(
                46,
                vec![ScheduleStep {
                    effective_date: ymd(2025, 7, 1),
                    value: 44,
                }],
            ),
            night_start_hour: StepSchedule::new(
                21,
                vec![ScheduleStep {
                    effective_date: ymd(2025, 12, 1),
                    value: 19,
                }],
            ),
            sunday_premium_multiplier: StepSchedule::new(
                Decimal::new(75, 2),
                vec![
                    ScheduleStep {
                        effective_date: ymd(2025, 7, 1),
                        value: Decimal::new(80, 2),
                    },
                    ScheduleStep {
                        effective_date: ymd(2026, 7, 1),
                        value: Decimal::new(90, 2),
                    },
                    ScheduleStep {
                        effective_date: ymd(2027, 7, 1),
                        value: Decimal::new(100, 2),
                    },
                ],
            ),
        }
    }

    /// Returns the regime in force on `date`.
    pub fn regime_at(&self, date: NaiveDate) -> RegulatoryRegime {
        RegulatoryRegime {
            weekly_ordinary_hours_threshold: self.weekly_ordinary_hours_threshold.value_at(date),
            night_start_hour: self.night_start_hour.value_at(date),
            sunday_premium_multiplier: self.sunday_premium_multiplier.value_at(date),
        }
    }

    /// Checks step ordering and that every night start hour is a clock hour.
    pub fn validate(&self) -> EngineResult<()> {
        self.weekly_ordinary_hours_threshold
            .validate("weekly_ordinary_hours_threshold")?;
        self.night_start_hour.validate("night_start_hour")?;
        self.sunday_premium_multiplier
            .validate("sunday_premium_multiplier")?;

        let night_hours = std::iter::once(self.night_start_hour.baseline)
            .chain(self.night_start_hour.steps.iter().map(|s| s.value));
        for hour in night_hours {
            if hour > HOURS_PER_DAY {
                return Err(EngineError::InvalidTimeline {
                    field: "night_start_hour".to_string(),
                    message: format!("{} is not a clock hour", hour),
                });
            }
        }

        Ok(())
    }
}

/// The complete regulatory configuration used by a simulation.
///
/// `Default` is the built-in 2025-2027 reform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegulatoryConfig {
    metadata: ReformMetadata,
    timeline: RegulatoryTimeline,
    surcharges: SurchargeRates,
}

impl RegulatoryConfig {
    /// Creates a RegulatoryConfig from its component parts.
    pub fn new(
        metadata: ReformMetadata,
        timeline: RegulatoryTimeline,
        surcharges: SurchargeRates,
    ) -> Self {
        Self {
            metadata,
            timeline,
            surcharges,
        }
    }

    /// Returns the reform metadata.
    pub fn metadata(&self) -> &ReformMetadata {
        &self.metadata
    }

    /// Returns the regulatory timeline.
    pub fn timeline(&self) -> &RegulatoryTimeline {
        &self.timeline
    }

    /// Returns the fixed surcharge rates.
    pub fn surcharges(&self) -> &SurchargeRates {
        &self.surcharges
    }
}

impl Default for RegulatoryConfig {
    fn default() -> Self {
        Self::new(
            ReformMetadata {
                code: "co_reform_2025".to_string(),
                name: "Colombian labor reform 2025-2027".to_string(),
                version: "2025-07-01".to_string(),
            },
            RegulatoryTimeline::builtin(),
            SurchargeRates::default(),
        )
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Valid built-in timeline date")
}

//! Operating parameters for a simulation run.
//!
//! This module defines the [`OperatingParameters`] struct and the
//! [`ValidationMode`] that controls how strictly its numeric fields are
//! checked before a run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How strictly the numeric operating parameters are validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Rejects a non-positive wage and zero headcount or shift count.
    #[default]
    Strict,
    /// Only the date range is checked; any other value flows into the arithmetic.
    Permissive,
}

/// The plant operating parameters supplied once per simulation run.
///
/// Every field has a default matching the usual 24/7 plant scenario, so a
/// caller only needs to supply what differs.
///
/// # Example
///
/// ```
/// use reform_cost_engine::models::OperatingParameters;
/// use chrono::NaiveDate;
///
/// let params = OperatingParameters::default();
/// assert_eq!(params.employees_per_shift, 6);
/// assert_eq!(params.shifts_per_day, 3);
/// assert_eq!(params.employees_total(), 18);
/// assert_eq!(params.start_date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingParameters {
    /// Pay for one ordinary hour of work.
    pub hourly_wage: Decimal,
    /// Number of employees working each shift.
    pub employees_per_shift: u32,
    /// Number of shifts per day (3 for round-the-clock coverage).
    pub shifts_per_day: u32,
    /// First day of the simulated range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the simulated range (inclusive).
    pub end_date: NaiveDate,
    /// How strictly the numeric fields are validated.
    pub validation: ValidationMode,
}

impl Default for OperatingParameters {
    fn default() -> Self {
        Self {
            hourly_wage: Decimal::from(5000),
            employees_per_shift: 6,
            shifts_per_day: 3,
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2027, 12, 31).unwrap_or_default(),
            validation: ValidationMode::Strict,
        }
    }
}

impl OperatingParameters {
    /// Total number of employees costed per day across all shifts.
    pub fn employees_total(&self) -> u64 {
        u64::from(self.employees_per_shift) * u64::from(self.shifts_per_day)
    }

    /// Number of calendar days in the range, counting both ends.
    ///
    /// Returns zero when the range is inverted.
    pub fn day_count(&self) -> u64 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u64::try_from(days).unwrap_or(0)
    }

    /// Validates the parameters before any computation happens.
    ///
    /// The date range is always checked and must satisfy
    /// `start_date < end_date`. In [`ValidationMode::Strict`] the wage must
    /// be positive and both headcount fields must be non-zero.
    ///
    /// # Example
    ///
    /// ```
    /// use reform_cost_engine::models::OperatingParameters;
    /// use reform_cost_engine::error::EngineError;
    /// use chrono::NaiveDate;
    ///
    /// let params = OperatingParameters {
    ///     start_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    ///     ..OperatingParameters::default()
    /// };
    /// assert!(matches!(params.validate(), Err(EngineError::InvalidDateRange { .. })));
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_date >= self.end_date {
            return Err(EngineError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }

        if self.validation == ValidationMode::Permissive {
            return Ok(());
        }

        if self.hourly_wage <= Decimal::ZERO {
            return Err(EngineError::InvalidParameter {
                field: "hourly_wage".to_string(),
                message: format!("must be greater than zero, got {}", self.hourly_wage),
            });
        }

        if self.employees_per_shift == 0 {
            return Err(EngineError::InvalidParameter {
                field: "employees_per_shift".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.shifts_per_day == 0 {
            return Err(EngineError::InvalidParameter {
                field: "shifts_per_day".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_match_plant_scenario() {
        let params = OperatingParameters::default();
        assert_eq!(params.hourly_wage, Decimal::from(5000));
        assert_eq!(params.employees_per_shift, 6);
        assert_eq!(params.shifts_per_day, 3);
        assert_eq!(params.start_date, date(2025, 7, 1));
        assert_eq!(params.end_date, date(2027, 12, 31));
        assert_eq!(params.validation, ValidationMode::Strict);
    }

    #[test]
    fn test_day_count_is_inclusive() {
        let params = OperatingParameters {
            start_date: date(2025, 7, 1),
            end_date: date(2025, 7, 31),
            ..OperatingParameters::default()
        };
        assert_eq!(params.day_count(), 31);

        // 2025-07-01..=2027-12-31 spans 184 + 365 + 365 days
        assert_eq!(OperatingParameters::default().day_count(), 914);
    }

    #[test]
    fn test_day_count_of_inverted_range_is_zero() {
        let params = OperatingParameters {
            start_date: date(2027, 1, 1),
            end_date: date(2026, 1, 1),
            ..OperatingParameters::default()
        };
        assert_eq!(params.day_count(), 0);
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let params = OperatingParameters {
            start_date: date(2027, 1, 1),
            end_date: date(2026, 1, 1),
            ..OperatingParameters::default()
        };
        match params.validate() {
            Err(EngineError::InvalidDateRange { start, end }) => {
                assert_eq!(start, date(2027, 1, 1));
                assert_eq!(end, date(2026, 1, 1));
            }
            other => panic!("Expected InvalidDateRange, got {:?}", other),
        }
    }

    #[test]
    fn test_equal_dates_are_rejected() {
        let params = OperatingParameters {
            start_date: date(2026, 3, 1),
            end_date: date(2026, 3, 1),
            ..OperatingParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(EngineError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_permissive_mode_still_checks_dates() {
        let params = OperatingParameters {
            start_date: date(2026, 3, 2),
            end_date: date(2026, 3, 1),
            validation: ValidationMode::Permissive,
            ..OperatingParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(EngineError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_strict_mode_rejects_negative_wage() {
        let params = OperatingParameters {
            hourly_wage: Decimal::from(-100),
            ..OperatingParameters::default()
        };
        match params.validate() {
            Err(EngineError::InvalidParameter { field, .. }) => {
                assert_eq!(field, "hourly_wage");
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_mode_rejects_zero_headcount() {
        let params = OperatingParameters {
            employees_per_shift: 0,
            ..OperatingParameters::default()
        };
        match params.validate() {
            Err(EngineError::InvalidParameter { field, .. }) => {
                assert_eq!(field, "employees_per_shift");
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }

        let params = OperatingParameters {
            shifts_per_day: 0,
            ..OperatingParameters::default()
        };
        match params.validate() {
            Err(EngineError::InvalidParameter { field, .. }) => {
                assert_eq!(field, "shifts_per_day");
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_permissive_mode_accepts_out_of_domain_values() {
        let params = OperatingParameters {
            hourly_wage: Decimal::from(-100),
            employees_per_shift: 0,
            validation: ValidationMode::Permissive,
            ..OperatingParameters::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_deserialize_fills_missing_fields_with_defaults() {
        let json = r#"{
            "hourly_wage": "6200.50",
            "end_date": "2026-06-30"
        }"#;

        let params: OperatingParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.hourly_wage, "6200.50".parse::<Decimal>().unwrap());
        assert_eq!(params.employees_per_shift, 6);
        assert_eq!(params.start_date, date(2025, 7, 1));
        assert_eq!(params.end_date, date(2026, 6, 30));
    }

    #[test]
    fn test_validation_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&ValidationMode::Permissive).unwrap(),
            "\"permissive\""
        );
        let mode: ValidationMode = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(mode, ValidationMode::Strict);
    }
}

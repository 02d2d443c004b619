//! Request types for the reform cost engine API.
//!
//! This module defines the JSON request structure for the `/simulate`
//! endpoint. Every field is optional and falls back to the standard plant
//! scenario.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{OperatingParameters, ValidationMode};

/// Request body for the `/simulate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Pay for one ordinary hour of work.
    #[serde(default = "default_hourly_wage")]
    pub hourly_wage: Decimal,
    /// Number of employees working each shift.
    #[serde(default = "default_employees_per_shift")]
    pub employees_per_shift: u32,
    /// Number of shifts per day.
    #[serde(default = "default_shifts_per_day")]
    pub shifts_per_day: u32,
    /// First simulated day (inclusive).
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    /// Last simulated day (inclusive).
    #[serde(default = "default_end_date")]
    pub end_date: NaiveDate,
    /// How strictly numeric fields are validated.
    #[serde(default)]
    pub validation: ValidationMode,
    /// Whether the response should carry every daily breakdown.
    #[serde(default)]
    pub include_daily: bool,
}

fn default_hourly_wage() -> Decimal {
    OperatingParameters::default().hourly_wage
}

fn default_employees_per_shift() -> u32 {
    OperatingParameters::default().employees_per_shift
}

fn default_shifts_per_day() -> u32 {
    OperatingParameters::default().shifts_per_day
}

fn default_start_date() -> NaiveDate {
    OperatingParameters::default().start_date
}

fn default_end_date() -> NaiveDate {
    OperatingParameters::default().end_date
}

impl Default for SimulationRequest {
    fn default() -> Self {
        OperatingParameters::default().into()
    }
}

impl From<SimulationRequest> for OperatingParameters {
    fn from(req: SimulationRequest) -> Self {
        OperatingParameters {
            hourly_wage: req.hourly_wage,
            employees_per_shift: req.employees_per_shift,
            shifts_per_day: req.shifts_per_day,
            start_date: req.start_date,
            end_date: req.end_date,
            validation: req.validation,
        }
    }
}

impl From<OperatingParameters> for SimulationRequest {
    fn from(params: OperatingParameters) -> Self {
        SimulationRequest {
            hourly_wage: params.hourly_wage,
            employees_per_shift: params.employees_per_shift,
            shifts_per_day: params.shifts_per_day,
            start_date: params.start_date,
            end_date: params.end_date,
            validation: params.validation,
            include_daily: false,
        }
    }
}

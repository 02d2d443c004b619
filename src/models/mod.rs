//! Core data models for the reform cost engine.
//!
//! This module contains all the domain models used throughout the engine.

mod daily_cost;
mod monthly_summary;
mod operating_parameters;
mod regime;
mod simulation_result;

pub use daily_cost::{CostCategory, CostLine, DailyCostBreakdown};
pub use monthly_summary::{MonthlySummary, YearMonth};
pub use operating_parameters::{OperatingParameters, ValidationMode};
pub use regime::RegulatoryRegime;
pub use simulation_result::{SimulationResult, SimulationTotals};

/// Clock hours in a calendar day.
pub const HOURS_PER_DAY: u32 = 24;

/// Days over which the weekly ordinary hours are spread.
pub const DAYS_PER_WEEK: u32 = 7;

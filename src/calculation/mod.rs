//! Calculation logic for the reform cost engine.
//!
//! This module contains the regime resolution, day detection, daily cost
//! calculation, monthly aggregation and the simulation runner that ties
//! them together over an inclusive date range.

mod daily_cost;
mod date_range;
mod day_detection;
mod monthly_aggregation;
mod regime;
mod simulation;

pub use daily_cost::{check_cost_range, compute_day, compute_day_default};
pub use date_range::DateRange;
pub use day_detection::{DayType, get_day_type};
pub use monthly_aggregation::aggregate;
pub use regime::{resolve, resolve_with};
pub use simulation::{regime_transitions, run_simulation, simulate_days};

//! Daily cost models.
//!
//! This module contains the [`DailyCostBreakdown`] produced for every
//! simulated calendar day, together with the [`CostLine`] items it is built
//! from.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RegulatoryRegime;
use crate::calculation::DayType;

/// The category of hours a cost line pays for.
///
/// # Example
///
/// ```
/// use reform_cost_engine::models::CostCategory;
///
/// let category = CostCategory::Night;
/// assert_eq!(format!("{:?}", category), "Night");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    /// The per-day share of the weekly ordinary hours, paid at the base wage.
    Ordinary,
    /// Daytime hours beyond the ordinary share.
    Overtime,
    /// Surcharge for hours inside the night block.
    Night,
    /// Premium for every hour of a Sunday, on top of the other categories.
    Sunday,
}

/// A single cost item for one employee on one day.
///
/// # Example
///
/// ```
/// use reform_cost_engine::models::{CostCategory, CostLine};
/// use rust_decimal::Decimal;
///
/// let line = CostLine {
///     category: CostCategory::Night,
///     hours: Decimal::from(3),
///     rate: Decimal::from(1750),
///     amount: Decimal::from(5250),
/// };
/// assert_eq!(line.hours * line.rate, line.amount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLine {
    /// The category of hours being paid.
    pub category: CostCategory,
    /// Number of hours in this category.
    pub hours: Decimal,
    /// Amount paid per hour in this category.
    pub rate: Decimal,
    /// Amount owed to a single employee (hours * rate).
    pub amount: Decimal,
}

/// The labor cost decomposition of one calendar day.
///
/// Hour fields are per employee. Sunday hours overlap the ordinary,
/// overtime and night hours rather than replacing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCostBreakdown {
    /// The calendar day.
    pub date: NaiveDate,
    /// Weekday, Saturday or Sunday.
    pub day_type: DayType,
    /// The regime the day was costed under.
    pub regime: RegulatoryRegime,
    /// Per-day share of the weekly ordinary hours threshold.
    pub ordinary_hours: Decimal,
    /// Daytime hours exceeding the ordinary share.
    pub overtime_hours: Decimal,
    /// Hours inside the night block.
    pub night_hours: Decimal,
    /// Hours before the night block.
    pub daytime_hours: Decimal,
    /// Hours paid at the Sunday premium (24 on Sundays, otherwise 0).
    pub sunday_hours: Decimal,
    /// Employees costed across all shifts of the day.
    pub employees_total: u64,
    /// Cost items for a single employee.
    pub cost_lines: Vec<CostLine>,
    /// Sum of the cost line amounts.
    pub per_employee_cost: Decimal,
    /// Cost of all employees for the day.
    pub total_daily_cost: Decimal,
}

impl DailyCostBreakdown {
    /// Returns the cost line for a category, if the day has hours in it.
    pub fn line(&self, category: CostCategory) -> Option<&CostLine> {
        self.cost_lines.iter().find(|l| l.category == category)
    }
}

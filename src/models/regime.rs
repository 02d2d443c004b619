//! The regulatory regime in force on a given date.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three regulatory parameters that the reform changes over time.
///
/// A regime is never stored; it is resolved from the regulatory timeline
/// for each date that needs it.
///
/// # Example
///
/// ```
/// use reform_cost_engine::models::RegulatoryRegime;
/// use rust_decimal::Decimal;
///
/// let regime = RegulatoryRegime {
///     weekly_ordinary_hours_threshold: 44,
///     night_start_hour: 19,
///     sunday_premium_multiplier: Decimal::new(80, 2),
/// };
/// assert_eq!(regime.night_hours(), 5);
/// assert_eq!(regime.daytime_hours(), 19);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegulatoryRegime {
    /// Legal ordinary hours per week (46 before the reform, 44 after).
    pub weekly_ordinary_hours_threshold: u32,
    /// Clock hour (24-hour clock) at which night surcharge hours begin.
    pub night_start_hour: u32,
    /// Premium over the ordinary wage owed for each Sunday hour.
    pub sunday_premium_multiplier: Decimal,
}

impl RegulatoryRegime {
    /// Hours of a day that fall in the night block, from the night start to midnight.
    pub fn night_hours(&self) -> u32 {
        super::HOURS_PER_DAY.saturating_sub(self.night_start_hour)
    }

    /// Hours of a day before the night block starts.
    pub fn daytime_hours(&self) -> u32 {
        super::HOURS_PER_DAY - self.night_hours()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_night_block_before_reform() {
        let regime = RegulatoryRegime {
            weekly_ordinary_hours_threshold: 46,
            night_start_hour: 21,
            sunday_premium_multiplier: Decimal::new(75, 2),
        };
        assert_eq!(regime.night_hours(), 3);
        assert_eq!(regime.daytime_hours(), 21);
    }

    #[test]
    fn test_night_start_at_midnight_leaves_no_night_hours() {
        let regime = RegulatoryRegime {
            weekly_ordinary_hours_threshold: 44,
            night_start_hour: 24,
            sunday_premium_multiplier: Decimal::ONE,
        };
        assert_eq!(regime.night_hours(), 0);
        assert_eq!(regime.daytime_hours(), 24);
    }

    #[test]
    fn test_regime_serialization() {
        let regime = RegulatoryRegime {
            weekly_ordinary_hours_threshold: 44,
            night_start_hour: 19,
            sunday_premium_multiplier: Decimal::new(90, 2),
        };

        let json = serde_json::to_string(&regime).unwrap();
        assert!(json.contains("\"weekly_ordinary_hours_threshold\":44"));
        assert!(json.contains("\"night_start_hour\":19"));
        assert!(json.contains("\"sunday_premium_multiplier\":\"0.90\""));
    }
}

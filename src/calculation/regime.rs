//! Regime resolution.
//!
//! Maps a calendar date to the [`RegulatoryRegime`] in force on it. Each of
//! the three fields is an independent step function of the date, and a
//! threshold date already belongs to the new regime.

use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::config::RegulatoryTimeline;
use crate::models::RegulatoryRegime;

static BUILTIN_TIMELINE: LazyLock<RegulatoryTimeline> = LazyLock::new(RegulatoryTimeline::builtin);

/// Resolves the regime in force on `date` under the built-in reform timeline.
///
/// Total over every date; there are no error conditions.
///
/// # Example
///
/// ```
/// use reform_cost_engine::calculation::resolve;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let regime = resolve(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
/// assert_eq!(regime.weekly_ordinary_hours_threshold, 46);
/// assert_eq!(regime.night_start_hour, 21);
/// assert_eq!(regime.sunday_premium_multiplier, Decimal::new(75, 2));
/// ```
pub fn resolve(date: NaiveDate) -> RegulatoryRegime {
    resolve_with(&BUILTIN_TIMELINE, date)
}

/// Resolves the regime in force on `date` under a given timeline.
pub fn resolve_with(timeline: &RegulatoryTimeline, date: NaiveDate) -> RegulatoryRegime {
    timeline.regime_at(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day_before(d: NaiveDate) -> NaiveDate {
        d.pred_opt().unwrap()
    }

    #[test]
    fn test_weekly_threshold_changes_on_2025_07_01() {
        let threshold = date(2025, 7, 1);
        assert_eq!(resolve(day_before(threshold)).weekly_ordinary_hours_threshold, 46);
        assert_eq!(resolve(threshold).weekly_ordinary_hours_threshold, 44);
    }

    #[test]
    fn test_night_start_changes_on_2025_12_01() {
        let threshold = date(2025, 12, 1);
        assert_eq!(resolve(day_before(threshold)).night_start_hour, 21);
        assert_eq!(resolve(threshold).night_start_hour, 19);
    }

    #[test]
    fn test_sunday_premium_steps() {
        let cases = [
            (date(2025, 7, 1), Decimal::new(75, 2), Decimal::new(80, 2)),
            (date(2026, 7, 1), Decimal::new(80, 2), Decimal::new(90, 2)),
            (date(2027, 7, 1), Decimal::new(90, 2), Decimal::ONE),
        ];

        for (threshold, old, new) in cases {
            assert_eq!(
                resolve(day_before(threshold)).sunday_premium_multiplier,
                old,
                "day before {}",
                threshold
            );
            assert_eq!(
                resolve(threshold).sunday_premium_multiplier,
                new,
                "on {}",
                threshold
            );
        }
    }

    #[test]
    fn test_fields_change_independently() {
        // Between 2025-07-01 and 2025-12-01 the threshold has changed
        // but the night block has not.
        let regime = resolve(date(2025, 9, 10));
        assert_eq!(regime.weekly_ordinary_hours_threshold, 44);
        assert_eq!(regime.night_start_hour, 21);
        assert_eq!(regime.sunday_premium_multiplier, Decimal::new(80, 2));
    }

    #[test]
    fn test_post_reform_weekday_regime() {
        let regime = resolve(date(2026, 1, 15));
        assert_eq!(regime.weekly_ordinary_hours_threshold, 44);
        assert_eq!(regime.night_start_hour, 19);
        assert_eq!(regime.sunday_premium_multiplier, Decimal::new(80, 2));
    }

    #[test]
    fn test_distant_dates_resolve() {
        let ancient = resolve(date(1900, 1, 1));
        assert_eq!(ancient.weekly_ordinary_hours_threshold, 46);
        assert_eq!(ancient.night_start_hour, 21);

        let future = resolve(date(2200, 1, 1));
        assert_eq!(future.weekly_ordinary_hours_threshold, 44);
        assert_eq!(future.sunday_premium_multiplier, Decimal::ONE);
    }

    #[test]
    fn test_resolve_with_custom_timeline() {
        let mut timeline = RegulatoryTimeline::builtin();
        timeline.weekly_ordinary_hours_threshold.steps.push(crate::config::ScheduleStep {
            effective_date: date(2026, 7, 15),
            value: 42,
        });

        assert_eq!(
            resolve_with(&timeline, date(2026, 7, 14)).weekly_ordinary_hours_threshold,
            44
        );
        assert_eq!(
            resolve_with(&timeline, date(2026, 7, 15)).weekly_ordinary_hours_threshold,
            42
        );
    }
}

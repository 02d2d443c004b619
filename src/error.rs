//! Error types for the reform cost engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading the regulatory
//! configuration or validating a simulation request.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the reform cost engine.
///
/// Every variant here is raised either while loading configuration or
/// while checking a run's input, before any day is computed.
///
/// # Example
///
/// ```
/// use reform_cost_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidDateRange {
///     start: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Start date 2027-01-01 must be before end date 2026-01-01"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A regulatory schedule was loaded but is not usable.
    #[error("Invalid timeline for '{field}': {message}")]
    InvalidTimeline {
        /// The regime field whose schedule is invalid.
        field: String,
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// The simulation start date is not strictly before the end date.
    #[error("Start date {start} must be before end date {end}")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// An operating parameter is outside its allowed domain.
    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameter {
        /// The parameter that was invalid.
        field: String,
        /// A description of what made the parameter invalid.
        message: String,
    },

    /// The costs of a run would not fit in a `Decimal`.
    #[error("Simulated cost is out of range: {message}")]
    CostOutOfRange {
        /// The inputs that drive the cost bound.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/timeline.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/timeline.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_timeline_displays_field_and_message() {
        let error = EngineError::InvalidTimeline {
            field: "night_start_hour".to_string(),
            message: "steps are not in chronological order".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid timeline for 'night_start_hour': steps are not in chronological order"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_both_dates() {
        let error = EngineError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Start date 2025-07-01 must be before end date 2025-07-01"
        );
    }

    #[test]
    fn test_invalid_parameter_displays_field_and_message() {
        let error = EngineError::InvalidParameter {
            field: "hourly_wage".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'hourly_wage': must be greater than zero"
        );
    }

    #[test]
    fn test_cost_out_of_range_displays_message() {
        let error = EngineError::CostOutOfRange {
            message: "hourly wage 1e26 for 18 employees over 2 days".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Simulated cost is out of range: hourly wage 1e26 for 18 employees over 2 days"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

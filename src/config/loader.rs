//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the regulatory
//! timeline from YAML files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::RegulatoryRegime;

use super::types::{
    ReformMetadata, RegulatoryConfig, RegulatoryTimeline, SurchargeRates,
};

/// Loads and provides access to the regulatory configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/co_reform_2025/
/// ├── reform.yaml      # Reform metadata
/// ├── surcharges.yaml  # Overtime multiplier and night surcharge
/// └── timeline.yaml    # Dated schedules for the three regime fields
/// ```
///
/// # Example
///
/// ```no_run
/// use reform_cost_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/co_reform_2025").unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let regime = loader.regime_at(date);
/// println!("Night hours start at {}:00", regime.night_start_hour);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: RegulatoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The timeline schedules are out of order or name an impossible hour
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ReformMetadata>(&path.join("reform.yaml"))?;
        let surcharges = Self::load_yaml::<SurchargeRates>(&path.join("surcharges.yaml"))?;
        let timeline = Self::load_yaml::<RegulatoryTimeline>(&path.join("timeline.yaml"))?;
        timeline.validate()?;

        debug!(
            code = %metadata.code,
            version = %metadata.version,
            "Loaded regulatory configuration"
        );

        Ok(Self {
            config: RegulatoryConfig::new(metadata, timeline, surcharges),
        })
    }

    /// Creates a loader around the built-in 2025-2027 reform.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying regulatory configuration.
    pub fn config(&self) -> &RegulatoryConfig {
        &self.config
    }

    /// Returns the reform metadata.
    pub fn metadata(&self) -> &ReformMetadata {
        self.config.metadata()
    }

    /// Returns the regime in force on `date` under the loaded timeline.
    pub fn regime_at(&self, date: NaiveDate) -> RegulatoryRegime {
        self.config.timeline().regime_at(date)
    }
}

//! Configuration loading and management for the reform cost engine.
//!
//! This module provides functionality to load the regulatory timeline from
//! YAML files. Each regime field is a dated step schedule, so a change in
//! the rules is a configuration edit rather than a code change.
//!
//! # Example
//!
//! ```no_run
//! use reform_cost_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/co_reform_2025").unwrap();
//! println!("Loaded reform: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ReformMetadata, RegulatoryConfig, RegulatoryTimeline, ScheduleStep, StepSchedule,
    SurchargeRates,
};

//! Labor cost engine for continuously operating plants under the
//! 2025-2027 Colombian labor reform.
//!
//! This crate resolves the regulatory regime in force on each date, costs
//! every day of a simulated range for a 24/7 shift plant, and aggregates
//! the result into a monthly series.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

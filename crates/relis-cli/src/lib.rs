//! CLI library components for the statistical analysis model exporter.

pub mod commands;
pub mod logging;
pub mod types;

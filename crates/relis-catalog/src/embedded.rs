//! Embedded export configuration.
//!
//! The default configuration is embedded at compile time using `include_str!()`
//! so the binary needs no configuration file to run.

/// Default export configuration (exclusions, static fields, statistical catalog).
pub const DEFAULT_EXPORT_CONFIG: &str = include_str!("../data/export.toml");

/// Origin label used in error messages for the embedded configuration.
pub const DEFAULT_EXPORT_CONFIG_ORIGIN: &str = "<embedded export.toml>";

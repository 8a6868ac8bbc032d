//! Export configuration and schema snapshot loading.
//!
//! - **embedded**: the default configuration compiled into the binary
//! - **document**: serde shapes of configuration and schema files
//! - **loader**: parsing and validation into `relis_model` types

#![deny(unsafe_code)]

pub mod document;
pub mod embedded;
pub mod error;
pub mod loader;

pub use crate::error::CatalogError;
pub use crate::loader::{
    default_statistical_catalog, load_default_export_config, load_export_config, load_schema,
    parse_export_config, parse_schema,
};

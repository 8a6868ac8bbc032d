use std::path::Path;

use tracing::debug;

use relis_model::{ExportConfig, RawSchema, StatisticalFunction};

use crate::document::{ExportConfigDocument, SchemaDocument};
use crate::embedded::{DEFAULT_EXPORT_CONFIG, DEFAULT_EXPORT_CONFIG_ORIGIN};
use crate::error::CatalogError;

/// Load the export configuration embedded in the binary.
pub fn load_default_export_config() -> Result<ExportConfig, CatalogError> {
    parse_export_config(DEFAULT_EXPORT_CONFIG, DEFAULT_EXPORT_CONFIG_ORIGIN)
}

/// The statistical catalog of the embedded configuration, in declaration order.
pub fn default_statistical_catalog() -> Result<Vec<StatisticalFunction>, CatalogError> {
    Ok(load_default_export_config()?.statistical_catalog().to_vec())
}

/// Load an export configuration from a TOML file.
pub fn load_export_config(path: &Path) -> Result<ExportConfig, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    parse_export_config(&text, &path.display().to_string())
}

/// Parse and validate an export configuration; `origin` only labels errors.
pub fn parse_export_config(text: &str, origin: &str) -> Result<ExportConfig, CatalogError> {
    let document: ExportConfigDocument =
        toml::from_str(text).map_err(|source| CatalogError::Toml {
            origin: origin.to_string(),
            source,
        })?;
    let config = document
        .into_config()
        .map_err(|source| CatalogError::Config {
            origin: origin.to_string(),
            source,
        })?;
    debug!(
        origin,
        exclusions = config.metadata_exclusion_fields().len(),
        static_fields = config.static_fields().len(),
        functions = config.statistical_catalog().len(),
        "loaded export configuration"
    );
    Ok(config)
}

/// Load a schema snapshot from a JSON file.
pub fn load_schema(path: &Path) -> Result<RawSchema, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    parse_schema(&text, &path.display().to_string())
}

/// Parse a schema snapshot; `origin` only labels errors.
pub fn parse_schema(text: &str, origin: &str) -> Result<RawSchema, CatalogError> {
    let document: SchemaDocument =
        serde_json::from_str(text).map_err(|source| CatalogError::Json {
            origin: origin.to_string(),
            source,
        })?;
    let fields = document.into_fields();
    debug!(origin, fields = fields.len(), "loaded schema snapshot");
    Ok(fields)
}

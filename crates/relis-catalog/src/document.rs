use serde::de::{self, Deserializer};
use serde::Deserialize;

use relis_model::{EnvironmentSettings, ExportConfig, RawSchema, StatisticalFunction};

/// On-disk shape of an export configuration.
///
/// Sections are optional here so that a missing one is reported as
/// `ConfigurationMissing` by name instead of as a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfigDocument {
    pub metadata_exclusion_fields: Option<Vec<String>>,
    pub static_fields: Option<RawSchema>,
    pub statistical_functions: Option<Vec<StatisticalFunction>>,
    pub environment: Option<EnvironmentSettings>,
}

impl ExportConfigDocument {
    pub fn into_config(self) -> relis_model::Result<ExportConfig> {
        let mut builder = ExportConfig::builder();
        if let Some(fields) = self.metadata_exclusion_fields {
            builder = builder.metadata_exclusion_fields(fields);
        }
        if let Some(fields) = self.static_fields {
            builder = builder.static_fields(fields);
        }
        if let Some(catalog) = self.statistical_functions {
            builder = builder.statistical_catalog(catalog);
        }
        if let Some(environment) = self.environment {
            builder = builder.environment(environment);
        }
        builder.build()
    }
}

/// Schema snapshot as exported by the schema store.
///
/// The store's table configuration nests fields under `fields`; a bare
/// mapping of field name to definition is accepted as well. A populated
/// `fields` table is tried first, then the bare mapping, so a bare schema
/// that happens to define a field called `fields` keeps all of its fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaDocument {
    Table {
        #[serde(deserialize_with = "populated_fields")]
        fields: RawSchema,
    },
    Fields(RawSchema),
    /// Table configuration that defines no field at all.
    EmptyTable { fields: RawSchema },
}

impl SchemaDocument {
    pub fn into_fields(self) -> RawSchema {
        match self {
            SchemaDocument::Table { fields }
            | SchemaDocument::Fields(fields)
            | SchemaDocument::EmptyTable { fields } => fields,
        }
    }
}

fn populated_fields<'de, D>(deserializer: D) -> Result<RawSchema, D::Error>
where
    D: Deserializer<'de>,
{
    let fields = RawSchema::deserialize(deserializer)?;
    if fields.is_empty() {
        return Err(de::Error::custom("table configuration has no fields"));
    }
    Ok(fields)
}

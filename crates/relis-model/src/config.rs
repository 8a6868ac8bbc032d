//! Export configuration handed to assembly and rendering.
//!
//! The configuration is an immutable value: it is validated once when built
//! and then shared read-only, so concurrent assemblies for different projects
//! never observe each other's settings.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SamError};
use crate::field::{RawFieldDefinition, RawSchema};
use crate::statistics::StatisticalFunction;

pub const DEFAULT_PROJECT_NAME: &str = "relis";

/// Settings consumed by the code-generation templates and packaging, not by assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSettings {
    pub project_name: String,
    /// Separator between values of a multiple field in the exported classification CSV.
    pub multivalue_separator: String,
    /// Whether the generated environment drops rows with missing values.
    pub drop_na: bool,
    pub target_directory: String,
    pub library_artifact_name: String,
    pub playground_artifact_name: String,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            multivalue_separator: "|".to_string(),
            drop_na: false,
            target_directory: "cside/export_python/".to_string(),
            library_artifact_name: "relis_statistics_kernel.py".to_string(),
            playground_artifact_name: "relis_statistics_playground.py".to_string(),
        }
    }
}

impl EnvironmentSettings {
    /// Name of the classification data file shipped with the environment.
    pub fn classification_file_name(&self) -> String {
        format!("relis_classification_{}.csv", self.project_name)
    }

    /// Name of the packaged environment (archive stem).
    pub fn environment_name(&self) -> String {
        format!("python_env_{}", self.project_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportConfig {
    metadata_exclusion_fields: BTreeSet<String>,
    static_fields: RawSchema,
    statistical_catalog: Vec<StatisticalFunction>,
    environment: EnvironmentSettings,
}

impl ExportConfig {
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }

    /// Internal bookkeeping fields that never reach the model.
    pub fn metadata_exclusion_fields(&self) -> &BTreeSet<String> {
        &self.metadata_exclusion_fields
    }

    /// Project-wide computed fields injected when the schema lacks them.
    pub fn static_fields(&self) -> &RawSchema {
        &self.static_fields
    }

    /// Statistical functions in declaration order.
    pub fn statistical_catalog(&self) -> &[StatisticalFunction] {
        &self.statistical_catalog
    }

    pub fn environment(&self) -> &EnvironmentSettings {
        &self.environment
    }

    /// Same configuration for another project.
    ///
    /// # Errors
    ///
    /// [`SamError::InvalidConfiguration`] when the name is blank.
    pub fn with_project_name(mut self, project_name: impl Into<String>) -> Result<Self> {
        self.environment.project_name = project_name.into();
        validate_project_name(&self.environment)?;
        Ok(self)
    }
}

/// Collects configuration sections; every section must be set explicitly, even when empty.
#[derive(Debug, Clone, Default)]
pub struct ExportConfigBuilder {
    metadata_exclusion_fields: Option<BTreeSet<String>>,
    static_fields: Option<RawSchema>,
    statistical_catalog: Option<Vec<StatisticalFunction>>,
    environment: Option<EnvironmentSettings>,
}

impl ExportConfigBuilder {
    #[must_use]
    pub fn metadata_exclusion_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata_exclusion_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn static_fields(mut self, fields: RawSchema) -> Self {
        self.static_fields = Some(fields);
        self
    }

    #[must_use]
    pub fn static_field(mut self, name: impl Into<String>, field: RawFieldDefinition) -> Self {
        self.static_fields
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), field);
        self
    }

    #[must_use]
    pub fn statistical_catalog(mut self, catalog: Vec<StatisticalFunction>) -> Self {
        self.statistical_catalog = Some(catalog);
        self
    }

    #[must_use]
    pub fn environment(mut self, environment: EnvironmentSettings) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Validate and freeze the configuration.
    ///
    /// # Errors
    ///
    /// [`SamError::ConfigurationMissing`] when a section was never set.
    /// [`SamError::InvalidConfiguration`] for duplicate or unnamed catalog
    /// entries, static fields that are excluded or lack a classification
    /// attribute, and an empty project name.
    pub fn build(self) -> Result<ExportConfig> {
        let metadata_exclusion_fields = self
            .metadata_exclusion_fields
            .ok_or_else(|| missing("metadata_exclusion_fields"))?;
        let static_fields = self.static_fields.ok_or_else(|| missing("static_fields"))?;
        let statistical_catalog = self
            .statistical_catalog
            .ok_or_else(|| missing("statistical_functions"))?;
        let environment = self.environment.unwrap_or_default();

        validate_catalog(&statistical_catalog)?;
        validate_static_fields(&static_fields, &metadata_exclusion_fields)?;
        validate_project_name(&environment)?;

        Ok(ExportConfig {
            metadata_exclusion_fields,
            static_fields,
            statistical_catalog,
            environment,
        })
    }
}

fn missing(key: &str) -> SamError {
    SamError::ConfigurationMissing {
        key: key.to_string(),
    }
}

fn validate_project_name(environment: &EnvironmentSettings) -> Result<()> {
    if environment.project_name.trim().is_empty() {
        return Err(SamError::InvalidConfiguration {
            message: "project_name must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Static fields are injected verbatim, so they must classify on their own.
fn validate_static_fields(static_fields: &RawSchema, exclusions: &BTreeSet<String>) -> Result<()> {
    for (name, field) in static_fields {
        if exclusions.contains(name) {
            return Err(SamError::InvalidConfiguration {
                message: format!("static field `{name}` is also a metadata exclusion"),
            });
        }
        field
            .classification_attributes(name)
            .map_err(|error| SamError::InvalidConfiguration {
                message: format!("static {error}"),
            })?;
    }
    Ok(())
}

fn validate_catalog(catalog: &[StatisticalFunction]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for function in catalog {
        if function.name.trim().is_empty() {
            return Err(SamError::InvalidConfiguration {
                message: format!("statistical function titled `{}` has no name", function.title),
            });
        }
        if !seen.insert(function.name.as_str()) {
            return Err(SamError::InvalidConfiguration {
                message: format!("duplicate statistical function `{}`", function.name),
            });
        }
    }
    Ok(())
}

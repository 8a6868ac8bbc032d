use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ExportConfig;
use crate::enums::DataType;
use crate::statistics::StatisticalFunction;

/// A schema field normalized for statistical analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationField {
    pub name: String,
    pub title: String,
    pub data_type: DataType,
    /// True when the field can hold more than one value per paper.
    pub multiple: bool,
    /// Catalog functions applicable to `data_type`, in catalog order.
    pub statistics: Vec<StatisticalFunction>,
}

/// Statistical analysis model: classification fields keyed by field name.
///
/// Keys are kept sorted so that serializing the same model twice yields the
/// same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatisticalAnalysisModel {
    fields: BTreeMap<String, ClassificationField>,
}

impl StatisticalAnalysisModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field under its own name, replacing any previous entry.
    pub fn insert(&mut self, field: ClassificationField) -> Option<ClassificationField> {
        self.fields.insert(field.name.clone(), field)
    }

    pub fn get(&self, name: &str) -> Option<&ClassificationField> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &ClassificationField> {
        self.fields.values()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields resolved to `data_type`.
    pub fn count_of(&self, data_type: DataType) -> usize {
        self.fields()
            .filter(|field| field.data_type == data_type)
            .count()
    }
}

/// Everything the code-generation templates receive for one export.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext<'a> {
    pub sam: &'a StatisticalAnalysisModel,
    pub export_config: &'a ExportConfig,
    pub classification_file_name: String,
    pub environment_name: String,
}

impl<'a> RenderContext<'a> {
    pub fn new(sam: &'a StatisticalAnalysisModel, export_config: &'a ExportConfig) -> Self {
        let environment = export_config.environment();
        Self {
            sam,
            export_config,
            classification_file_name: environment.classification_file_name(),
            environment_name: environment.environment_name(),
        }
    }
}

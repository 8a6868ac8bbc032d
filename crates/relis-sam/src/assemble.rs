//! Statistical analysis model assembly.
//!
//! Assembly is a sequence of pure steps over an owned schema snapshot:
//!
//! 1. drop metadata fields named in the exclusion set
//! 2. add static fields the schema does not define
//! 3. normalize every remaining field, leaving out unclassifiable ones
//!
//! Nothing is cached between calls; the same schema and configuration always
//! produce the same model. Field-level problems stay with their field: an
//! incomplete definition is rejected and reported, the rest of the schema
//! is still modeled.

use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use relis_model::{ExportConfig, RawSchema, SamError, StatisticalAnalysisModel};

use crate::augment::augment_static;
use crate::filter::filter_metadata;
use crate::normalize::{NormalizedField, normalize_field};

/// A schema field left out of the model because its definition is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedField {
    pub name: String,
    pub error: SamError,
}

/// A model together with what assembly left out or added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assembly {
    pub sam: StatisticalAnalysisModel,
    /// Fields dropped because no classification rule applies to them.
    pub unclassifiable: Vec<String>,
    /// Fields dropped because an attribute is missing or malformed.
    pub rejected: Vec<RejectedField>,
    /// Metadata fields present in the schema and removed.
    pub removed_metadata: Vec<String>,
    /// Static fields added because the schema lacked them.
    pub added_static: Vec<String>,
}

impl Assembly {
    /// Fields kept in the model although no catalog function applies to them.
    pub fn fields_without_statistics(&self) -> Vec<&str> {
        self.sam
            .fields()
            .filter(|field| field.statistics.is_empty())
            .map(|field| field.name.as_str())
            .collect()
    }

    /// One-line outcome for the user.
    pub fn summary(&self) -> String {
        let rejected = if self.rejected.is_empty() {
            String::new()
        } else {
            format!(", {} rejected", self.rejected.len())
        };
        format!(
            "model generated with {} fields, {} excluded as unclassifiable{rejected}",
            self.sam.len(),
            self.unclassifiable.len()
        )
    }
}

/// Build the statistical analysis model of a schema snapshot.
///
/// The configuration was validated when it was built, so assembly itself
/// cannot fail. Fields without a usable classification attribute end up in
/// [`Assembly::rejected`]; unclassifiable fields and fields without applicable
/// functions are reported as well.
pub fn assemble(raw_fields: RawSchema, config: &ExportConfig) -> Assembly {
    let span = info_span!("assemble", project = %config.environment().project_name);
    let _guard = span.enter();

    let exclusions = config.metadata_exclusion_fields();
    let removed_metadata: Vec<String> = raw_fields
        .keys()
        .filter(|name| exclusions.contains(*name))
        .cloned()
        .collect();
    let fields = filter_metadata(raw_fields, exclusions);

    let added_static: Vec<String> = config
        .static_fields()
        .keys()
        .filter(|name| !fields.contains_key(*name))
        .cloned()
        .collect();
    let fields = augment_static(fields, config.static_fields());

    let catalog = config.statistical_catalog();
    let mut sam = StatisticalAnalysisModel::new();
    let mut unclassifiable = Vec::new();
    let mut rejected = Vec::new();
    for (name, field) in &fields {
        match normalize_field(name, field, catalog) {
            Ok(NormalizedField::Classified(classified)) => {
                if classified.statistics.is_empty() {
                    info!(
                        field = %name,
                        data_type = %classified.data_type,
                        "no statistical function applies"
                    );
                }
                debug!(
                    field = %name,
                    data_type = %classified.data_type,
                    multiple = classified.multiple,
                    statistics = classified.statistics.len(),
                    "classified field"
                );
                sam.insert(classified);
            }
            Ok(NormalizedField::Unclassifiable) => {
                info!(field = %name, "field excluded: no classification rule applies");
                unclassifiable.push(name.clone());
            }
            Err(error) => {
                warn!(field = %name, %error, "field rejected");
                rejected.push(RejectedField {
                    name: name.clone(),
                    error,
                });
            }
        }
    }

    info!(
        fields = sam.len(),
        unclassifiable = unclassifiable.len(),
        rejected = rejected.len(),
        removed_metadata = removed_metadata.len(),
        added_static = added_static.len(),
        "assembled statistical analysis model"
    );

    Assembly {
        sam,
        unclassifiable,
        rejected,
        removed_metadata,
        added_static,
    }
}

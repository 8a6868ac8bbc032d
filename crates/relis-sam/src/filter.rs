use std::collections::BTreeSet;

use relis_model::RawSchema;

/// Drop internal bookkeeping fields from the schema.
///
/// Exclusion keys that are not in the schema are ignored.
pub fn filter_metadata(fields: RawSchema, exclusions: &BTreeSet<String>) -> RawSchema {
    fields
        .into_iter()
        .filter(|(name, _)| !exclusions.contains(name))
        .collect()
}

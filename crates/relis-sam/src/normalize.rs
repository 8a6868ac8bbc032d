use relis_model::{ClassificationField, RawFieldDefinition, Result, StatisticalFunction};

use crate::classify::classify_attributes;
use crate::multiplicity::is_multiple;
use crate::select::select_functions;

/// Result of normalizing one raw field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedField {
    Classified(ClassificationField),
    /// Classification resolved to `Unknown`; the field has no place in the model.
    Unclassifiable,
}

/// Turn one raw field into a classification field.
///
/// # Errors
///
/// Propagates `SchemaIncomplete` / `MalformedAttribute` from attribute
/// extraction; nothing is guessed. The caller decides what a rejected field
/// means for the rest of the schema.
pub fn normalize_field(
    name: &str,
    field: &RawFieldDefinition,
    catalog: &[StatisticalFunction],
) -> Result<NormalizedField> {
    let attributes = field.classification_attributes(name)?;
    let classification = classify_attributes(&attributes);
    let Some(data_type) = classification.data_type() else {
        return Ok(NormalizedField::Unclassifiable);
    };

    Ok(NormalizedField::Classified(ClassificationField {
        name: name.to_string(),
        title: field.title_or(name).to_string(),
        data_type,
        multiple: is_multiple(attributes.number_of_values),
        statistics: select_functions(data_type, catalog),
    }))
}

#[cfg(test)]
mod tests {
    use relis_model::{AnalysisType, DataType, ReturnDataType, SamError};

    use super::*;

    fn catalog() -> Vec<StatisticalFunction> {
        vec![
            StatisticalFunction::new(
                "desc_frequency_table",
                "Frequency tables",
                AnalysisType::Descriptive,
                DataType::Nominal,
                ReturnDataType::Dataframe,
            ),
            StatisticalFunction::new(
                "desc_box_plot",
                "Box plots",
                AnalysisType::Descriptive,
                DataType::Continuous,
                ReturnDataType::Figure,
            ),
        ]
    }

    #[test]
    fn nominal_field_gets_nominal_statistics() {
        let field = RawFieldDefinition::new("Venue", "text", "Venue", "select", 3);

        let NormalizedField::Classified(normalized) =
            normalize_field("venue", &field, &catalog()).unwrap()
        else {
            panic!("venue should be classified");
        };

        assert_eq!(normalized.name, "venue");
        assert_eq!(normalized.title, "Venue");
        assert_eq!(normalized.data_type, DataType::Nominal);
        assert!(normalized.multiple);
        assert_eq!(normalized.statistics.len(), 1);
        assert_eq!(normalized.statistics[0].name, "desc_frequency_table");
    }

    #[test]
    fn free_text_is_unclassifiable() {
        let field = RawFieldDefinition::new("Notes", "text", "FreeCategory", "text", 1);
        assert_eq!(
            normalize_field("notes", &field, &catalog()).unwrap(),
            NormalizedField::Unclassifiable
        );
    }

    #[test]
    fn incomplete_field_is_an_error_even_if_it_would_be_dropped() {
        let field = RawFieldDefinition {
            input_type: None,
            ..RawFieldDefinition::new("Notes", "text", "FreeCategory", "text", 1)
        };
        assert_eq!(
            normalize_field("notes", &field, &catalog()).unwrap_err(),
            SamError::SchemaIncomplete {
                field: "notes".to_string(),
                attribute: "input_type",
            }
        );
    }
}

//! Field type classification.
//!
//! Maps the low-level attributes of a raw field to the abstract data type used
//! to pick statistical operations. The decision is a single exhaustive match
//! over `(field_type, category_type, input_type)`, so every combination has an
//! explicit outcome:
//!
//! | field_type | category_type  | input_type | result       |
//! |------------|----------------|------------|--------------|
//! | text, int  | named category | any        | `Nominal`    |
//! | int        | FreeCategory   | select     | `Nominal`    |
//! | int, real  | FreeCategory   | not select | `Continuous` |
//! | real       | FreeCategory   | select     | `Unknown`    |
//! | real       | named category | any        | `Unknown`    |
//! | text       | FreeCategory   | any        | `Unknown`    |
//! | other      | any            | any        | `Unknown`    |
//!
//! Free-text fields are deliberately left `Unknown`; they are not treated as
//! continuous.

use relis_model::{CategoryType, ClassificationAttributes, DataType, FieldType, InputType};

/// Outcome of classifying one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Nominal,
    Continuous,
    /// No rule applies; the field is left out of the model.
    Unknown,
}

impl Classification {
    /// The analysis data type, or `None` for `Unknown`.
    pub fn data_type(self) -> Option<DataType> {
        match self {
            Classification::Nominal => Some(DataType::Nominal),
            Classification::Continuous => Some(DataType::Continuous),
            Classification::Unknown => None,
        }
    }
}

/// Classify a field from its three type-bearing attributes.
pub fn classify(
    field_type: &FieldType,
    category_type: &CategoryType,
    input_type: &InputType,
) -> Classification {
    use CategoryType::{FreeCategory, Named};

    match (field_type, category_type, input_type) {
        (FieldType::Text | FieldType::Int, Named(_), _) => Classification::Nominal,
        (FieldType::Int, FreeCategory, InputType::Select) => Classification::Nominal,
        (FieldType::Int | FieldType::Real, FreeCategory, InputType::Other(_)) => {
            Classification::Continuous
        }
        (FieldType::Real, FreeCategory, InputType::Select) => Classification::Unknown,
        (FieldType::Real, Named(_), _) => Classification::Unknown,
        (FieldType::Text, FreeCategory, _) => Classification::Unknown,
        (FieldType::Other(_), _, _) => Classification::Unknown,
    }
}

/// Classify validated attributes.
pub fn classify_attributes(attributes: &ClassificationAttributes) -> Classification {
    classify(
        &attributes.field_type,
        &attributes.category_type,
        &attributes.input_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_raw(field_type: &str, category_type: &str, input_type: &str) -> Classification {
        classify(
            &FieldType::from(field_type),
            &CategoryType::from(category_type),
            &InputType::from(input_type),
        )
    }

    #[test]
    fn categorized_text_and_int_are_nominal() {
        assert_eq!(classify_raw("text", "Venue", "select"), Classification::Nominal);
        assert_eq!(classify_raw("text", "Venue", "text"), Classification::Nominal);
        assert_eq!(classify_raw("int", "Severity", "select"), Classification::Nominal);
    }

    #[test]
    fn free_int_select_is_nominal() {
        assert_eq!(
            classify_raw("int", "FreeCategory", "select"),
            Classification::Nominal
        );
    }

    #[test]
    fn free_numeric_input_is_continuous() {
        assert_eq!(
            classify_raw("int", "FreeCategory", "text"),
            Classification::Continuous
        );
        assert_eq!(
            classify_raw("real", "FreeCategory", "text"),
            Classification::Continuous
        );
        assert_eq!(
            classify_raw("real", "FreeCategory", "number"),
            Classification::Continuous
        );
    }

    #[test]
    fn free_text_is_unknown() {
        assert_eq!(
            classify_raw("text", "FreeCategory", "text"),
            Classification::Unknown
        );
        assert_eq!(
            classify_raw("text", "FreeCategory", "select"),
            Classification::Unknown
        );
    }

    #[test]
    fn remaining_combinations_are_unknown() {
        assert_eq!(
            classify_raw("real", "FreeCategory", "select"),
            Classification::Unknown
        );
        assert_eq!(classify_raw("real", "Metric", "select"), Classification::Unknown);
        assert_eq!(classify_raw("date", "FreeCategory", "date"), Classification::Unknown);
        assert_eq!(classify_raw("longtext", "Notes", "text"), Classification::Unknown);
    }

    #[test]
    fn unknown_has_no_data_type() {
        assert_eq!(Classification::Nominal.data_type(), Some(DataType::Nominal));
        assert_eq!(
            Classification::Continuous.data_type(),
            Some(DataType::Continuous)
        );
        assert_eq!(Classification::Unknown.data_type(), None);
    }
}

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{CategoryType, FieldType, InputType};
use crate::error::{Result, SamError};

/// Schema snapshot: raw field definitions keyed by field name.
pub type RawSchema = BTreeMap<String, RawFieldDefinition>;

/// Cardinality hint as stored by the schema store, either a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOfValues {
    Count(i64),
    Text(String),
}

impl NumberOfValues {
    /// Numeric value of the hint, or `None` when the text is not an integer.
    pub fn as_count(&self) -> Option<i64> {
        match self {
            NumberOfValues::Count(count) => Some(*count),
            NumberOfValues::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

impl From<i64> for NumberOfValues {
    fn from(value: i64) -> Self {
        NumberOfValues::Count(value)
    }
}

impl From<&str> for NumberOfValues {
    fn from(value: &str) -> Self {
        NumberOfValues::Text(value.to_string())
    }
}

impl fmt::Display for NumberOfValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOfValues::Count(count) => write!(f, "{count}"),
            NumberOfValues::Text(raw) => f.write_str(raw),
        }
    }
}

/// One field of a project's classification schema, as returned by the schema store.
///
/// Every attribute is optional at the serde level so that a missing attribute
/// can be reported by name instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFieldDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_values: Option<NumberOfValues>,
}

impl RawFieldDefinition {
    /// Build a complete definition.
    pub fn new(
        field_title: impl Into<String>,
        field_type: impl Into<String>,
        category_type: impl Into<String>,
        input_type: impl Into<String>,
        number_of_values: i64,
    ) -> Self {
        Self {
            field_title: Some(field_title.into()),
            field_type: Some(field_type.into()),
            category_type: Some(category_type.into()),
            input_type: Some(input_type.into()),
            number_of_values: Some(NumberOfValues::Count(number_of_values)),
        }
    }

    /// Display title, falling back to the field name when the schema has none.
    pub fn title_or<'a>(&'a self, name: &'a str) -> &'a str {
        self.field_title.as_deref().unwrap_or(name)
    }

    /// Extract the four classification attributes.
    ///
    /// # Errors
    ///
    /// Returns [`SamError::SchemaIncomplete`] when an attribute is absent and
    /// [`SamError::MalformedAttribute`] when `number_of_values` is not an integer.
    pub fn classification_attributes(&self, name: &str) -> Result<ClassificationAttributes> {
        let field_type = required(name, "field_type", self.field_type.as_deref())?;
        let category_type = required(name, "category_type", self.category_type.as_deref())?;
        let input_type = required(name, "input_type", self.input_type.as_deref())?;
        let raw_count =
            self.number_of_values
                .as_ref()
                .ok_or_else(|| SamError::SchemaIncomplete {
                    field: name.to_string(),
                    attribute: "number_of_values",
                })?;
        let number_of_values =
            raw_count
                .as_count()
                .ok_or_else(|| SamError::MalformedAttribute {
                    field: name.to_string(),
                    attribute: "number_of_values",
                    value: raw_count.to_string(),
                })?;

        Ok(ClassificationAttributes {
            field_type: FieldType::from(field_type),
            category_type: CategoryType::from(category_type),
            input_type: InputType::from(input_type),
            number_of_values,
        })
    }
}

fn required<'a>(field: &str, attribute: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    value.ok_or_else(|| SamError::SchemaIncomplete {
        field: field.to_string(),
        attribute,
    })
}

/// The validated attributes classification works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationAttributes {
    pub field_type: FieldType,
    pub category_type: CategoryType,
    pub input_type: InputType,
    pub number_of_values: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_of_values_accepts_numbers_and_numeric_strings() {
        let from_number: NumberOfValues = serde_json::from_str("3").unwrap();
        let from_text: NumberOfValues = serde_json::from_str("\" 2 \"").unwrap();
        assert_eq!(from_number.as_count(), Some(3));
        assert_eq!(from_text.as_count(), Some(2));
        assert_eq!(NumberOfValues::from("many").as_count(), None);
    }

    #[test]
    fn missing_attribute_is_reported_by_name() {
        let field = RawFieldDefinition {
            field_title: Some("Venue".to_string()),
            field_type: Some("text".to_string()),
            category_type: None,
            input_type: Some("select".to_string()),
            number_of_values: Some(NumberOfValues::Count(1)),
        };
        let error = field.classification_attributes("venue").unwrap_err();
        assert_eq!(
            error,
            SamError::SchemaIncomplete {
                field: "venue".to_string(),
                attribute: "category_type",
            }
        );
    }

    #[test]
    fn malformed_cardinality_is_not_coerced() {
        let field = RawFieldDefinition {
            number_of_values: Some(NumberOfValues::from("several")),
            ..RawFieldDefinition::new("Venue", "text", "Venue", "select", 1)
        };
        let error = field.classification_attributes("venue").unwrap_err();
        assert!(matches!(
            error,
            SamError::MalformedAttribute { attribute: "number_of_values", .. }
        ));
    }

    #[test]
    fn title_falls_back_to_name() {
        let field = RawFieldDefinition {
            field_title: None,
            ..RawFieldDefinition::new("", "int", "FreeCategory", "text", 1)
        };
        assert_eq!(field.title_or("pages"), "pages");
    }
}

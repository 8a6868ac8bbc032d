use relis_model::RawSchema;

/// Add project-wide static fields the schema does not already define.
///
/// A schema field sharing a name with a static field wins.
pub fn augment_static(mut fields: RawSchema, static_fields: &RawSchema) -> RawSchema {
    for (name, field) in static_fields {
        fields
            .entry(name.clone())
            .or_insert_with(|| field.clone());
    }
    fields
}

#[cfg(test)]
mod tests {
    use relis_model::RawFieldDefinition;

    use super::*;

    fn publication_year() -> RawSchema {
        RawSchema::from([(
            "publication_year".to_string(),
            RawFieldDefinition::new("Publication year", "int", "FreeCategory", "text", 1),
        )])
    }

    #[test]
    fn inserts_missing_static_fields() {
        let augmented = augment_static(RawSchema::new(), &publication_year());
        assert_eq!(
            augmented["publication_year"].field_title.as_deref(),
            Some("Publication year")
        );
    }

    #[test]
    fn schema_definition_takes_precedence() {
        let schema = RawSchema::from([(
            "publication_year".to_string(),
            RawFieldDefinition::new("Year", "int", "FreeCategory", "select", 1),
        )]);

        let augmented = augment_static(schema, &publication_year());

        assert_eq!(augmented.len(), 1);
        assert_eq!(augmented["publication_year"].field_title.as_deref(), Some("Year"));
        assert_eq!(
            augmented["publication_year"].input_type.as_deref(),
            Some("select")
        );
    }
}

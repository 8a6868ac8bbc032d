//! Property tests for classification and assembly invariants.

use proptest::prelude::*;

use relis_model::{CategoryType, ExportConfig, FieldType, InputType, RawFieldDefinition, RawSchema};
use relis_sam::{Classification, assemble, classify, classify_attributes, is_multiple};

fn named_category() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z]{2,12}".prop_filter("not the free category", |name| name != "FreeCategory")
}

fn any_input() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("select".to_string()),
        Just("text".to_string()),
        "[a-z]{3,8}",
    ]
}

fn any_field() -> impl Strategy<Value = RawFieldDefinition> {
    (
        prop_oneof![
            Just("text".to_string()),
            Just("int".to_string()),
            Just("real".to_string()),
            Just("date".to_string()),
        ],
        prop_oneof![Just("FreeCategory".to_string()), named_category()],
        any_input(),
        -1i64..5,
    )
        .prop_map(|(field_type, category_type, input_type, count)| {
            RawFieldDefinition::new("Field", field_type, category_type, input_type, count)
        })
}

fn any_schema() -> impl Strategy<Value = RawSchema> {
    prop::collection::btree_map(
        prop_oneof![
            Just("class_id".to_string()),
            Just("user_id".to_string()),
            Just("publication_year".to_string()),
            "[a-z_]{3,12}",
        ],
        any_field(),
        0..12,
    )
}

fn config() -> ExportConfig {
    ExportConfig::builder()
        .metadata_exclusion_fields(["class_id", "user_id"])
        .static_field(
            "publication_year",
            RawFieldDefinition::new("Publication year", "int", "FreeCategory", "text", 1),
        )
        .statistical_catalog(
            relis_catalog::default_statistical_catalog().expect("default catalog"),
        )
        .build()
        .expect("build config")
}

proptest! {
    #[test]
    fn categorized_text_is_nominal(category in named_category(), input in any_input()) {
        prop_assert_eq!(
            classify(
                &FieldType::Text,
                &CategoryType::from(category.as_str()),
                &InputType::from(input.as_str()),
            ),
            Classification::Nominal
        );
    }

    #[test]
    fn free_text_is_never_classified(input in any_input()) {
        prop_assert_eq!(
            classify(&FieldType::Text, &CategoryType::FreeCategory, &InputType::from(input.as_str())),
            Classification::Unknown
        );
    }

    #[test]
    fn multiplicity_is_strictly_above_one(count in any::<i64>()) {
        prop_assert_eq!(is_multiple(count), count > 1);
    }

    #[test]
    fn model_respects_exclusions_and_classification(schema in any_schema()) {
        let config = config();
        let assembly = assemble(schema.clone(), &config);

        prop_assert!(assembly.rejected.is_empty());
        for excluded in config.metadata_exclusion_fields() {
            prop_assert!(!assembly.sam.contains(excluded));
        }

        // The schema's own definition wins, so the static field is only
        // guaranteed when that definition classifies.
        let year = schema
            .get("publication_year")
            .unwrap_or(&config.static_fields()["publication_year"]);
        let attributes = year
            .classification_attributes("publication_year")
            .expect("generated fields are complete");
        if classify_attributes(&attributes) == Classification::Unknown {
            prop_assert!(!assembly.sam.contains("publication_year"));
            prop_assert!(assembly.unclassifiable.contains(&"publication_year".to_string()));
        } else {
            prop_assert!(assembly.sam.contains("publication_year"));
        }

        for field in assembly.sam.fields() {
            prop_assert!(field.statistics.iter().all(|function| function.data_type == field.data_type));
        }

        for (name, raw) in &schema {
            let is_free_text = raw.field_type.as_deref() == Some("text")
                && raw.category_type.as_deref() == Some("FreeCategory");
            if is_free_text {
                prop_assert!(!assembly.sam.contains(name));
            }
        }
    }

    #[test]
    fn schema_fields_win_over_static_defaults(schema in any_schema()) {
        let config = config();
        let assembly = assemble(schema.clone(), &config);

        if let Some(raw) = schema.get("publication_year") {
            if let Some(field) = assembly.sam.get("publication_year") {
                prop_assert_eq!(field.title.as_str(), raw.title_or("publication_year"));
            }
            prop_assert!(!assembly.added_static.contains(&"publication_year".to_string()));
        }
    }

    #[test]
    fn assembly_is_idempotent(schema in any_schema()) {
        let config = config();
        let first = assemble(schema.clone(), &config);
        let second = assemble(schema, &config);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first.sam).expect("serialize"),
            serde_json::to_string(&second.sam).expect("serialize")
        );
    }
}

use relis_model::{DataType, StatisticalFunction};

/// Catalog entries applicable to `data_type`, in catalog order.
///
/// An empty result is a valid outcome; the field keeps an empty statistics list.
pub fn select_functions(
    data_type: DataType,
    catalog: &[StatisticalFunction],
) -> Vec<StatisticalFunction> {
    catalog
        .iter()
        .filter(|function| function.applies_to(data_type))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use relis_model::{AnalysisType, ReturnDataType};

    use super::*;

    fn function(name: &str, data_type: DataType) -> StatisticalFunction {
        StatisticalFunction::new(
            name,
            name,
            AnalysisType::Descriptive,
            data_type,
            ReturnDataType::Dataframe,
        )
    }

    #[test]
    fn keeps_matching_entries_in_catalog_order() {
        let catalog = vec![
            function("a", DataType::Nominal),
            function("b", DataType::Continuous),
            function("c", DataType::Nominal),
        ];

        let names: Vec<String> = select_functions(DataType::Nominal, &catalog)
            .into_iter()
            .map(|function| function.name)
            .collect();

        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let catalog = vec![function("a", DataType::Nominal)];
        assert!(select_functions(DataType::Continuous, &catalog).is_empty());
        assert!(select_functions(DataType::Nominal, &[]).is_empty());
    }
}

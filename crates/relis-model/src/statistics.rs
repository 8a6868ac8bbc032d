use serde::{Deserialize, Serialize};

use crate::enums::{AnalysisType, DataType, ReturnDataType};

/// A statistical operation offered by the generated analysis environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticalFunction {
    /// Unique identifier, also the function name in the generated library.
    pub name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub analysis_type: AnalysisType,
    /// Field data type the function applies to.
    pub data_type: DataType,
    pub return_data_type: ReturnDataType,
}

impl StatisticalFunction {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        analysis_type: AnalysisType,
        data_type: DataType,
        return_data_type: ReturnDataType,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            analysis_type,
            data_type,
            return_data_type,
        }
    }

    pub fn applies_to(&self, data_type: DataType) -> bool {
        self.data_type == data_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_analysis_type_under_type_key() {
        let function = StatisticalFunction::new(
            "desc_box_plot",
            "Box plots",
            AnalysisType::Descriptive,
            DataType::Continuous,
            ReturnDataType::Figure,
        );
        let value = serde_json::to_value(&function).unwrap();
        assert_eq!(value["type"], "descriptive");
        assert_eq!(value["data_type"], "Continuous");
        assert_eq!(value["return_data_type"], "Figure");
        assert!(function.applies_to(DataType::Continuous));
        assert!(!function.applies_to(DataType::Nominal));
    }
}

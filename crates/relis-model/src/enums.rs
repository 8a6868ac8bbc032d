//! Type-safe enumerations for classification schema attributes.
//!
//! The schema store hands out attributes as plain strings. The low-level
//! attributes (`field_type`, `category_type`, `input_type`) are parsed
//! leniently: anything outside the known vocabulary is kept as-is so the
//! classifier can still reach an explicit decision for it. Matching is exact
//! and case-sensitive, as the schema store writes these values verbatim.
//!
//! The abstract analysis enums (`DataType`, `AnalysisType`, `ReturnDataType`)
//! are closed and serialize with the spelling the code-generation templates
//! expect.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Abstract data type driving which statistical operations are valid for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataType {
    /// Categorical values (controlled lists, select inputs).
    Nominal,
    /// Free numeric values.
    Continuous,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Nominal => "Nominal",
            DataType::Continuous => "Continuous",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Nominal" => Ok(DataType::Nominal),
            "Continuous" => Ok(DataType::Continuous),
            _ => Err(format!("Unknown data type: {s}")),
        }
    }
}

/// Analysis category of a statistical function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    /// Describes a single field.
    Descriptive,
    /// Follows a field over publication years.
    Evolutive,
    /// Crosses two fields.
    Comparative,
}

impl AnalysisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Descriptive => "descriptive",
            AnalysisType::Evolutive => "evolutive",
            AnalysisType::Comparative => "comparative",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shape of a statistical function's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnDataType {
    Dataframe,
    Figure,
}

impl ReturnDataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnDataType::Dataframe => "Dataframe",
            ReturnDataType::Figure => "Figure",
        }
    }
}

impl fmt::Display for ReturnDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Primitive storage kind of a raw field (`field_type`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Int,
    Real,
    /// Any other storage kind (dates, images, ...).
    Other(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Int => "int",
            FieldType::Real => "real",
            FieldType::Other(raw) => raw,
        }
    }
}

impl From<&str> for FieldType {
    fn from(value: &str) -> Self {
        match value {
            "text" => FieldType::Text,
            "int" => FieldType::Int,
            "real" => FieldType::Real,
            other => FieldType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification discriminator of a raw field (`category_type`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryType {
    /// Values are typed in freely rather than picked from a category list.
    FreeCategory,
    /// A named category kind (static list, reference table, ...).
    Named(String),
}

impl CategoryType {
    pub fn as_str(&self) -> &str {
        match self {
            CategoryType::FreeCategory => "FreeCategory",
            CategoryType::Named(name) => name,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, CategoryType::FreeCategory)
    }
}

impl From<&str> for CategoryType {
    fn from(value: &str) -> Self {
        match value {
            "FreeCategory" => CategoryType::FreeCategory,
            other => CategoryType::Named(other.to_string()),
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI widget hint of a raw field (`input_type`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputType {
    Select,
    /// Any other widget (`text`, `textarea`, `date`, ...).
    Other(String),
}

impl InputType {
    pub fn as_str(&self) -> &str {
        match self {
            InputType::Select => "select",
            InputType::Other(raw) => raw,
        }
    }
}

impl From<&str> for InputType {
    fn from(value: &str) -> Self {
        match value {
            "select" => InputType::Select,
            other => InputType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Data model for the statistical analysis model (SAM) of a classification schema.
//!
//! - **field**: raw classification field definitions as the schema store returns them
//! - **enums**: low-level field attributes and abstract analysis types
//! - **statistics**: statistical function catalog entries
//! - **sam**: normalized classification fields and the model handed to rendering
//! - **config**: the immutable export configuration

pub mod config;
pub mod enums;
pub mod error;
pub mod field;
pub mod sam;
pub mod statistics;

pub use config::{EnvironmentSettings, ExportConfig, ExportConfigBuilder};
pub use enums::{AnalysisType, CategoryType, DataType, FieldType, InputType, ReturnDataType};
pub use error::{Result, SamError};
pub use field::{ClassificationAttributes, NumberOfValues, RawFieldDefinition, RawSchema};
pub use sam::{ClassificationField, RenderContext, StatisticalAnalysisModel};
pub use statistics::StatisticalFunction;

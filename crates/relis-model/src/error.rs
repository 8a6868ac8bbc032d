use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SamError {
    #[error("field `{field}` is missing required attribute `{attribute}`")]
    SchemaIncomplete {
        field: String,
        attribute: &'static str,
    },
    #[error("field `{field}` has malformed `{attribute}` value `{value}`")]
    MalformedAttribute {
        field: String,
        attribute: &'static str,
        value: String,
    },
    #[error("export configuration is missing `{key}`")]
    ConfigurationMissing { key: String },
    #[error("invalid export configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl SamError {
    /// Returns true for configuration-level failures, which abort the whole export.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SamError::ConfigurationMissing { .. } | SamError::InvalidConfiguration { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SamError>;

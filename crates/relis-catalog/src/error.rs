use std::path::PathBuf;

use relis_model::SamError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML configuration {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON schema {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration {origin}: {source}")]
    Config {
        origin: String,
        #[source]
        source: SamError,
    },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true when the configuration itself is missing sections or invalid.
    pub fn is_configuration(&self) -> bool {
        match self {
            CatalogError::Toml { .. } => true,
            CatalogError::Config { source, .. } => source.is_configuration(),
            CatalogError::Io { .. } | CatalogError::Json { .. } => false,
        }
    }
}

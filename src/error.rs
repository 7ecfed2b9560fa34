//! Error types shared by the extractors, generators and binaries.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    #[error("No record found for '{0}'")]
    NotFound(String),

    #[error("Record '{record}' has no field '{field}'")]
    MissingField { record: String, field: String },

    #[error("Field '{field}' of '{record}' is malformed: {value}")]
    InvalidField {
        record: String,
        field: String,
        value: String,
    },

    #[error("No entry for '{key}' in lookup table '{table}'")]
    Lookup { table: &'static str, key: String },

    #[error("Evolution chain of '{0}' loops back on itself")]
    EvolutionCycle(String),

    #[error("'{0}' branches before its final evolution stage")]
    UnsupportedBranch(String),

    #[error("Failed to build the {section} section for '{name}': {source}")]
    Section {
        section: &'static str,
        name: String,
        #[source]
        source: Box<WikiError>,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),
}

impl WikiError {
    pub fn lookup(table: &'static str, key: impl Into<String>) -> Self {
        Self::Lookup {
            table,
            key: key.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, WikiError>;

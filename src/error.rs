//! Error types for loading resource trees, normalizing schemas and planning views.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading a resource tree or method-name configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Document errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid document: {}", errors.join("; "))]
    InvalidDocument { errors: Vec<String> },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            #[cfg(feature = "remote")]
            LoadError::NetworkError { .. } => 3,
            _ => 2,
        }
    }
}

/// Errors while normalizing a body schema into field descriptors.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unsupported content type: {content_type}")]
    UnsupportedContentType { content_type: String },

    #[error("schema has no \"properties\" object")]
    MissingProperties,

    #[error("schema body is not valid JSON: {source}")]
    InvalidSchemaBody {
        #[source]
        source: serde_json::Error,
    },
}

impl SchemaError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Errors while walking a resource tree into view plans.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("{method} {route}: {source}")]
    Schema {
        route: String,
        method: String,
        #[source]
        source: SchemaError,
    },
}

impl PlanError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PlanError::Schema { source, .. } => source.exit_code(),
        }
    }
}

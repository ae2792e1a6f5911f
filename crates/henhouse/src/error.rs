//! Error types for every layer of henhouse.
//!
//! Each concern owns a `thiserror` enum; [`HenhouseError`] gathers them for
//! the handler layer so commands can use `?` across concerns.

use std::path::PathBuf;

use thiserror::Error;

use crate::auth::Capability;

/// The record source could not produce rows.
///
/// Every variant means the same thing to callers: no egg records are
/// available for this request. There are no partial results.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no data found in the spreadsheet")]
    NoData,

    #[error("failed to read egg records from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV export {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed sheet values export {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures of the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("the document store has been closed")]
    Closed,

    #[error("document store lock poisoned")]
    Poisoned,

    #[error("document store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("collection file {path} is not a JSON array of documents: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode documents: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Access control failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("unauthorized: sign in with --user to continue")]
    Unauthorized,

    #[error("forbidden: {user} may not {capability}")]
    Forbidden { user: String, capability: Capability },
}

/// A single field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// A "field is required" error.
    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{} is required", field);
        Self { field, message }
    }
}

/// Failures of the content collections (blog, FAQ, about).
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("missing required fields: {}", join_fields(.0))]
    Validation(Vec<ValidationError>),

    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn join_fields(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures while producing command output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("XML serialization failed: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("CSV serialization failed: {0}")]
    Csv(String),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid role '{0}' (expected admin or staff)")]
    InvalidRole(String),

    #[error("a role was given without a user")]
    RoleWithoutUser,
}

/// Any failure a command can report.
#[derive(Debug, Error)]
pub enum HenhouseError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = HenhouseError> = std::result::Result<T, E>;

//! Error types for schema loading, summarization, and validation

use thiserror::Error;

use crate::validate::Violation;

/// Result type for MathOptFormat operations
pub type Result<T> = std::result::Result<T, MofError>;

/// Errors surfaced by the schema tooling
///
/// These are deterministic structural failures. There is no retry or partial
/// recovery: every error carries enough context (document or category
/// identity, offending field) to diagnose the input directly.
#[derive(Error, Debug)]
pub enum MofError {
    #[error("unable to load schema {path}: {reason}")]
    SchemaLoad { path: String, reason: String },

    #[error("malformed schema in {context}: {detail}")]
    MalformedSchema { context: String, detail: String },

    #[error("unable to load document {path}: {reason}")]
    InstanceLoad { path: String, reason: String },

    #[error("{document} does not conform to the schema: {} violation(s)", .violations.len())]
    Validation {
        document: String,
        violations: Vec<Violation>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MofError {
    /// Shorthand for a malformed-schema error scoped to one category
    pub(crate) fn malformed(context: &str, detail: impl Into<String>) -> Self {
        MofError::MalformedSchema {
            context: context.to_string(),
            detail: detail.into(),
        }
    }
}

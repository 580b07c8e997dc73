//! Document validation
//!
//! Thin orchestration over the `jsonschema` crate: the schema is compiled
//! once per [`DocumentValidator`], then candidate model documents are checked
//! against it. A failing document reports every violation it contains, with
//! the JSON Pointer to the offending field; a failing directory run stops at
//! the first bad document so error ordering stays deterministic.

use std::fmt;
use std::path::Path;

use jsonschema::{Draft, JSONSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{MofError, Result};
use crate::schema::SchemaDocument;

/// One schema-conformance violation in a candidate document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// JSON Pointer to the field that failed validation.
    pub instance_path: String,
    /// Human-readable description of the violated constraint.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.instance_path, self.message)
    }
}

/// A compiled validator for MathOptFormat model documents
pub struct DocumentValidator {
    compiled: JSONSchema,
}

impl fmt::Debug for DocumentValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentValidator").finish_non_exhaustive()
    }
}

impl DocumentValidator {
    /// Compile the schema into a validator
    pub fn new(schema: &SchemaDocument) -> Result<Self> {
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(schema.root())
            .map_err(|e| MofError::malformed("schema", e.to_string()))?;
        Ok(Self { compiled })
    }

    /// Validate an in-memory document
    ///
    /// `document` names the instance in the resulting error; all violations
    /// are collected, not just the first.
    pub fn validate_value(&self, document: &str, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let violations: Vec<Violation> = errors
                .map(|e| Violation {
                    instance_path: e.instance_path.to_string(),
                    message: e.to_string(),
                })
                .collect();
            return Err(MofError::Validation {
                document: document.to_string(),
                violations,
            });
        }
        debug!(document, "document conforms to the schema");
        Ok(())
    }

    /// Load and validate one model file
    pub fn validate_file(&self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(|e| MofError::InstanceLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let instance: Value = serde_json::from_str(&content).map_err(|e| MofError::InstanceLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        self.validate_value(&path.display().to_string(), &instance)
    }

    /// Validate every `*.json` file directly inside a directory
    ///
    /// Files are visited in sorted name order. Validation of one document
    /// never depends on another; the run stops at the first failure so the
    /// reported error is deterministic. Returns the number of documents
    /// validated.
    pub fn validate_dir(&self, dir: &Path) -> Result<usize> {
        let mut count = 0;
        for entry in WalkDir::new(dir).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| MofError::InstanceLoad {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
            let path = entry.path();
            if !path.is_file() || path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            self.validate_file(path)?;
            count += 1;
        }
        debug!(dir = %dir.display(), count, "validated all documents");
        Ok(count)
    }
}

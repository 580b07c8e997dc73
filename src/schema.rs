//! The MathOptFormat schema document
//!
//! A [`SchemaDocument`] is loaded once per invocation and never mutated.
//! Summarizers and validators borrow it; there is no global schema singleton.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{MofError, Result};

/// The MathOptFormat schema bundled with this crate.
pub const BUNDLED_SCHEMA: &str = include_str!("../schemas/mof.schema.json");

/// Names of the summarizable categories under `definitions`.
pub const SCALAR_SETS: &str = "scalar_sets";
pub const VECTOR_SETS: &str = "vector_sets";
pub const SCALAR_FUNCTIONS: &str = "scalar_functions";
pub const VECTOR_FUNCTIONS: &str = "vector_functions";

/// The recursive nonlinear expression grammar category.
pub const NONLINEAR_TERM: &str = "NonlinearTerm";

/// A parsed MathOptFormat JSON Schema
///
/// Immutable once constructed. Category lookups navigate
/// `definitions.<name>.oneOf`, preserving the declaration order of the
/// variant nodes, which determines output table row order.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    root: Value,
}

impl SchemaDocument {
    /// Wrap an already-parsed schema value
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Load a schema from a JSON file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| MofError::SchemaLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let root: Value = serde_json::from_str(&content).map_err(|e| MofError::SchemaLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded schema");
        Ok(Self { root })
    }

    /// The schema embedded in the binary at compile time
    pub fn bundled() -> Result<Self> {
        let root: Value =
            serde_json::from_str(BUNDLED_SCHEMA).map_err(|e| MofError::SchemaLoad {
                path: "<bundled>".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { root })
    }

    /// The raw schema value
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The ordered variant nodes of one category's `oneOf` union
    pub fn category(&self, name: &str) -> Result<&[Value]> {
        let definition = self
            .root
            .get("definitions")
            .and_then(|d| d.get(name))
            .ok_or_else(|| MofError::malformed(name, "category is missing from `definitions`"))?;
        definition
            .get("oneOf")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| MofError::malformed(name, "category has no `oneOf` array"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bundled_schema_parses() {
        let schema = SchemaDocument::bundled().unwrap();
        assert!(schema.root().get("definitions").is_some());
    }

    #[test]
    fn test_bundled_schema_has_all_categories() {
        let schema = SchemaDocument::bundled().unwrap();
        for name in [
            SCALAR_SETS,
            VECTOR_SETS,
            SCALAR_FUNCTIONS,
            VECTOR_FUNCTIONS,
            NONLINEAR_TERM,
        ] {
            let variants = schema.category(name).unwrap();
            assert!(!variants.is_empty(), "category {name} should not be empty");
        }
    }

    #[test]
    fn test_missing_category() {
        let schema = SchemaDocument::from_value(json!({"definitions": {}}));
        let err = schema.category("scalar_sets").unwrap_err();
        assert!(matches!(err, MofError::MalformedSchema { .. }));
        assert!(err.to_string().contains("scalar_sets"));
    }

    #[test]
    fn test_category_without_oneof() {
        let schema = SchemaDocument::from_value(json!({
            "definitions": {"scalar_sets": {"type": "object"}}
        }));
        let err = schema.category("scalar_sets").unwrap_err();
        assert!(err.to_string().contains("oneOf"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SchemaDocument::from_path("/tmp/no-such-mof-schema-12345.json").unwrap_err();
        assert!(matches!(err, MofError::SchemaLoad { .. }));
    }

    #[test]
    fn test_from_path_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();
        let err = SchemaDocument::from_path(&path).unwrap_err();
        assert!(matches!(err, MofError::SchemaLoad { .. }));
    }
}

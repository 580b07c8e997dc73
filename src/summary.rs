//! Category summarization
//!
//! Renders the variant nodes of a schema category into markdown tables, in
//! declaration order. The nonlinear expression grammar gets special handling:
//! its variants are partitioned into leaf terms and operator families, the
//! latter classified by a fixed textual marker rather than by structural
//! inspection of arity.

use crate::error::Result;
use crate::schema::{SchemaDocument, NONLINEAR_TERM};
use crate::variant::{decode_leaf, decode_variant};

const TRIPLE_HEADER: &str = "| Name | Description | Example |\n| ---- | ----------- | ------- |\n";
const ARITY_HEADER: &str = "| Name | Arity |\n| ---- | ----- |\n";

/// The marker strings that identify operator families, and the arity label
/// reported for each. Classification is driven by this finite mapping only.
const OPERATOR_MARKERS: [(&str, &str); 3] = [
    ("Unary operators", "Unary"),
    ("Binary operators", "Binary"),
    ("N-ary operators", "N-ary"),
];

fn operator_arity(node: &serde_json::Value) -> Option<&'static str> {
    let description = node.get("description")?.as_str()?;
    OPERATOR_MARKERS
        .iter()
        .find(|(marker, _)| *marker == description)
        .map(|(_, arity)| *arity)
}

/// Render one category as a `| Name | Description | Example |` table
///
/// Every variant node is decoded in declaration order and contributes one row
/// per declared name. An empty category renders a header-only table. Decoding
/// errors propagate unchanged; there is no partial output.
pub fn summarize_category(schema: &SchemaDocument, key: &str) -> Result<String> {
    let mut table = String::from(TRIPLE_HEADER);
    for node in schema.category(key)? {
        for v in decode_variant(key, node)? {
            table.push_str(&format!(
                "| \"{}\" | {} | {} |\n",
                v.name, v.description, v.example
            ));
        }
    }
    Ok(table)
}

/// The two tables summarizing the nonlinear expression grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonlinearSummary {
    /// Leaf terms: `| Name | Description | Example |`
    pub leaves: String,
    /// Operator names with their arity class: `| Name | Arity |`
    pub operators: String,
}

/// Summarize the recursive `NonlinearTerm` category
///
/// Each variant is classified as exactly one of leaf or operator family.
/// Operator families are recognized by the marker in their description and
/// reported with the arity label of that marker; everything else must decode
/// as a constant-tagged leaf with exactly one example.
pub fn summarize_nonlinear(schema: &SchemaDocument) -> Result<NonlinearSummary> {
    let mut leaves = String::from(TRIPLE_HEADER);
    let mut operators = String::from(ARITY_HEADER);
    for node in schema.category(NONLINEAR_TERM)? {
        match operator_arity(node) {
            Some(arity) => {
                for v in decode_variant(NONLINEAR_TERM, node)? {
                    operators.push_str(&format!("| \"{}\" | {} |\n", v.name, arity));
                }
            }
            None => {
                let leaf = decode_leaf(NONLINEAR_TERM, node)?;
                leaves.push_str(&format!(
                    "| \"{}\" | {} | {} |\n",
                    leaf.name, leaf.description, leaf.example
                ));
            }
        }
    }
    Ok(NonlinearSummary { leaves, operators })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MofError;
    use serde_json::json;

    fn schema_with(definitions: serde_json::Value) -> SchemaDocument {
        SchemaDocument::from_value(json!({ "definitions": definitions }))
    }

    #[test]
    fn test_constant_tagged_row() {
        let schema = schema_with(json!({
            "scalar_sets": {"oneOf": [{
                "description": "a|b",
                "examples": ["[0,1]"],
                "properties": {"type": {"const": "interval"}}
            }]}
        }));
        let table = summarize_category(&schema, "scalar_sets").unwrap();
        assert!(table.contains("| \"interval\" | a\\|b | [0,1] |"));
    }

    #[test]
    fn test_enumerated_family_rows() {
        let schema = schema_with(json!({
            "scalar_sets": {"oneOf": [{
                "properties": {"type": {"enum": ["x", "y"]}}
            }]}
        }));
        let table = summarize_category(&schema, "scalar_sets").unwrap();
        assert!(table.contains("| \"x\" |  |  |"));
        assert!(table.contains("| \"y\" |  |  |"));
    }

    #[test]
    fn test_row_count_matches_declared_names() {
        let schema = schema_with(json!({
            "scalar_sets": {"oneOf": [
                {
                    "examples": ["a"],
                    "properties": {"type": {"const": "one"}}
                },
                {"properties": {"type": {"enum": ["two", "three", "four"]}}}
            ]}
        }));
        let table = summarize_category(&schema, "scalar_sets").unwrap();
        // 2 header lines + 1 const row + 3 enum rows.
        assert_eq!(table.lines().count(), 6);
    }

    #[test]
    fn test_empty_category_renders_header_only() {
        let schema = schema_with(json!({"scalar_sets": {"oneOf": []}}));
        let table = summarize_category(&schema, "scalar_sets").unwrap();
        assert_eq!(table, TRIPLE_HEADER);
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let schema = schema_with(json!({
            "scalar_sets": {"oneOf": [
                {"examples": ["1"], "properties": {"type": {"const": "zebra"}}},
                {"examples": ["2"], "properties": {"type": {"const": "aardvark"}}}
            ]}
        }));
        let table = summarize_category(&schema, "scalar_sets").unwrap();
        let zebra = table.find("zebra").unwrap();
        let aardvark = table.find("aardvark").unwrap();
        assert!(zebra < aardvark);
    }

    #[test]
    fn test_escaped_row_keeps_field_count() {
        let schema = schema_with(json!({
            "scalar_sets": {"oneOf": [{
                "description": "left|right",
                "examples": ["e"],
                "properties": {"type": {"const": "t"}}
            }]}
        }));
        let table = summarize_category(&schema, "scalar_sets").unwrap();
        let row = table.lines().nth(2).unwrap();
        // Unescaped pipes delimit exactly three fields.
        let fields = row.split(" | ").count();
        assert_eq!(fields, 3, "row should still have 3 fields: {row}");
        assert!(row.contains("left\\|right"));
    }

    #[test]
    fn test_decoding_error_propagates() {
        let schema = schema_with(json!({
            "scalar_sets": {"oneOf": [
                {"examples": ["ok"], "properties": {"type": {"const": "good"}}},
                {"examples": ["a", "b"], "properties": {"type": {"const": "bad"}}}
            ]}
        }));
        let err = summarize_category(&schema, "scalar_sets").unwrap_err();
        assert!(matches!(err, MofError::MalformedSchema { .. }));
    }

    #[test]
    fn test_nonlinear_partition_is_exhaustive() {
        let schema = schema_with(json!({
            "NonlinearTerm": {"oneOf": [
                {
                    "description": "A constant",
                    "examples": ["{\"type\": \"real\"}"],
                    "properties": {"type": {"const": "real"}}
                },
                {
                    "description": "Unary operators",
                    "properties": {"type": {"enum": ["log", "exp"]}}
                },
                {
                    "description": "Binary operators",
                    "properties": {"type": {"enum": ["/", "^"]}}
                },
                {
                    "description": "N-ary operators",
                    "properties": {"type": {"enum": ["+", "*"]}}
                }
            ]}
        }));
        let summary = summarize_nonlinear(&schema).unwrap();
        // Every variant lands in exactly one table.
        assert!(summary.leaves.contains("\"real\""));
        assert!(!summary.operators.contains("\"real\""));
        for op in ["log", "exp", "/", "^", "+", "*"] {
            assert!(summary.operators.contains(&format!("\"{op}\"")));
            assert!(!summary.leaves.contains(&format!("\"{op}\"")));
        }
    }

    #[test]
    fn test_arity_reflects_marker() {
        let schema = schema_with(json!({
            "NonlinearTerm": {"oneOf": [
                {"description": "Unary operators", "properties": {"type": {"enum": ["log"]}}},
                {"description": "Binary operators", "properties": {"type": {"enum": ["^"]}}},
                {"description": "N-ary operators", "properties": {"type": {"enum": ["+"]}}}
            ]}
        }));
        let summary = summarize_nonlinear(&schema).unwrap();
        assert!(summary.operators.contains("| \"log\" | Unary |"));
        assert!(summary.operators.contains("| \"^\" | Binary |"));
        assert!(summary.operators.contains("| \"+\" | N-ary |"));
    }

    #[test]
    fn test_unmarked_enum_is_not_a_leaf() {
        // A family without an operator marker cannot decode as a leaf.
        let schema = schema_with(json!({
            "NonlinearTerm": {"oneOf": [
                {"properties": {"type": {"enum": ["a", "b"]}}}
            ]}
        }));
        let err = summarize_nonlinear(&schema).unwrap_err();
        assert!(matches!(err, MofError::MalformedSchema { .. }));
    }
}

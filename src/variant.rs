//! Variant node decoding
//!
//! Each category in the schema is a `oneOf` union of variant nodes. A variant
//! takes one of two shapes, discriminated by its `properties.type` sub-schema:
//!
//! - **Constant-tagged**: `type` carries a `const` tag, plus an optional
//!   description and exactly one example.
//! - **Enumerated family**: `type` carries an `enum` of bare names sharing one
//!   structure, with no per-name description or example.
//!
//! Any other discriminator shape is rejected as malformed rather than
//! defaulted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MofError, Result};

/// A normalized `{name, description, example}` triple decoded from a variant
///
/// `description` and `example` default to the empty string, never null. The
/// description has every `|` escaped to `\|` so it cannot corrupt a markdown
/// table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedVariant {
    pub name: String,
    pub description: String,
    pub example: String,
}

/// The closed set of supported discriminator shapes
enum Discriminator<'a> {
    Const(&'a str),
    Enum(&'a [Value]),
}

fn discriminator<'a>(category: &str, node: &'a Value) -> Result<Discriminator<'a>> {
    let head = node
        .get("properties")
        .and_then(|p| p.get("type"))
        .ok_or_else(|| {
            MofError::malformed(category, "variant node has no `properties.type` discriminator")
        })?;
    if let Some(tag) = head.get("const") {
        let name = tag.as_str().ok_or_else(|| {
            MofError::malformed(category, "`const` discriminator tag is not a string")
        })?;
        Ok(Discriminator::Const(name))
    } else if let Some(names) = head.get("enum") {
        let names = names.as_array().ok_or_else(|| {
            MofError::malformed(category, "`enum` discriminator is not an array")
        })?;
        Ok(Discriminator::Enum(names))
    } else {
        Err(MofError::malformed(
            category,
            "discriminator is neither `const` nor `enum`",
        ))
    }
}

/// Escape `|` so the text is safe inside a markdown table cell
fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}

fn decode_const(category: &str, name: &str, node: &Value) -> Result<DecodedVariant> {
    let description = node
        .get("description")
        .and_then(Value::as_str)
        .map(escape_pipes)
        .unwrap_or_default();
    // An absent `examples` key defaults the example to ""; a present list
    // must contain exactly one element.
    let example = match node.get("examples") {
        None => String::new(),
        Some(examples) => {
            let examples = examples.as_array().ok_or_else(|| {
                MofError::malformed(category, format!("`examples` of \"{name}\" is not an array"))
            })?;
            if examples.len() != 1 {
                return Err(MofError::malformed(
                    category,
                    format!(
                        "variant \"{name}\" must have exactly one example, found {}",
                        examples.len()
                    ),
                ));
            }
            examples[0]
                .as_str()
                .ok_or_else(|| {
                    MofError::malformed(category, format!("example of \"{name}\" is not a string"))
                })?
                .to_string()
        }
    };
    Ok(DecodedVariant {
        name: name.to_string(),
        description,
        example,
    })
}

/// Decode one variant node into its `{name, description, example}` triples
///
/// A constant-tagged node yields one triple; an enumerated family yields one
/// per name, each with empty description and example. Pure transformation.
pub fn decode_variant(category: &str, node: &Value) -> Result<Vec<DecodedVariant>> {
    match discriminator(category, node)? {
        Discriminator::Const(name) => Ok(vec![decode_const(category, name, node)?]),
        Discriminator::Enum(names) => names
            .iter()
            .map(|name| {
                let name = name.as_str().ok_or_else(|| {
                    MofError::malformed(category, "`enum` discriminator name is not a string")
                })?;
                Ok(DecodedVariant {
                    name: name.to_string(),
                    description: String::new(),
                    example: String::new(),
                })
            })
            .collect(),
    }
}

/// Decode a variant node that must be constant-tagged
///
/// Used for leaf terms of the nonlinear expression grammar, where an
/// enumerated family is not a valid shape.
pub fn decode_leaf(category: &str, node: &Value) -> Result<DecodedVariant> {
    match discriminator(category, node)? {
        Discriminator::Const(name) => decode_const(category, name, node),
        Discriminator::Enum(_) => Err(MofError::malformed(
            category,
            "leaf term must use a `const` discriminator",
        )),
    }
}

//! Report assembly
//!
//! Composes the category tables into one markdown document with a fixed
//! heading order, and renders README templates by marker substitution.
//! Pure string composition; all decoding lives in [`crate::summary`].

use crate::error::Result;
use crate::schema::{
    SchemaDocument, SCALAR_FUNCTIONS, SCALAR_SETS, VECTOR_FUNCTIONS, VECTOR_SETS,
};
use crate::summary::{summarize_category, summarize_nonlinear};

/// Marker replaced by [`set_summary`] when rendering a README template.
pub const SET_SUMMARY_MARKER: &str = "[[[AUTOMATICALLY_GENERATED_SET_SUMMARY]]]";

/// Marker replaced by [`function_summary`] when rendering a README template.
pub const FUNCTION_SUMMARY_MARKER: &str = "[[[AUTOMATICALLY_GENERATED_FUNCTION_SUMMARY]]]";

/// Render the full schema summary
///
/// Section order is fixed: sets, functions, then the nonlinear grammar with
/// leaf nodes before operators. The output is deterministic; an unchanged
/// schema yields byte-identical text.
pub fn summarize(schema: &SchemaDocument) -> Result<String> {
    let nonlinear = summarize_nonlinear(schema)?;
    let mut report = String::from("## Sets\n");
    report.push_str("\n### Scalar Sets\n\n");
    report.push_str(&summarize_category(schema, SCALAR_SETS)?);
    report.push_str("\n### Vector Sets\n\n");
    report.push_str(&summarize_category(schema, VECTOR_SETS)?);
    report.push_str("\n## Functions\n");
    report.push_str("\n### Scalar Functions\n\n");
    report.push_str(&summarize_category(schema, SCALAR_FUNCTIONS)?);
    report.push_str("\n### Vector Functions\n\n");
    report.push_str(&summarize_category(schema, VECTOR_FUNCTIONS)?);
    report.push_str("\n### Nonlinear\n");
    report.push_str("\n#### Leaf nodes\n\n");
    report.push_str(&nonlinear.leaves);
    report.push_str("\n#### Operators\n\n");
    report.push_str(&nonlinear.operators);
    Ok(report)
}

/// The scalar and vector set tables, headed for README embedding
pub fn set_summary(schema: &SchemaDocument) -> Result<String> {
    Ok(format!(
        "#### Scalar Sets\n\n{}\n#### Vector Sets\n\n{}",
        summarize_category(schema, SCALAR_SETS)?,
        summarize_category(schema, VECTOR_SETS)?,
    ))
}

/// The scalar and vector function tables, headed for README embedding
pub fn function_summary(schema: &SchemaDocument) -> Result<String> {
    Ok(format!(
        "#### Scalar Functions\n\n{}\n#### Vector Functions\n\n{}",
        summarize_category(schema, SCALAR_FUNCTIONS)?,
        summarize_category(schema, VECTOR_FUNCTIONS)?,
    ))
}

/// Substitute the generated summaries into a README template
///
/// Each marker is replaced at most once.
pub fn render_readme(schema: &SchemaDocument, template: &str) -> Result<String> {
    let rendered = template
        .replacen(SET_SUMMARY_MARKER, &set_summary(schema)?, 1)
        .replacen(FUNCTION_SUMMARY_MARKER, &function_summary(schema)?, 1);
    Ok(rendered)
}

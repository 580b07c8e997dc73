//! MathOptFormat Schema Tools
//!
//! Validation and documentation tooling for the MathOptFormat ("MOF")
//! mathematical-optimization interchange format.
//!
//! ## Features
//!
//! - **Document Validation**: check candidate model files against the MOF
//!   JSON Schema, reporting every violated constraint with its JSON Pointer
//! - **Schema Summarization**: rebuild a structured model of the schema's
//!   union-of-variants encoding and render it as markdown documentation
//!   tables, including the recursive nonlinear expression grammar
//! - **README Generation**: substitute the generated tables into a template
//!   via `[[[AUTOMATICALLY_GENERATED_*_SUMMARY]]]` markers
//! - **Bundled Schema**: the MOF schema ships embedded in the binary, with an
//!   override for externally supplied schema files
//!
//! ## Architecture
//!
//! ```text
//! SchemaDocument ──► summary (per-category tables, nonlinear partition)
//!       │                      │
//!       │                      └──► report (fixed-order markdown document)
//!       └──► validate (compiled jsonschema, file / directory runs)
//! ```

pub mod error;
pub mod report;
pub mod schema;
pub mod summary;
pub mod validate;
pub mod variant;

pub use error::{MofError, Result};
pub use schema::SchemaDocument;
pub use summary::{summarize_category, summarize_nonlinear, NonlinearSummary};
pub use validate::{DocumentValidator, Violation};
pub use variant::DecodedVariant;

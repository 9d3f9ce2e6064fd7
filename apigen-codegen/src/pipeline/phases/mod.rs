//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the document
//! - [`LowerPhase`] - transforms the document into the IR
//! - [`AnalyzePhase`] - computes shared data from the IR

mod analyze;
mod lower;
mod validate;

pub use analyze::AnalyzePhase;
pub use lower::{LowerPhase, lower_document};
pub use validate::{
    DuplicateOperationIdLint, Lint, MissingResponseLint, PathParameterLint,
    UnresolvedReferenceLint, UnsupportedSchemaLint, ValidatePhase,
};

//! API Intermediate Representation.
//!
//! ```text
//! swagger.json → ApiDocument (parsing) → ApiIR (lowering) → Generator (codegen)
//! ```

use serde::Serialize;

use crate::{Operation, SchemaCatalog};

/// API IR - unified representation for code generation.
#[derive(Debug, Clone, Serialize)]
pub struct ApiIR {
    /// Document metadata.
    pub meta: ApiMeta,
    /// Named schemas from `components.schemas`.
    pub catalog: SchemaCatalog,
    /// Operations in document order (paths, then methods).
    pub operations: Vec<Operation>,
}

/// API metadata from the `info` object.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiMeta {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

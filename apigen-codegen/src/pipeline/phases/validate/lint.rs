//! Lint trait for document validation.

use apigen_spec::{ApiDocument, Config};

use crate::pipeline::Diagnostic;

/// A lint that checks the document for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the document and add any diagnostics.
    fn check(&self, document: &ApiDocument, config: &Config, diagnostics: &mut Vec<Diagnostic>);
}

/// Diagnostic location of an operation.
pub(crate) fn operation_location(path: &str, method: apigen_core::HttpMethod) -> String {
    format!("paths.{}.{}", path, method.as_str())
}

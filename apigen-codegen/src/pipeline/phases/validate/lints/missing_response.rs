//! Lint for operations without a typed success response.

use apigen_spec::{ApiDocument, Config};

use super::super::{Lint, lint::operation_location};
use crate::pipeline::Diagnostic;

/// Notes operations whose response type falls back to the unknown type.
pub struct MissingResponseLint;

impl Lint for MissingResponseLint {
    fn name(&self) -> &'static str {
        "missing-response"
    }

    fn description(&self) -> &'static str {
        "Note operations without a 200 application/json response schema"
    }

    fn check(&self, document: &ApiDocument, _config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        for (path, method, op, _) in document.operations() {
            if op.success_schema().is_none() {
                diagnostics.push(
                    Diagnostic::info(
                        "validate",
                        "no 200 application/json response schema; the response type is any",
                    )
                    .at(operation_location(path, method)),
                );
            }
        }
    }
}

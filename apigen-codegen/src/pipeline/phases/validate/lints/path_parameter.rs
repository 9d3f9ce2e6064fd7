//! Lint for mismatches between path templates and path parameters.

use apigen_core::path_placeholders;
use apigen_spec::{ApiDocument, Config, ParameterLocation};

use super::super::{Lint, lint::operation_location};
use crate::pipeline::Diagnostic;

/// Warns when a `{placeholder}` has no path parameter, or a path parameter
/// has no placeholder.
///
/// Either way the generated call site and request type disagree.
pub struct PathParameterLint;

impl Lint for PathParameterLint {
    fn name(&self) -> &'static str {
        "path-parameter"
    }

    fn description(&self) -> &'static str {
        "Check that path placeholders and path parameters match"
    }

    fn check(&self, document: &ApiDocument, _config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        for (path, method, op, item) in document.operations() {
            let placeholders = path_placeholders(path);
            let declared: Vec<&str> = document
                .effective_parameters(item, op)
                .into_iter()
                .filter(|p| p.location == Some(ParameterLocation::Path))
                .filter_map(|p| p.name.as_deref())
                .collect();

            for placeholder in &placeholders {
                if !declared.contains(placeholder) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "path placeholder '{}' has no matching path parameter",
                                placeholder
                            ),
                        )
                        .at(operation_location(path, method)),
                    );
                }
            }

            for name in &declared {
                if !placeholders.contains(name) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("path parameter '{}' does not appear in the path", name),
                        )
                        .at(operation_location(path, method)),
                    );
                }
            }
        }
    }
}

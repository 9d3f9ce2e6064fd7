//! Lint for references that do not point at a declared component.

use apigen_spec::{
    ApiDocument, Config, PARAMETER_REF_PREFIX, Parameter, SCHEMA_REF_PREFIX, reference_name,
};

use super::super::{Lint, lint::operation_location};
use crate::pipeline::Diagnostic;

/// Warns about dangling or non-local `$ref`s.
///
/// Schema references are still emitted by name, so a dangling one produces
/// a type that does not exist. Parameter references that cannot be
/// followed are dropped from the operation.
pub struct UnresolvedReferenceLint;

impl Lint for UnresolvedReferenceLint {
    fn name(&self) -> &'static str {
        "unresolved-reference"
    }

    fn description(&self) -> &'static str {
        "Detect references to schemas and parameters that are not declared"
    }

    fn check(&self, document: &ApiDocument, _config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        document.walk_schemas(&mut |location, schema| {
            let Some(reference) = schema.reference.as_deref() else {
                return;
            };

            let message = match reference.strip_prefix(SCHEMA_REF_PREFIX) {
                Some(name) if document.components.schemas.contains_key(name) => return,
                Some(name) => format!("reference to undefined schema '{}'", name),
                None => format!(
                    "reference '{}' is not a local schema; it is emitted as '{}'",
                    reference,
                    reference_name(reference)
                ),
            };
            diagnostics.push(Diagnostic::warning("validate", message).at(location));
        });

        for (path, item) in &document.paths {
            check_parameters(document, &item.parameters, &format!("paths.{}", path), diagnostics);
        }
        for (path, method, op, _) in document.operations() {
            check_parameters(
                document,
                &op.parameters,
                &operation_location(path, method),
                diagnostics,
            );
        }
    }
}

fn check_parameters(
    document: &ApiDocument,
    parameters: &[Parameter],
    location: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for param in parameters {
        let Some(reference) = param.reference.as_deref() else {
            continue;
        };
        if document.resolve_parameter(param).is_some() {
            continue;
        }

        let message = if reference.starts_with(PARAMETER_REF_PREFIX) {
            format!("reference to undefined parameter '{}'", reference_name(reference))
        } else {
            format!("parameter reference '{}' cannot be followed", reference)
        };
        diagnostics.push(
            Diagnostic::warning("validate", format!("{}; the parameter is skipped", message))
                .at(location),
        );
    }
}

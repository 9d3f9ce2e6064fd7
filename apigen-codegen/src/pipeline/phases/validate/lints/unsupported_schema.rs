//! Lint for schema constructs outside the supported grammar.

use apigen_spec::{ApiDocument, ComposeStrategy, Config, RequestBody};

use super::super::{Lint, lint::operation_location};
use crate::pipeline::Diagnostic;

/// Notes constructs that are simplified during generation.
///
/// - `oneOf` / `anyOf` are ignored
/// - `allOf` keeps only its first branch under `compose = "first"`
/// - `enum` on a non-string type is ignored
/// - request bodies without `application/json` content become the unknown type
pub struct UnsupportedSchemaLint;

impl Lint for UnsupportedSchemaLint {
    fn name(&self) -> &'static str {
        "unsupported-schema"
    }

    fn description(&self) -> &'static str {
        "Note schema constructs that are simplified during generation"
    }

    fn check(&self, document: &ApiDocument, config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        let compose = config.generation.compose;

        document.walk_schemas(&mut |location, schema| {
            let mut note = |message: String| {
                diagnostics.push(Diagnostic::info("validate", message).at(location));
            };

            for (keyword, branches) in [("oneOf", &schema.one_of), ("anyOf", &schema.any_of)] {
                if branches.as_ref().is_some_and(|b| !b.is_empty()) {
                    note(format!("{} is not supported and is ignored", keyword));
                }
            }

            if compose == ComposeStrategy::First
                && let Some(branches) = &schema.all_of
                && branches.len() > 1
            {
                note(format!(
                    "allOf has {} branches; only the first is used",
                    branches.len()
                ));
            }

            if schema.enum_values.is_some() && schema.reference.is_none() {
                match schema.type_name() {
                    Some("string") => {}
                    other => note(format!(
                        "enum on type '{}' is not supported and is ignored",
                        other.unwrap_or("none")
                    )),
                }
            }
        });

        for (path, method, op, _) in document.operations() {
            if let Some(body) = &op.request_body
                && body.json_schema().is_none()
                && !body.content.is_empty()
            {
                diagnostics.push(
                    Diagnostic::info(
                        "validate",
                        format!(
                            "request body has no application/json schema ({}); the body type is any",
                            media_types(body)
                        ),
                    )
                    .at(operation_location(path, method)),
                );
            }
        }
    }
}

fn media_types(body: &RequestBody) -> String {
    body.content
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

//! Lint for operations that generate colliding names.

use std::collections::HashMap;

use apigen_core::to_pascal_case;
use apigen_spec::{ApiDocument, Config};

use super::super::{Lint, lint::operation_location};
use crate::{naming::operation_id, pipeline::Diagnostic};

/// Lint that reports operations whose generated type names collide.
///
/// Two operations collide when their ids PascalCase to the same name, since
/// they would then declare the same request/response types and client
/// function. Collisions are warnings unless
/// `generation.unique_operation_ids` is set.
pub struct DuplicateOperationIdLint;

impl Lint for DuplicateOperationIdLint {
    fn name(&self) -> &'static str {
        "duplicate-operation-id"
    }

    fn description(&self) -> &'static str {
        "Detect operations that generate the same type and function names"
    }

    fn check(&self, document: &ApiDocument, config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<String, String> = HashMap::new();

        for (path, method, op, _) in document.operations() {
            let id = operation_id(method, path, op.operation_id.as_deref());
            let key = to_pascal_case(&id);
            let here = format!("{} {}", method.as_upper(), path);

            match seen.get(&key) {
                Some(first) => {
                    let message = format!(
                        "operation '{}' ({}) generates the same names as {}",
                        id, here, first
                    );
                    let diagnostic = if config.generation.unique_operation_ids {
                        Diagnostic::error("validate", message)
                    } else {
                        Diagnostic::warning("validate", message)
                    };
                    diagnostics.push(diagnostic.at(operation_location(path, method)));
                }
                None => {
                    seen.insert(key, here);
                }
            }
        }
    }
}

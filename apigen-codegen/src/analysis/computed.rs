//! Computed data from IR analysis.

use apigen_ir::ApiIR;
use serde::Serialize;

use super::needs_request_type;
use crate::naming::operation_id;

/// Pre-computed data from IR analysis.
///
/// Aggregates the counts reports and generators would otherwise derive
/// separately.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ComputedData {
    /// Number of named schemas
    pub schema_count: usize,
    /// Number of named schemas that are string enums
    pub enum_count: usize,
    /// Number of operations
    pub operation_count: usize,
    /// Number of operations that take a request argument
    pub request_type_count: usize,
    /// Operation ids in document order
    pub operation_ids: Vec<String>,
}

impl ComputedData {
    /// Compute all data from an API IR.
    pub fn from_ir(ir: &ApiIR) -> Self {
        let operation_ids = ir
            .operations
            .iter()
            .map(|op| operation_id(op.method, &op.path, op.operation_id.as_deref()))
            .collect();

        Self {
            schema_count: ir.catalog.len(),
            enum_count: ir.catalog.iter().filter(|(_, node)| node.is_enum()).count(),
            operation_count: ir.operations.len(),
            request_type_count: ir.operations.iter().filter(|op| needs_request_type(op)).count(),
            operation_ids,
        }
    }
}

//! Analysis of the lowered IR.
//!
//! - [`OperationAnalyzer`] - request/response shape of a single operation
//! - [`ComputedData`] - counts and names shared across generators

mod computed;
mod operation;

pub use computed::ComputedData;
pub use operation::{AnalyzedOperation, AnalyzedParam, OperationAnalyzer, needs_request_type};

//! Built-in lints for document validation.

mod duplicate_operation_id;
mod missing_response;
mod path_parameter;
mod unresolved_reference;
mod unsupported_schema;

pub use duplicate_operation_id::DuplicateOperationIdLint;
pub use missing_response::MissingResponseLint;
pub use path_parameter::PathParameterLint;
pub use unresolved_reference::UnresolvedReferenceLint;
pub use unsupported_schema::UnsupportedSchemaLint;

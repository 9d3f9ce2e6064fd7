//! Intermediate representation types for the apigen client generator.
//!
//! The IR is what every generator consumes. It is derived once from the
//! parsed API document and is read-only afterwards.
//!
//! # Architecture
//!
//! ```text
//! swagger.json → apigen-spec (parsing) → apigen-ir (lowered types) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no TypeScript-specific concerns)
//! - Ordered (declaration order of the document is preserved everywhere)
//! - Serializable (pipeline snapshots dump them as JSON)

mod api;
mod catalog;
mod operation;
mod schema;

pub use api::{ApiIR, ApiMeta};
pub use apigen_core::HttpMethod;
pub use catalog::SchemaCatalog;
pub use operation::{Operation, ParamLocation, Parameter, RequestBody};
pub use schema::{ObjectSchema, PrimitiveKind, SchemaKind, SchemaNode};

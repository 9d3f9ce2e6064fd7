//! TypeScript AST builders for generating types, functions, imports, and consts.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder. Generated output follows
//! the client's house style: single quotes and no semicolons.

mod consts;
mod fns;
mod imports;
mod interface;
mod objects;
mod types;

pub use consts::Const;
pub use fns::{ArrowFn, Param};
pub use imports::Import;
pub use interface::{FieldType, Interface, InterfaceField};
pub use objects::JsObject;
pub use types::TypeAlias;

//! Core utilities and types for the apigen client generator.
//!
//! This crate holds the pieces every other crate agrees on: identifier
//! casing, the HTTP method enum, and the file writing primitives used by
//! the generators and the CLI.

mod file;
mod types;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Shared types
pub use types::HttpMethod;
// String utilities
pub use utils::{path_placeholders, split_words, to_camel_case, to_pascal_case};

//! OpenAPI document and configuration parsing for apigen.
//!
//! Errors carry the source text and a span so the CLI can render them with
//! miette.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod document;
mod error;
mod file;
mod parse;

pub use config::{
    CONFIG_FILE, ClientConfig, ComposeStrategy, Config, GenerationConfig, InputConfig,
    OutputConfig, QueryField,
};
pub use document::{
    ApiDocument, Components, Info, MediaType, Operation, PARAMETER_REF_PREFIX, Parameter,
    ParameterLocation, PathItem, RequestBody, Response, SCHEMA_REF_PREFIX, Schema, SchemaType,
    reference_name,
};
pub use error::{Error, Result, SourceContext};
pub use file::SpecFile;
pub use parse::parse_document;

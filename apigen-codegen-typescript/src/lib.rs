//! TypeScript generator for the apigen OpenAPI client generator.
//!
//! Turns the lowered API IR into three TypeScript documents:
//!
//! - the types document (`types/api.types.ts` by default) with one
//!   declaration per schema plus request/response types per operation
//! - the client document (`composables/useApi.ts`) exposing a `useApi`
//!   factory with one async function per operation
//! - the helper document (`composables/useApiService.ts`), a fixed
//!   fetch wrapper every client function calls
//!
//! # Usage
//!
//! This crate is used internally by the `apigen` CLI tool. You typically
//! don't need to use it directly.
//!
//! ```ignore
//! use apigen_codegen::pipeline::Pipeline;
//! use apigen_codegen_typescript::{Generator, LanguageCodegen};
//! use apigen_spec::{ApiDocument, Config};
//! use std::path::Path;
//!
//! let document = ApiDocument::from_file("swagger.json")?;
//! let ctx = Pipeline::new().run(document, Config::default())?;
//! let generator = Generator::from_context(ctx)?;
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("."))?;
//! ```

mod code_file;
mod emitter;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;
pub mod files;

pub use apigen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use code_file::{CodeFile, RawCode};
pub use emitter::{Declaration, DeclarationEmitter, path_template};
pub use generator::Generator;
pub use naming::{TS_NAMING, is_identifier, property_access, property_key, string_literal};
pub use type_mapper::TypeScriptTypeMapper;

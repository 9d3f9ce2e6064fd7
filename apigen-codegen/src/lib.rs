//! Shared code generation utilities for the apigen client generator.
//!
//! This crate provides the language-agnostic half of generation, used by
//! language-specific generators (e.g., `apigen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language seams (LanguageCodegen, TypeMapper, NamingConvention)
//! - [`resolve`] - Schema-to-type resolution over a [`language::TypeMapper`]
//! - [`analysis`] - Per-operation request/response shape
//! - [`naming`] - Operation identifiers
//! - [`pipeline`] - Validate → lower → analyze compilation pipeline

pub mod analysis;
pub mod builder;
pub mod language;
pub mod naming;
pub mod pipeline;
pub mod resolve;

//! Compilation pipeline for code generation.
//!
//! [`Pipeline`] takes a parsed [`apigen_spec::ApiDocument`] through three
//! built-in phases (validate → lower → analyze), calling plugin hooks around
//! each one and collecting diagnostics into a shared [`CompilationContext`].
//!
//! # Example
//!
//! ```ignore
//! use apigen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(document, config)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! let generator = Generator::from_context(ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};

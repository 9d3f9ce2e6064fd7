//! Text emission for generated sources.
//!
//! AST nodes implement [`Renderable`] and describe themselves as
//! [`CodeFragment`]s; a [`CodeBuilder`] turns the fragments into indented
//! text.

mod code_builder;
mod renderable;

pub use code_builder::{CodeBuilder, INDENT};
pub use renderable::{CodeFragment, Renderable};

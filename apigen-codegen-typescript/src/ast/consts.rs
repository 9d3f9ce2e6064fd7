//! TypeScript const bindings.

use apigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A `const` binding, exported unless marked private.
///
/// The value is an already-rendered expression; string values must be
/// passed through [`crate::string_literal`] first.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            exported: true,
        }
    }

    /// Local binding inside a function body.
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        vec![CodeFragment::line(format!(
            "{}const {} = {}",
            export, self.name, self.value
        ))]
    }
}

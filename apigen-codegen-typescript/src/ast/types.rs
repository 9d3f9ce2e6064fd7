//! TypeScript type alias builder.

use apigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// An exported `type Name = T` declaration.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    comments: Vec<String>,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
            ty: ty.into(),
        }
    }

    pub fn comments(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.comments.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = CodeFragment::comments(self.comments.iter().cloned());
        fragments.push(CodeFragment::Line(format!(
            "export type {} = {}",
            self.name, self.ty
        )));

        fragments
    }
}

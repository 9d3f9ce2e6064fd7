//! TypeScript import builder.

use apigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::naming::string_literal;

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    namespace: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            namespace: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import the whole module under a name (`* as Name`).
    pub fn namespace(mut self, name: impl Into<String>) -> Self {
        self.namespace = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type ...`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        let from = string_literal(&self.from);

        match (&self.namespace, self.named.is_empty()) {
            (Some(ns), true) => format!("import {}* as {} from {}", type_kw, ns, from),
            (Some(ns), false) => format!(
                "import {}* as {}, {{ {} }} from {}",
                type_kw,
                ns,
                self.named.join(", "),
                from
            ),
            (None, false) => format!(
                "import {}{{ {} }} from {}",
                type_kw,
                self.named.join(", "),
                from
            ),
            (None, true) => format!("import {}", from),
        }
    }

    pub fn build(&self) -> String {
        CodeBuilder::typescript().line(&self.statement()).build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

//! Object literals, as passed to the service helper and returned by the
//! client factory.

use apigen_codegen::builder::{CodeFragment, Renderable};

use crate::naming::{property_key, string_literal};

/// An object literal whose entries render one per line, comma separated,
/// without a trailing comma.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    entries: Vec<String>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// `key: 'value'`, with the value quoted and escaped.
    pub fn string(self, key: &str, value: &str) -> Self {
        self.entry(format!("{}: {}", property_key(key), string_literal(value)))
    }

    /// `key: expression`, with the expression taken verbatim.
    pub fn expr(self, key: &str, expression: &str) -> Self {
        self.entry(format!("{}: {}", property_key(key), expression))
    }

    pub fn expr_if(self, condition: bool, key: &str, expression: &str) -> Self {
        if condition { self.expr(key, expression) } else { self }
    }

    pub fn shorthand(self, name: &str) -> Self {
        self.entry(name.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries alone, for embedding inside a surrounding block.
    pub fn property_fragments(&self) -> Vec<CodeFragment> {
        let count = self.entries.len();
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let separator = if index + 1 < count { "," } else { "" };
                CodeFragment::line(format!("{}{}", entry, separator))
            })
            .collect()
    }

    fn entry(mut self, rendered: String) -> Self {
        self.entries.push(rendered);
        self
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.is_empty() {
            return vec![CodeFragment::Raw("{}".to_string())];
        }
        vec![CodeFragment::block(
            "{",
            self.property_fragments(),
            Some("}".to_string()),
        )]
    }
}

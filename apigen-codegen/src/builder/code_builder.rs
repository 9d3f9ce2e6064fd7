//! Indentation-aware text buffer.

use super::{CodeFragment, Renderable};

/// One level of indentation in generated TypeScript.
pub const INDENT: &str = "  ";

/// Text buffer that tracks the current indentation level.
///
/// [`Renderable`] nodes are emitted through [`CodeBuilder::emit`]; the
/// `push_*` methods are the primitives fragments are applied with.
///
/// # Example
///
/// ```
/// use apigen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::typescript();
/// builder.apply_fragment(CodeFragment::block(
///     "export interface Pet {",
///     vec![CodeFragment::line("id: number")],
///     Some("}".to_string()),
/// ));
///
/// assert_eq!(builder.build(), "export interface Pet {\n  id: number\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn typescript() -> Self {
        Self::default()
    }

    /// Indented line, newline-terminated.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Empty line; never carries trailing indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Verbatim text, neither indented nor terminated.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Add a `//` comment line. Empty text yields a bare `//`.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("//");
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Blocks indent their body one level and close at the outer level.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => {
                self.push_line(&text);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(text) => {
                self.push_raw(&text);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                body.into_iter().for_each(|inner| self.apply_fragment(inner));
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Sequence(fragments) => {
                fragments.into_iter().for_each(|inner| self.apply_fragment(inner));
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Owned-chaining form of [`CodeBuilder::push_line`].
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        self.buffer.push_str(&INDENT.repeat(self.depth));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::typescript().line("const x = 1").build();
        assert_eq!(code, "const x = 1\n");
    }

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::typescript();
        builder.apply_fragment(CodeFragment::block(
            "export interface A {",
            vec![CodeFragment::block(
                "query: {",
                vec![CodeFragment::line("limit?: number")],
                Some("}".to_string()),
            )],
            Some("}".to_string()),
        ));

        assert_eq!(
            builder.build(),
            "export interface A {\n  query: {\n    limit?: number\n  }\n}\n"
        );
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::typescript();
        builder.push_indent().push_line("a").push_blank().push_line("b");
        assert_eq!(builder.build(), "  a\n\n  b\n");
    }

    #[test]
    fn test_comment() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_indent()
            .push_comment("The pet id")
            .push_comment("")
            .push_line("id: number");

        assert_eq!(builder.build(), "  // The pet id\n  //\n  id: number\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::typescript();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.as_str(), "x\n");
    }

    #[test]
    fn test_emit_fragments() {
        struct Node;
        impl Renderable for Node {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("List pets"),
                    CodeFragment::block(
                        "const listPets = async () => {",
                        vec![
                            CodeFragment::sequence(vec![CodeFragment::line("return 1")]),
                            CodeFragment::Raw("// raw".to_string()),
                        ],
                        Some("}".to_string()),
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&Node);
        assert_eq!(
            builder.build(),
            "// List pets\nconst listPets = async () => {\n  return 1\n// raw}\n"
        );
    }
}

//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with a
//! comment header, organized imports, and body content.

use apigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::Import;

/// A structured representation of a TypeScript file.
///
/// Organizes code into three sections: header comment, imports, and body.
/// Each section is rendered in order with a blank line between sections
/// and between body elements.
///
/// # Example
///
/// ```
/// use apigen_codegen_typescript::{CodeFile, RawCode, ast::Import};
///
/// let code = CodeFile::new()
///     .header(["Generated API client for Pets"])
///     .import(Import::new("./useApiService").named("useApiService"))
///     .add(RawCode::new("export const ready = true"))
///     .render();
///
/// assert_eq!(
///     code,
///     "// Generated API client for Pets\n\nimport { useApiService } from './useApiService'\n\nexport const ready = true\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Vec<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add comment lines at the top of the file.
    pub fn header(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.header.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Header, imports, then body, separated by blank lines.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        let mut section_open = false;

        // 1. Header comment
        for line in &self.header {
            builder.push_comment(line);
            section_open = true;
        }

        // 2. Imports
        if !self.imports.is_empty() {
            if section_open {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.emit(import);
            }
            section_open = true;
        }

        // 3. Body with blank lines between elements
        for fragments in &self.body {
            if section_open {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            section_open = true;
        }

        builder.build()
    }
}

/// A raw code fragment that implements Renderable.
///
/// Useful for adding raw code strings to CodeFile body.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    /// Create a new raw code fragment.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::Line(line.to_string())
                }
            })
            .collect()
    }
}

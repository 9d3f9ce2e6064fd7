//! Fragments: the intermediate form between AST nodes and text.
//!
//! Nodes never touch indentation; nesting is expressed with
//! [`CodeFragment::Block`] and resolved by [`super::CodeBuilder`].

#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// Indented and newline-terminated.
    Line(String),
    Blank,
    /// Appended as-is, without indentation or newline.
    Raw(String),
    /// `header`, then `body` one level deeper, then `close` if any.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    Sequence(Vec<CodeFragment>),
    /// `// text`, or a bare `//` for empty text.
    Comment(String),
}

impl CodeFragment {
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: Option<String>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    /// Turns a multi-line description into one comment per line.
    pub fn comments<I, S>(lines: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lines.into_iter().map(Self::comment).collect()
    }
}

/// An AST node that can describe itself as fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (**self).to_fragments()
    }
}

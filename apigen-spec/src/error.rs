use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors are boxed; the source text they carry makes them large.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The text being parsed and the name it is reported under, so every
/// error can point back into the file that caused it.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "swagger.json");
/// let doc = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Malformed JSON becomes [`Error::Parse`]; well-formed JSON of the
    /// wrong shape becomes [`Error::InvalidDocument`].
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = byte_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));

        if source.is_data() {
            Box::new(Error::InvalidDocument {
                src: self.named_source(),
                span,
                source,
            })
        } else {
            Box::new(Error::Parse {
                src: self.named_source(),
                span,
                source,
            })
        }
    }

    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::ConfigParse {
            src: self.named_source(),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    /// Points at the first occurrence of `needle`, when there is one.
    pub fn validation_error(&self, message: impl Into<String>, needle: Option<&str>) -> Box<Error> {
        let span = needle.and_then(|n| {
            self.src
                .find(n)
                .map(|offset| SourceSpan::from((offset, n.len())))
        });
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

/// Convert a 1-based line/column pair into a byte offset.
fn byte_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = src.split_inclusive('\n').take(line - 1).map(str::len).sum();
    let offset = line_start + column.saturating_sub(1);

    // Clamp so end-of-file errors still land inside the source.
    Some(offset.min(src.len().saturating_sub(1)))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(apigen::io),
        help("check the --spec flag or the [input] section of apigen.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("API document is not valid JSON")]
    #[diagnostic(code(apigen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("API document does not match the expected structure")]
    #[diagnostic(
        code(apigen::invalid_document),
        help("paths, components.schemas and their children must be JSON objects")
    )]
    InvalidDocument {
        #[source_code]
        src: NamedSource<String>,
        #[label("unexpected value here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse apigen.toml")]
    #[diagnostic(code(apigen::config_parse_error))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid configuration")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(apigen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset() {
        let src = "{\n  \"a\": 1,\n  \"b\": x\n}";
        // line 3, column 8 is the 'x'
        let offset = byte_offset(src, 3, 8).unwrap();
        assert_eq!(&src[offset..offset + 1], "x");
        assert_eq!(byte_offset(src, 0, 0), None);
    }

    #[test]
    fn test_json_syntax_error_is_parse() {
        let src = "{ \"paths\": ";
        let ctx = SourceContext::new(src, "swagger.json");
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        assert!(matches!(*ctx.json_error(err), Error::Parse { .. }));
    }

    #[test]
    fn test_validation_span() {
        let ctx = SourceContext::new("[output]\ntypes = \"\"\n", "apigen.toml");
        match *ctx.validation_error("empty path", Some("types")) {
            Error::Validation { span, .. } => {
                let span = span.unwrap();
                assert_eq!(span.offset(), 9);
                assert_eq!(span.len(), 5);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

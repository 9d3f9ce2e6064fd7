//! API document parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{ApiDocument, Error, Result, error::SourceContext};

impl FromStr for ApiDocument {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s, "swagger.json")
    }
}

impl ApiDocument {
    /// Parse an API document from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_document(&content, &path.display().to_string())
    }

    /// Parse an API document from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_document(content, filename)
    }
}

/// Parse a document from content with the given filename for error reporting.
pub fn parse_document(content: &str, filename: &str) -> Result<ApiDocument> {
    let source_ctx = SourceContext::new(content, filename);
    serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_valid() {
        let doc: ApiDocument = "{}".parse().unwrap();
        assert!(doc.paths.is_empty());
        assert!(doc.components.schemas.is_empty());
        assert!(doc.info.title.is_none());
    }

    #[test]
    fn test_parse_preserves_order() {
        let doc: ApiDocument = r#"{
            "info": { "title": "Pets", "version": "1.0.0" },
            "paths": {
                "/b": { "get": {} },
                "/a": { "delete": {}, "get": {} }
            },
            "components": {
                "schemas": { "Zed": { "type": "string" }, "Alpha": { "type": "integer" } }
            }
        }"#
        .parse()
        .unwrap();

        let paths: Vec<&str> = doc.paths.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["/b", "/a"]);

        let schemas: Vec<&str> = doc.components.schemas.keys().map(String::as_str).collect();
        assert_eq!(schemas, vec!["Zed", "Alpha"]);

        assert_eq!(doc.operations().count(), 3);
        assert_eq!(doc.info.title.as_deref(), Some("Pets"));
    }

    #[test]
    fn test_malformed_json_fails() {
        let err = "{ not json".parse::<ApiDocument>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_wrong_structure_fails() {
        let err = r#"{ "paths": [] }"#.parse::<ApiDocument>().unwrap_err();
        assert!(matches!(*err, Error::InvalidDocument { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = ApiDocument::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}

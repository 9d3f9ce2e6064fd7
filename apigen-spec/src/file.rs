use std::path::{Path, PathBuf};

use crate::{ApiDocument, Error, Result};

/// An API document file with both raw content and the parsed document.
pub struct SpecFile {
    path: PathBuf,
    content: String,
    document: ApiDocument,
}

impl SpecFile {
    /// Open and parse an API document file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let document = ApiDocument::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            document,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed document.
    pub fn document(&self) -> &ApiDocument {
        &self.document
    }

    /// Consume the file and return the parsed document.
    pub fn into_document(self) -> ApiDocument {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_reads_and_parses() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("swagger.json");
        fs::write(&path, r#"{ "paths": { "/ping": { "get": {} } } }"#).unwrap();

        let file = SpecFile::open(&path).unwrap();
        assert_eq!(file.path(), path.as_path());
        assert!(file.content().contains("/ping"));
        assert_eq!(file.document().operations().count(), 1);
    }

    #[test]
    fn test_open_reports_filename() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{").unwrap();

        let err = SpecFile::open(&path).err().unwrap();
        match *err {
            Error::Parse { src, .. } => assert!(src.name().ends_with("broken.json")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

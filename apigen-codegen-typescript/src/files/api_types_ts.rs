//! Types document generator.

use std::path::{Path, PathBuf};

use apigen_core::{FileRules, GeneratedFile};

use crate::{
    ast::{Interface, TypeAlias},
    code_file::{CodeFile, RawCode},
    emitter::Declaration,
};

/// Request and response types of one operation.
#[derive(Debug, Clone)]
pub struct EndpointTypes {
    pub request: Option<Interface>,
    pub response: TypeAlias,
}

/// The types document: one declaration per schema, then the
/// request/response types of every operation.
pub struct ApiTypesTs {
    path: PathBuf,
    title: String,
    generated_at: Option<String>,
    schemas: Vec<Declaration>,
    endpoints: Vec<EndpointTypes>,
}

impl ApiTypesTs {
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            generated_at: None,
            schemas: Vec::new(),
            endpoints: Vec::new(),
        }
    }

    pub fn generated_at(mut self, timestamp: Option<String>) -> Self {
        self.generated_at = timestamp;
        self
    }

    pub fn schemas(mut self, schemas: Vec<Declaration>) -> Self {
        self.schemas = schemas;
        self
    }

    pub fn endpoints(mut self, endpoints: Vec<EndpointTypes>) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Path relative to the output directory.
    pub fn relative_path(&self) -> &Path {
        &self.path
    }
}

impl GeneratedFile for ApiTypesTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let mut header = vec![format!("Generated TypeScript types for {}", self.title)];
        if let Some(at) = &self.generated_at {
            header.push(format!("Generated at: {}", at));
        }

        let mut file = CodeFile::new()
            .header(header)
            .add_all(&self.schemas)
            .add(RawCode::new("// Endpoint-specific types"));

        for endpoint in &self.endpoints {
            if let Some(request) = &endpoint.request {
                file = file.add(request);
            }
            file = file.add(&endpoint.response);
        }

        file.render()
    }
}

//! Client document generator.

use std::path::{Path, PathBuf};

use apigen_codegen::builder::{CodeFragment, Renderable};
use apigen_core::{FileRules, GeneratedFile};

use crate::{
    ast::{ArrowFn, Const, Import, Interface, JsObject, Param},
    code_file::CodeFile,
    emitter::{SERVICE_FN, TYPES_NAMESPACE},
    naming::string_literal,
};

/// The client document: the `useApi` factory with one function per
/// operation.
pub struct UseApiTs {
    path: PathBuf,
    title: String,
    generated_at: Option<String>,
    types_import: String,
    service_import: String,
    base_url: String,
    functions: Vec<ArrowFn>,
}

impl UseApiTs {
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            generated_at: None,
            types_import: "../types/api.types".to_string(),
            service_import: "./useApiService".to_string(),
            base_url: String::new(),
            functions: Vec::new(),
        }
    }

    pub fn generated_at(mut self, timestamp: Option<String>) -> Self {
        self.generated_at = timestamp;
        self
    }

    /// Module specifiers of the types document and the service helper.
    pub fn imports(
        mut self,
        types_import: impl Into<String>,
        service_import: impl Into<String>,
    ) -> Self {
        self.types_import = types_import.into();
        self.service_import = service_import.into();
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn functions(mut self, functions: Vec<ArrowFn>) -> Self {
        self.functions = functions;
        self
    }

    /// Path relative to the output directory.
    pub fn relative_path(&self) -> &Path {
        &self.path
    }

    fn factory(&self) -> ArrowFn {
        let base_url = Const::new("baseURL", "config.apiBaseUrl ?? DEFAULT_API_BASE_URL").private();

        let factory = self.functions.iter().fold(
            ArrowFn::new("useApi")
                .export()
                .param(Param::new("config").ty("ApiConfig").default("{}"))
                .body_fragment(CodeFragment::sequence(base_url.to_fragments()))
                .body_fragment(CodeFragment::blank()),
            |factory, function| {
                factory
                    .body_fragment(CodeFragment::sequence(function.to_fragments()))
                    .body_fragment(CodeFragment::blank())
            },
        );

        let map = self
            .functions
            .iter()
            .fold(JsObject::new(), |map, function| map.shorthand(function.name()));

        if map.is_empty() {
            factory.body_line("return {}")
        } else {
            factory.body_fragment(CodeFragment::block(
                "return {",
                map.property_fragments(),
                Some("}".to_string()),
            ))
        }
    }
}

impl GeneratedFile for UseApiTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let mut header = vec![format!("Generated API client for {}", self.title)];
        if let Some(at) = &self.generated_at {
            header.push(format!("Generated at: {}", at));
        }

        CodeFile::new()
            .header(header)
            .import(
                Import::new(&self.types_import)
                    .namespace(TYPES_NAMESPACE)
                    .type_only(),
            )
            .import(Import::new(&self.service_import).named(SERVICE_FN))
            .add(Interface::new("ApiConfig").optional_field("apiBaseUrl", "string"))
            .add(Const::new("DEFAULT_API_BASE_URL", string_literal(&self.base_url)))
            .add(self.factory())
            .render()
    }
}

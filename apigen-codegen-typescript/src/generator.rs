//! TypeScript types and client generator.

use std::path::Path;

use apigen_codegen::{
    analysis::{AnalyzedOperation, ComputedData, OperationAnalyzer},
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
    resolve::SchemaResolver,
};
use apigen_core::{GeneratedFile, WriteResult};
use apigen_ir::{ApiIR, ObjectSchema};
use apigen_spec::Config;
use eyre::{Result, WrapErr};

use crate::{
    TS_NAMING, TypeScriptTypeMapper,
    ast::ArrowFn,
    emitter::{Declaration, DeclarationEmitter},
    files::{ApiTypesTs, EndpointTypes, UseApiServiceTs, UseApiTs},
};

/// Format of the `Generated at` header line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// TypeScript code generator producing the types, client, and helper
/// documents.
pub struct Generator {
    ir: ApiIR,
    computed: ComputedData,
    config: Config,
    generated_at: Option<String>,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl Generator {
    /// Create a generator from a pipeline context that has run the
    /// lower and analyze phases.
    pub fn from_context(mut ctx: CompilationContext) -> Result<Self> {
        let ir = ctx.take_ir()?;
        let computed = ctx.take_computed()?;
        let generated_at = ctx
            .config
            .generation
            .timestamp
            .then(|| chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string());

        Ok(Self {
            ir,
            computed,
            config: ctx.config,
            generated_at,
        })
    }

    /// Use a fixed generation timestamp.
    pub fn with_generated_at(mut self, timestamp: impl Into<String>) -> Self {
        self.generated_at = Some(timestamp.into());
        self
    }

    /// Omit the `Generated at` header line, making output byte-stable.
    pub fn without_timestamp(mut self) -> Self {
        self.generated_at = None;
        self
    }

    pub fn computed(&self) -> &ComputedData {
        &self.computed
    }

    /// Title used in generated headers: the configured one, else the
    /// document's.
    pub fn title(&self) -> &str {
        self.config
            .client
            .title
            .as_deref()
            .unwrap_or(&self.ir.meta.title)
    }

    fn files(&self) -> (ApiTypesTs, UseApiTs, UseApiServiceTs) {
        let mapper = TypeScriptTypeMapper;
        let resolver = SchemaResolver::new(&mapper, &self.ir.catalog)
            .with_compose(self.config.generation.compose);
        let analyzer = OperationAnalyzer::new(&resolver, &TS_NAMING)
            .with_query_field(self.config.generation.query_field);
        let emitter = DeclarationEmitter::new(&resolver);

        let operations: Vec<AnalyzedOperation> = self
            .ir
            .operations
            .iter()
            .map(|op| analyzer.analyze(op))
            .collect();

        let no_fields = ObjectSchema::default();
        let schemas: Vec<Declaration> = self
            .ir
            .catalog
            .iter()
            .map(|(name, node)| {
                let fields = self.ir.catalog.fields(name).unwrap_or(&no_fields);
                emitter.schema(name, node, fields)
            })
            .collect();

        let endpoints: Vec<EndpointTypes> = operations
            .iter()
            .map(|op| EndpointTypes {
                request: emitter.request(op),
                response: emitter.response(op),
            })
            .collect();

        let functions: Vec<ArrowFn> = operations
            .iter()
            .map(|op| emitter.client_function(op))
            .collect();

        let output = &self.config.output;
        let client = &self.config.client;

        let types = ApiTypesTs::new(output.types.clone(), self.title())
            .generated_at(self.generated_at.clone())
            .schemas(schemas)
            .endpoints(endpoints);

        let api = UseApiTs::new(output.client.clone(), self.title())
            .generated_at(self.generated_at.clone())
            .imports(&client.types_import, &client.service_import)
            .base_url(&client.base_url)
            .functions(functions);

        let service = UseApiServiceTs::new(output.service.clone());

        (types, api, service)
    }

    /// Preview generated files without writing to disk.
    fn preview_files(&self) -> Vec<PreviewFile> {
        let (types, api, service) = self.files();

        vec![
            PreviewFile {
                path: types.relative_path().display().to_string(),
                content: types.render(),
            },
            PreviewFile {
                path: api.relative_path().display().to_string(),
                content: api.render(),
            },
            PreviewFile {
                path: service.relative_path().display().to_string(),
                content: service.render(),
            },
        ]
    }

    /// Generate all files into the specified output directory.
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let (types, api, service) = self.files();
        let mut result = GenerateResult::default();

        tracing::debug!(
            schemas = self.computed.schema_count,
            operations = self.computed.operation_count,
            output = %output_dir.display(),
            "writing typescript client"
        );

        let files: [(&dyn GeneratedFile, &Path); 3] = [
            (&types, types.relative_path()),
            (&api, api.relative_path()),
            (&service, service.relative_path()),
        ];

        for (file, relative) in files {
            let written = file
                .write(output_dir)
                .wrap_err_with(|| format!("failed to write {}", relative.display()))?;
            let name = relative.display().to_string();
            match written {
                WriteResult::Written => result.written.push(name),
                WriteResult::Skipped => result.skipped.push(name),
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use apigen_codegen::pipeline::Pipeline;
    use apigen_spec::ApiDocument;
    use tempfile::TempDir;

    use super::*;

    const DOC: &str = r#"{
        "info": { "title": "Pets", "version": "1.0.0" },
        "paths": { "/pets": { "get": { "operationId": "listPets" } } },
        "components": { "schemas": { "Pet": { "type": "object" } } }
    }"#;

    fn generator(config: Config) -> Generator {
        let document: ApiDocument = DOC.parse().unwrap();
        let ctx = Pipeline::new().run(document, config).unwrap();
        Generator::from_context(ctx).unwrap()
    }

    #[test]
    fn test_from_context_requires_pipeline() {
        let ctx = CompilationContext::new(ApiDocument::default(), Config::default());
        assert!(Generator::from_context(ctx).is_err());
    }

    #[test]
    fn test_timestamp_follows_config() {
        assert!(generator(Config::default()).generated_at.is_some());

        let mut config = Config::default();
        config.generation.timestamp = false;
        assert!(generator(config).generated_at.is_none());
    }

    #[test]
    fn test_fixed_timestamp_in_headers() {
        let files = generator(Config::default())
            .with_generated_at("2024-05-01T12:00:00.000Z")
            .preview();

        assert!(
            files[0]
                .content
                .starts_with("// Generated TypeScript types for Pets\n// Generated at: 2024-05-01T12:00:00.000Z\n")
        );
        assert!(files[1].content.contains("// Generated at: 2024-05-01T12:00:00.000Z\n"));
    }

    #[test]
    fn test_title_override() {
        let mut config = Config::default();
        config.client.title = Some("Store".into());
        let generator = generator(config).without_timestamp();

        assert_eq!(generator.title(), "Store");
        assert!(
            generator.preview()[0]
                .content
                .starts_with("// Generated TypeScript types for Store\n\n")
        );
    }

    #[test]
    fn test_preview_paths_follow_config() {
        let mut config = Config::default();
        config.output.types = "src/api/types.ts".into();
        let paths: Vec<String> = generator(config).preview().into_iter().map(|f| f.path).collect();

        assert_eq!(
            paths,
            vec![
                "src/api/types.ts",
                "composables/useApi.ts",
                "composables/useApiService.ts"
            ]
        );
    }

    #[test]
    fn test_generate_writes_three_files() {
        let temp = TempDir::new().unwrap();
        let generator = generator(Config::default()).without_timestamp();

        let result = generator.generate(temp.path()).unwrap();

        assert_eq!(result.written.len(), 3);
        assert!(result.skipped.is_empty());
        assert!(temp.path().join("types/api.types.ts").exists());
        assert!(temp.path().join("composables/useApi.ts").exists());

        let client = std::fs::read_to_string(temp.path().join("composables/useApi.ts")).unwrap();
        assert!(client.contains("const listPets = async (): Promise<ApiTypes.ListPetsResponse> => {"));
        assert_eq!(generator.computed().operation_count, 1);
    }
}

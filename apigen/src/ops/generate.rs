//! Generate operation - TypeScript client generation from an API document.

use apigen_codegen::{
    analysis::ComputedData,
    language::LanguageCodegen,
    pipeline::{Pipeline, SnapshotPlugin},
};
use apigen_codegen_typescript::Generator;
use apigen_spec::{ApiDocument, Config};
use eyre::{Context, Result};

use crate::reports::{ApiSummary, GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Directory under the output directory that receives pipeline snapshots.
const DEBUG_DIR: &str = ".apigen/debug";

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the document and writes (or previews) the types,
/// client, and helper documents under `config.output.dir`.
pub fn generate(
    document: ApiDocument,
    config: Config,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let output_dir = config.output.dir.clone();
    let debug_dir = output_dir.join(DEBUG_DIR);

    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let ctx = pipeline
        .run(document, config)
        .wrap_err("Pipeline failed (run `apigen check` for details)")?;

    let warnings: Vec<String> = ctx.warnings().map(|d| d.message.clone()).collect();
    let version = ctx
        .ir
        .as_ref()
        .map(|ir| ir.meta.version.clone())
        .unwrap_or_default();

    let generator = Generator::from_context(ctx)?;
    let summary = summarize(generator.title(), version, generator.computed());

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let gen_result = generator
            .generate(&output_dir)
            .wrap_err("Failed to generate code")?;
        tracing::info!(
            language = generator.language(),
            written = gen_result.written.len(),
            output = %output_dir.display(),
            "generation finished"
        );

        GenerationResult::Written(WrittenResult {
            output_dir,
            written: gen_result.written,
            skipped: gen_result.skipped,
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(GenerateReport {
        summary,
        warnings,
        result,
    })
}

pub(crate) fn summarize(title: &str, version: String, computed: &ComputedData) -> ApiSummary {
    ApiSummary {
        title: title.to_string(),
        version,
        schema_count: computed.schema_count,
        enum_count: computed.enum_count,
        operation_count: computed.operation_count,
        request_type_count: computed.request_type_count,
        operations: computed.operation_ids.clone(),
    }
}

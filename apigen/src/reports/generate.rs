//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// What the document contains.
    pub summary: ApiSummary,

    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Counts shown after generation and by `apigen check`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSummary {
    pub title: String,
    pub version: String,
    pub schema_count: usize,
    pub enum_count: usize,
    pub operation_count: usize,
    pub request_type_count: usize,
    /// Client function names in document order.
    pub operations: Vec<String>,
}

impl ApiSummary {
    pub(crate) fn render(&self, out: &mut dyn Output) {
        if self.version.is_empty() {
            out.preformatted(&self.title);
        } else {
            out.preformatted(&format!("{} v{}", self.title, self.version));
        }
        out.newline();

        out.key_value(
            "Schemas",
            &format!("{} ({} enum)", self.schema_count, self.enum_count),
        );
        out.key_value("Request types", &self.request_type_count.to_string());
        out.section(&format!("Operations ({})", self.operation_count));
        for operation in &self.operations {
            out.list_item(operation);
        }
    }
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files written, relative to the output directory.
    pub written: Vec<String>,
    /// Files left untouched.
    pub skipped: Vec<String>,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        self.summary.render(out);
        out.newline();

        out.section(&format!("Generated in {}", written.output_dir.display()));
        for file in &written.written {
            out.added_item(file);
        }
        for file in &written.skipped {
            out.list_item(&format!("{} (unchanged)", file));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

//! Check operation - document validation.

use std::path::Path;

use apigen_codegen::pipeline::{
    CompilationContext, Phase, Severity,
    phases::{AnalyzePhase, LowerPhase, ValidatePhase},
};
use apigen_spec::{ApiDocument, Config};
use eyre::{Context, Result};

use super::generate::summarize;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs every lint without failing on errors so all diagnostics reach the
/// report. Counts are included only when the document is free of errors.
pub fn check(document: ApiDocument, config: Config, spec_path: &Path) -> Result<CheckReport> {
    let mut ctx = CompilationContext::new(document, config);
    ValidatePhase::new().lint(&mut ctx);

    let summary = if ctx.has_errors() {
        None
    } else {
        LowerPhase.run(&mut ctx).wrap_err("Lowering failed")?;
        AnalyzePhase.run(&mut ctx).wrap_err("Analysis failed")?;

        let title = ctx
            .config
            .client
            .title
            .clone()
            .or_else(|| ctx.ir.as_ref().map(|ir| ir.meta.title.clone()))
            .unwrap_or_default();
        let version = ctx
            .ir
            .as_ref()
            .map(|ir| ir.meta.version.clone())
            .unwrap_or_default();
        ctx.computed
            .as_ref()
            .map(|computed| summarize(&title, version, computed))
    };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        spec_path: spec_path.to_path_buf(),
        errors,
        warnings,
        infos,
        summary,
    })
}

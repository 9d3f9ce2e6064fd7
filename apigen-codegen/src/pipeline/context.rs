//! State threaded through the pipeline.

use apigen_ir::ApiIR;
use apigen_spec::{ApiDocument, Config};
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};
use crate::analysis::ComputedData;

/// Everything the phases read and produce.
///
/// `ir` is filled by `LowerPhase` and `computed` by `AnalyzePhase`;
/// generators take both out once the pipeline has finished.
#[derive(Debug)]
pub struct CompilationContext {
    pub document: ApiDocument,
    pub config: Config,
    pub ir: Option<ApiIR>,
    pub computed: Option<ComputedData>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(document: ApiDocument, config: Config) -> Self {
        Self {
            document,
            config,
            ir: None,
            computed: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.severity == severity)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.with_severity(Severity::Error).count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    /// Fails unless `LowerPhase` has run.
    pub fn take_ir(&mut self) -> Result<ApiIR> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("no IR in context; the lower phase has not run"))
    }

    /// Fails unless `AnalyzePhase` has run.
    pub fn take_computed(&mut self) -> Result<ComputedData> {
        self.computed
            .take()
            .ok_or_else(|| eyre!("no computed data in context; the analyze phase has not run"))
    }
}

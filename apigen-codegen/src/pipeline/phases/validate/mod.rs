//! Validate phase - runs lints on the document.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{
    DuplicateOperationIdLint, MissingResponseLint, PathParameterLint, UnresolvedReferenceLint,
    UnsupportedSchemaLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the document using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateOperationIdLint),
                Box::new(UnresolvedReferenceLint),
                Box::new(PathParameterLint),
                Box::new(UnsupportedSchemaLint),
                Box::new(MissingResponseLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Run every lint and record the diagnostics, without failing.
    pub fn lint(&self, ctx: &mut CompilationContext) {
        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&ctx.document, &ctx.config, &mut ctx.diagnostics);
            tracing::trace!(
                lint = lint.name(),
                checks = lint.description(),
                found = ctx.diagnostics.len() - before,
                "lint finished"
            );
        }
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check the API document and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        self.lint(ctx);

        // Warnings and info are allowed
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

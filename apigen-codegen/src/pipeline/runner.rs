//! Runs phases in order with plugin hooks around each.

use apigen_spec::{ApiDocument, Config};
use eyre::Result;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{AnalyzePhase, LowerPhase, ValidatePhase},
};

/// Validate, lower and analyze, then any extra phases in the order they
/// were added.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".apigen/debug"))
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(document, config)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// The built-in phases with the default lint set.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Swap in a validate phase with a different lint set.
    pub fn validate_with(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Runs after analyze, so `ctx.ir` and `ctx.computed` are populated.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a parsed document.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally, including validation
    /// producing error diagnostics.
    pub fn run(&self, document: ApiDocument, config: Config) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(document, config);

        let builtin: [&dyn Phase; 3] = [&self.validate, &LowerPhase, &AnalyzePhase];
        for phase in builtin {
            self.run_phase(phase, &mut ctx)?;
        }

        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, "{}", phase.description());

        for plugin in &self.plugins {
            tracing::trace!(plugin = plugin.name(), phase = phase_name, "before hook");
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        tracing::debug!(
            phase = phase_name,
            diagnostics = ctx.diagnostics.len(),
            "phase finished"
        );
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::pipeline::Diagnostic;

    /// Records every hook call as `before:<phase>` or `after:<phase>`.
    #[derive(Default, Clone)]
    struct HookLog(Arc<Mutex<Vec<String>>>);

    impl HookLog {
        fn calls(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Plugin for HookLog {
        fn name(&self) -> &'static str {
            "hook-log"
        }

        fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.0.lock().unwrap().push(format!("before:{}", phase));
            Ok(())
        }

        fn on_after_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.0.lock().unwrap().push(format!("after:{}", phase));
            Ok(())
        }
    }

    struct MarkerPhase;

    impl Phase for MarkerPhase {
        fn name(&self) -> &'static str {
            "marker"
        }

        fn description(&self) -> &'static str {
            "Records that extra phases see analyzed data"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            assert!(ctx.computed.is_some());
            ctx.push(Diagnostic::info("marker", "ran"));
            Ok(())
        }
    }

    fn document(json: &str) -> ApiDocument {
        json.parse().expect("test document should parse")
    }

    #[test]
    fn test_pipeline_populates_ir_and_computed() {
        let ctx = Pipeline::new()
            .run(document("{}"), Config::default())
            .expect("pipeline should succeed");

        assert!(ctx.ir.is_some());
        assert!(ctx.computed.is_some());
    }

    #[test]
    fn test_hooks_wrap_each_phase_in_order() {
        let log = HookLog::default();

        let ctx = Pipeline::new()
            .plugin(log.clone())
            .phase(MarkerPhase)
            .run(document("{}"), Config::default())
            .expect("pipeline should succeed");

        assert_eq!(
            log.calls(),
            vec![
                "before:validate",
                "after:validate",
                "before:lower",
                "after:lower",
                "before:analyze",
                "after:analyze",
                "before:marker",
                "after:marker",
            ]
        );
        assert_eq!(ctx.diagnostics.last().map(|d| d.phase.as_str()), Some("marker"));
    }

    #[test]
    fn test_lint_error_stops_before_lowering() {
        let mut config = Config::default();
        config.generation.unique_operation_ids = true;
        let log = HookLog::default();

        let doc = document(
            r#"{
                "paths": {
                    "/a": { "get": { "operationId": "fetch" } },
                    "/b": { "get": { "operationId": "fetch" } }
                }
            }"#,
        );

        let err = Pipeline::new().plugin(log.clone()).run(doc, config).unwrap_err();
        assert!(err.to_string().contains("1 error"));
        assert_eq!(log.calls(), vec!["before:validate"]);
    }

    #[test]
    fn test_custom_validate_phase_replaces_lints() {
        let mut config = Config::default();
        config.generation.unique_operation_ids = true;

        let doc = document(
            r#"{
                "paths": {
                    "/a": { "get": { "operationId": "fetch" } },
                    "/b": { "get": { "operationId": "fetch" } }
                }
            }"#,
        );

        let ctx = Pipeline::new()
            .validate_with(ValidatePhase::empty())
            .run(doc, config)
            .expect("no lints, no errors");
        assert_eq!(ctx.ir.map(|ir| ir.operations.len()), Some(2));
    }
}

//! Analyze phase - computes shared data from the IR.

use eyre::Result;

use crate::{
    analysis::ComputedData,
    pipeline::{CompilationContext, Phase},
};

/// Phase that computes shared analysis data from the IR.
///
/// Must run after `LowerPhase`.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Compute shared data from the IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = ctx
            .ir
            .as_ref()
            .ok_or_else(|| eyre::eyre!("IR not set - AnalyzePhase must run after LowerPhase"))?;

        let computed = ComputedData::from_ir(ir);
        tracing::debug!(
            schemas = computed.schema_count,
            operations = computed.operation_count,
            "analyzed IR"
        );
        ctx.computed = Some(computed);
        Ok(())
    }
}

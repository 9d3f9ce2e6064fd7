//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// One step of the pipeline.
///
/// Fatal failures are returned as errors and stop the run. Anything the
/// user should merely hear about goes into `ctx.diagnostics`.
pub trait Phase: Send + Sync {
    /// Used in logs, plugin hooks and snapshot file names.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}

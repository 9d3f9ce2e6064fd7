//! Dumps pipeline state after each phase.
//!
//! Backs `apigen generate --visualize`: every phase leaves a
//! `<phase>.json` behind so the lowered IR and analysis can be inspected.

use std::{fs, path::PathBuf};

use eyre::{Result, WrapErr};
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};
use crate::analysis::ComputedData;

/// Borrowed view of the context, serialized as one snapshot file.
#[derive(Debug, Serialize)]
pub struct PhaseSnapshot<'a> {
    pub phase: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ir: Option<&'a apigen_ir::ApiIR>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed: Option<&'a ComputedData>,
    pub diagnostics: &'a [Diagnostic],
}

impl<'a> PhaseSnapshot<'a> {
    pub fn capture(phase: &'a str, ctx: &'a CompilationContext) -> Self {
        Self {
            phase,
            ir: ctx.ir.as_ref(),
            computed: ctx.computed.as_ref(),
            diagnostics: &ctx.diagnostics,
        }
    }
}

pub struct SnapshotPlugin {
    output_dir: PathBuf,
}

impl SnapshotPlugin {
    /// The directory is created on the first write.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn write(&self, snapshot: &PhaseSnapshot<'_>) -> Result<()> {
        fs::create_dir_all(&self.output_dir)
            .wrap_err_with(|| format!("failed to create {}", self.output_dir.display()))?;
        let path = self.output_dir.join(format!("{}.json", snapshot.phase));
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&path, json).wrap_err_with(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote phase snapshot");
        Ok(())
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        self.write(&PhaseSnapshot::capture(phase, ctx))
    }
}

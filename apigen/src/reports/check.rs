//! Result of `apigen check`.

use std::path::PathBuf;

use super::{
    generate::ApiSummary,
    output::{Output, Report},
};

/// Diagnostics grouped by severity, already formatted with their location.
#[derive(Debug)]
pub struct CheckReport {
    pub spec_path: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    /// Absent when errors stopped the document from being lowered.
    pub summary: Option<ApiSummary>,
}

impl CheckReport {
    /// Warnings and infos never fail a check.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let problems = self
            .errors
            .iter()
            .map(|msg| ("error", msg))
            .chain(self.warnings.iter().map(|msg| ("warning", msg)));
        for (label, msg) in problems {
            out.warning(&format!("{}: {}", label, msg));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.spec_path.display()));
        if let Some(summary) = &self.summary {
            out.newline();
            summary.render(out);
        }
    }
}

//! What commands show the user.
//!
//! Operations return plain report values; rendering goes through an
//! [`Output`](output::Output) so tests can capture it.

mod check;
mod generate;
mod output;

pub use check::CheckReport;
pub use generate::{ApiSummary, GenerateReport, GenerationResult, PreviewFile, WrittenResult};
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Report, TerminalOutput};

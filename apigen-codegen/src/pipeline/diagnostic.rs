//! Findings reported by pipeline phases.

use std::fmt;

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// Stops generation before any output is produced.
    Error,
    /// Generation continues, but the output may not be what was intended.
    Warning,
    /// A construct was simplified or skipped.
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    pub fn is_error(&self) -> bool {
        *self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding, tagged with the phase that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub phase: String,
    pub message: String,
    /// Dotted path into the document, such as `paths./pets.get`.
    pub location: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {} (at {})", self.severity, self.message, location),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::warning("validate", "reference to undefined schema 'Pet'")
            .at("components.schemas.Owner.properties.pet");
        assert_eq!(
            diag.to_string(),
            "warning: reference to undefined schema 'Pet' (at components.schemas.Owner.properties.pet)"
        );
    }

    #[test]
    fn test_diagnostic_without_location() {
        let diag = Diagnostic::error("validate", "duplicate operation");
        assert!(diag.severity.is_error());
        assert_eq!(diag.to_string(), "error: duplicate operation");
    }
}
